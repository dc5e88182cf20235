// ProviderApi - Provider API用HTTPクライアント
//
// Provider APIサーバーの4操作（作成・一覧・更新・削除）を呼び出す。
// 再試行・タイムアウト・キャンセルは行わない（ユーザー操作ごとに
// 1リクエストを発行するだけの薄いラッパー）。

use crate::config::ClientConfig;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, error, info};

/// ローン提供会社レコード
///
/// Provider APIのレスポンスで使用する。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Provider {
    /// レコードID（ストアが採番、不変）
    pub id: i64,
    /// 提供会社名
    pub provider_name: String,
    /// 金利
    pub interest_rate: f64,
    /// 融資上限額
    pub max_loan_amount: f64,
}

/// ローン提供会社の入力
///
/// 作成・更新リクエストのボディ。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProviderInput {
    /// 提供会社名
    pub provider_name: String,
    /// 金利
    pub interest_rate: f64,
    /// 融資上限額
    pub max_loan_amount: f64,
}

/// ProviderApi用エラー型
///
/// # エラー種別
/// - `Http`: HTTPリクエストのエラーレスポンス
/// - `Network`: ネットワーク接続エラー
/// - `Decode`: レスポンスボディの解析エラー
#[derive(Debug, Error)]
pub enum ApiClientError {
    /// HTTPエラー（ステータスコード付き）
    #[error("HTTPエラー: status={status}, message={message}")]
    Http {
        /// HTTPステータスコード
        status: u16,
        /// エラーメッセージ
        message: String,
    },

    /// ネットワークエラー
    #[error("ネットワークエラー: {0}")]
    Network(String),

    /// レスポンス解析エラー
    #[error("レスポンス解析エラー: {0}")]
    Decode(String),
}

/// ProviderApi - Provider APIクライアント
///
/// 各操作はAPIサーバーの1エンドポイントと1:1で対応する。
#[derive(Clone)]
pub struct ProviderApi {
    /// HTTPクライアント
    client: Client,
    /// 接続設定
    config: ClientConfig,
}

impl std::fmt::Debug for ProviderApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderApi")
            .field("api_url", &self.config.api_url())
            .finish_non_exhaustive()
    }
}

impl ProviderApi {
    /// 設定からProviderApiを作成
    ///
    /// # 引数
    /// * `config` - クライアント設定
    pub fn new(config: ClientConfig) -> Self {
        info!(api_url = config.api_url(), "ProviderApiを初期化");

        Self {
            client: Client::new(),
            config,
        }
    }

    /// プロバイダーを作成（POST /providers）
    ///
    /// # 戻り値
    /// * `Ok(Provider)` - 採番されたidを含む作成済みレコード
    /// * `Err(ApiClientError)` - エラー
    pub async fn create(&self, input: &ProviderInput) -> Result<Provider, ApiClientError> {
        let url = self.config.providers_url();
        debug!(url = %url, "プロバイダーを作成");

        let response = self
            .client
            .post(&url)
            .json(input)
            .send()
            .await
            .map_err(|e| ApiClientError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "プロバイダー作成エラー");
            return Err(ApiClientError::Http {
                status: status.as_u16(),
                message: body,
            });
        }

        response
            .json()
            .await
            .map_err(|e| ApiClientError::Decode(e.to_string()))
    }

    /// 全プロバイダーを一覧取得（GET /providers）
    ///
    /// # 戻り値
    /// * `Ok(Vec<Provider>)` - 全レコード（挿入順）
    /// * `Err(ApiClientError)` - エラー
    pub async fn list(&self) -> Result<Vec<Provider>, ApiClientError> {
        let url = self.config.providers_url();
        debug!(url = %url, "プロバイダー一覧を取得");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiClientError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "プロバイダー一覧取得エラー");
            return Err(ApiClientError::Http {
                status: status.as_u16(),
                message: body,
            });
        }

        response
            .json()
            .await
            .map_err(|e| ApiClientError::Decode(e.to_string()))
    }

    /// プロバイダーを更新（PUT /providers/{id}）
    ///
    /// # 戻り値
    /// * `Ok(())` - 更新成功（存在しないidもサーバー側で成功として扱われる）
    /// * `Err(ApiClientError)` - エラー
    pub async fn update(&self, id: i64, input: &ProviderInput) -> Result<(), ApiClientError> {
        let url = self.config.provider_url(id);
        debug!(url = %url, "プロバイダーを更新");

        let response = self
            .client
            .put(&url)
            .json(input)
            .send()
            .await
            .map_err(|e| ApiClientError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, id = id, "プロバイダー更新エラー");
            return Err(ApiClientError::Http {
                status: status.as_u16(),
                message: body,
            });
        }

        info!(id = id, "プロバイダーを更新");
        Ok(())
    }

    /// プロバイダーを削除（DELETE /providers/{id}）
    ///
    /// # 戻り値
    /// * `Ok(())` - 削除成功（存在しないidもサーバー側で成功として扱われる）
    /// * `Err(ApiClientError)` - エラー
    pub async fn delete(&self, id: i64) -> Result<(), ApiClientError> {
        let url = self.config.provider_url(id);
        debug!(url = %url, "プロバイダーを削除");

        let response = self
            .client
            .delete(&url)
            .send()
            .await
            .map_err(|e| ApiClientError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, id = id, "プロバイダー削除エラー");
            return Err(ApiClientError::Http {
                status: status.as_u16(),
                message: body,
            });
        }

        info!(id = id, "プロバイダーを削除");
        Ok(())
    }
}
