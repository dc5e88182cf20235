// アプリケーション状態
//
// プロバイダーリストのインメモリミラーと、単一の編集バッファ（フォーム）を
// 保持する。各操作はProviderApi経由でサーバーに反映され、成功時は
// 全件再取得でミラーを同期する。失敗時はログに記録するだけで、
// ローカル状態は一切変更しない。

use crate::api::{ApiClientError, Provider, ProviderApi, ProviderInput};
use tracing::{error, warn};

/// 金利フィールドの入力文字数上限
///
/// 表示長の上限であり、値域の検証ではない。
const INTEREST_RATE_MAX_CHARS: usize = 5;

/// 編集バッファ（フォーム）
///
/// 3つのテキストフィールドを持つ一時的な単一レコードのバッファ。
/// 「空（新規作成）」か「選択されたプロバイダーの値」のいずれかを映し、
/// 送信成功または明示的なキャンセルでリセットされる。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProviderForm {
    /// 提供会社名
    pub provider_name: String,
    /// 金利（テキスト、5文字まで）
    pub interest_rate: String,
    /// 融資上限額（テキスト、桁区切りなしの数字）
    pub max_loan_amount: String,
}

impl ProviderForm {
    /// フォームを空にリセット
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// 提供会社名フィールドを更新
    pub fn set_provider_name(&mut self, value: &str) {
        self.provider_name = value.to_string();
    }

    /// 金利フィールドを更新
    ///
    /// 5文字を超える入力は入力処理層で切り詰める（値域の検証ではない）。
    pub fn set_interest_rate(&mut self, value: &str) {
        self.interest_rate = value.chars().take(INTEREST_RATE_MAX_CHARS).collect();
    }

    /// 融資上限額フィールドを更新
    ///
    /// 桁区切りのカンマを取り除き、残りが数値として解釈できる場合のみ
    /// フィールドを更新する。解釈できない入力は黙って捨てられる
    /// （フィールドは変化せず、エラー表示もしない）。
    pub fn set_max_loan_amount(&mut self, value: &str) {
        let raw = value.replace(',', "");
        if raw.is_empty() {
            self.max_loan_amount.clear();
            return;
        }
        if raw.parse::<f64>().is_ok() {
            self.max_loan_amount = raw;
        }
    }

    /// フォームの内容を送信用の入力に変換
    ///
    /// 数値フィールドが解釈できない場合はNoneを返す。
    pub fn to_input(&self) -> Option<ProviderInput> {
        let interest_rate = self.interest_rate.trim().parse().ok()?;
        let max_loan_amount = self.max_loan_amount.trim().parse().ok()?;
        Some(ProviderInput {
            provider_name: self.provider_name.clone(),
            interest_rate,
            max_loan_amount,
        })
    }
}

/// クライアントアプリケーション状態
///
/// - `providers`: サーバーのプロバイダーリストのミラー。
///   変更操作のたびに全件再取得で丸ごと置き換えられる。
/// - `form`: 編集バッファ。
/// - `edit_id`: 編集中のプロバイダーID。Noneは新規作成モード。
pub struct App {
    api: ProviderApi,
    providers: Vec<Provider>,
    form: ProviderForm,
    edit_id: Option<i64>,
}

impl App {
    /// 新しいAppを作成
    pub fn new(api: ProviderApi) -> Self {
        Self {
            api,
            providers: Vec::new(),
            form: ProviderForm::default(),
            edit_id: None,
        }
    }

    /// プロバイダーリストのミラーを取得
    pub fn providers(&self) -> &[Provider] {
        &self.providers
    }

    /// フォームを取得
    pub fn form(&self) -> &ProviderForm {
        &self.form
    }

    /// フォームを可変で取得（フィールド編集用）
    pub fn form_mut(&mut self) -> &mut ProviderForm {
        &mut self.form
    }

    /// 編集中のプロバイダーIDを取得（Noneは新規作成モード）
    pub fn edit_id(&self) -> Option<i64> {
        self.edit_id
    }

    /// プロバイダーリストを全件再取得してミラーを置き換える
    ///
    /// 同期機構はこの全件再取得のみ（再試行もポーリングもしない）。
    /// 失敗時はログに記録し、ミラーは変更しない。
    pub async fn load(&mut self) {
        match self.api.list().await {
            Ok(providers) => {
                self.providers = providers;
            }
            Err(e) => {
                log_failure("Failed to fetch providers", &e);
            }
        }
    }

    /// フォームを送信
    ///
    /// `edit_id`が設定されていればそのidのUpdate、なければCreateを発行する。
    /// 成功時はフォームをリセットしてリストを再取得する。
    /// 失敗時はログに記録するだけで、フォームも`edit_id`も保持される。
    pub async fn submit(&mut self) {
        let Some(input) = self.form.to_input() else {
            // 数値フィールドが解釈できないまま送信された場合も
            // 失敗と同様にログのみでフォームは保持する
            error!("フォームの数値フィールドを解釈できないため送信を中止");
            return;
        };

        match self.edit_id {
            Some(id) => match self.api.update(id, &input).await {
                Ok(()) => {
                    self.edit_id = None;
                    self.form.reset();
                    self.load().await;
                }
                Err(e) => {
                    log_failure("Save failed", &e);
                }
            },
            None => match self.api.create(&input).await {
                Ok(_) => {
                    self.form.reset();
                    self.load().await;
                }
                Err(e) => {
                    log_failure("Save failed", &e);
                }
            },
        }
    }

    /// 編集を開始
    ///
    /// 選択されたプロバイダーの3フィールドをフォームにコピーし、
    /// `edit_id`にそのidを設定する。
    ///
    /// # 戻り値
    /// * `true` - 編集を開始した
    /// * `false` - idに一致するプロバイダーがミラーに存在しない（状態は不変）
    pub fn begin_edit(&mut self, id: i64) -> bool {
        let Some(provider) = self.providers.iter().find(|p| p.id == id) else {
            warn!(id = id, "編集対象のプロバイダーがリストに存在しない");
            return false;
        };

        self.form.provider_name = provider.provider_name.clone();
        self.form.interest_rate = provider.interest_rate.to_string();
        self.form.max_loan_amount = provider.max_loan_amount.to_string();
        self.edit_id = Some(id);
        true
    }

    /// 編集をキャンセル
    ///
    /// `edit_id`をクリアし、フォームを空にリセットする
    /// （未保存の変更は破棄される）。
    pub fn cancel_edit(&mut self) {
        self.edit_id = None;
        self.form.reset();
    }

    /// プロバイダーを削除
    ///
    /// 成功時はリストを再取得する。失敗時はログのみ。
    pub async fn delete(&mut self, id: i64) {
        match self.api.delete(id).await {
            Ok(()) => {
                self.load().await;
            }
            Err(e) => {
                log_failure("Delete failed", &e);
            }
        }
    }

    /// テスト用にミラーを直接設定
    #[cfg(test)]
    fn set_providers_for_test(&mut self, providers: Vec<Provider>) {
        self.providers = providers;
    }
}

/// 操作失敗をログに記録する
///
/// クライアントはエラー内容を検査せず、UIにも表示しない。
fn log_failure(context: &str, e: &ApiClientError) {
    error!(error = %e, "{}", context);
}
