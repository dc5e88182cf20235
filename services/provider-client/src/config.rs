// クライアント設定
//
// Provider APIサーバーへの接続設定を管理する。
// ベースURLは固定ポート(5100)のAPIサーバーを指す。

/// ベースURL環境変数名
const API_URL_ENV: &str = "API_URL";

/// デフォルトのベースURL（Provider APIの固定リッスンポート）
const DEFAULT_API_URL: &str = "http://localhost:5100";

/// Provider APIクライアントの設定
///
/// # フィールド
/// - `api_url`: Provider APIサーバーのベースURL (例: "http://localhost:5100")
#[derive(Debug, Clone)]
pub struct ClientConfig {
    api_url: String,
}

impl ClientConfig {
    /// 新しい設定を作成
    ///
    /// # 引数
    /// - `api_url`: Provider APIサーバーのベースURL
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
        }
    }

    /// 環境変数から設定を読み込み
    ///
    /// # 環境変数
    /// - `API_URL`: Provider APIサーバーのベースURL
    ///   （省略時: http://localhost:5100）
    pub fn from_env() -> Self {
        let api_url = std::env::var(API_URL_ENV).unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self { api_url }
    }

    /// ベースURLを取得
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// コレクションエンドポイントURLを構築
    ///
    /// # 戻り値
    /// 完全なURL (例: "http://localhost:5100/providers")
    pub fn providers_url(&self) -> String {
        format!("{}/providers", self.api_url.trim_end_matches('/'))
    }

    /// 単一レコードエンドポイントURLを構築
    ///
    /// # 戻り値
    /// 完全なURL (例: "http://localhost:5100/providers/1")
    pub fn provider_url(&self, id: i64) -> String {
        format!("{}/providers/{}", self.api_url.trim_end_matches('/'), id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_new_creates_config() {
        let config = ClientConfig::new("http://example.com:5100");

        assert_eq!(config.api_url(), "http://example.com:5100");
    }

    #[test]
    fn test_providers_url_without_trailing_slash() {
        let config = ClientConfig::new("http://localhost:5100");

        assert_eq!(config.providers_url(), "http://localhost:5100/providers");
    }

    #[test]
    fn test_providers_url_with_trailing_slash() {
        let config = ClientConfig::new("http://localhost:5100/");

        assert_eq!(config.providers_url(), "http://localhost:5100/providers");
    }

    #[test]
    fn test_provider_url_includes_id() {
        let config = ClientConfig::new("http://localhost:5100");

        assert_eq!(config.provider_url(42), "http://localhost:5100/providers/42");
    }

    #[test]
    #[serial]
    fn test_from_env_reads_api_url() {
        // 環境変数を設定 (Rust 2024ではunsafe)
        unsafe {
            std::env::set_var(API_URL_ENV, "http://test.example.com:5100");
        }

        let config = ClientConfig::from_env();
        assert_eq!(config.api_url(), "http://test.example.com:5100");

        // クリーンアップ
        unsafe {
            std::env::remove_var(API_URL_ENV);
        }
    }

    #[test]
    #[serial]
    fn test_from_env_falls_back_to_default() {
        unsafe {
            std::env::remove_var(API_URL_ENV);
        }

        let config = ClientConfig::from_env();
        assert_eq!(config.api_url(), DEFAULT_API_URL);
    }
}
