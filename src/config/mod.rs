/// 設定管理モジュール
///
/// このモジュールは2層の設定構造を提供します:
/// 1. AppConfig - コンパイル時定数として定義される静的設定（APP_CONFIG）
/// 2. ClientConfig - クライアント生成時に渡される動的設定
///
/// # 使用例
///
/// ```rust
/// use youtube_partner::config::{APP_CONFIG, ClientConfig};
///
/// // AppConfig: グローバル定数として直接参照
/// let root_url = APP_CONFIG.api.root_url;
///
/// // ClientConfig: パース時に自動検証
/// let config = ClientConfig::from_toml_str("timeout_seconds = 30").unwrap();
/// assert_eq!(config.root_url, root_url);
/// ```
pub mod app;
pub mod client;
pub mod error;

pub use app::APP_CONFIG;
pub use client::ClientConfig;
pub use error::ConfigError;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_defaults_follow_app_config() {
        // ClientConfig のデフォルト値が APP_CONFIG と一致することを確認
        let config = ClientConfig::default();
        assert_eq!(config.root_url, APP_CONFIG.api.root_url);
        assert_eq!(config.timeout_seconds, APP_CONFIG.api.timeout_seconds);
        assert_eq!(config.user_agent, APP_CONFIG.api.user_agent);
        assert!(config.validate().is_ok());
    }
}
