/// クライアント設定モジュール
///
/// `YoutubePartner` クライアント生成時に渡される動的設定を管理します。
/// 埋め込み側アプリケーションは TOML 文字列から読み込むこともできます。
///
/// ```toml
/// root_url = "https://www.googleapis.com/"
/// timeout_seconds = 60
/// user_agent = "my-cms-tool/1.0"
///
/// [default_headers]
/// X-Goog-User-Project = "my-project"
/// ```
use crate::config::APP_CONFIG;
use crate::config::error::ConfigError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use url::Url;

/// タイムアウトの最小値（秒）
const MIN_TIMEOUT_SECONDS: u64 = 1;

/// タイムアウトの最大値（1時間）
const MAX_TIMEOUT_SECONDS: u64 = 3600;

/// クライアント設定
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// APIのルートURL。テストサーバーを向ける場合に上書きする
    #[serde(default = "default_root_url")]
    pub root_url: String,

    /// リクエストのタイムアウト(秒)
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// User-Agent ヘッダーの値
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// 全リクエストに付与されるデフォルトヘッダー
    #[serde(default)]
    pub default_headers: IndexMap<String, String>,
}

// プライベート関数（serde用）
fn default_root_url() -> String {
    APP_CONFIG.api.root_url.to_string()
}

fn default_timeout_seconds() -> u64 {
    APP_CONFIG.api.timeout_seconds
}

fn default_user_agent() -> String {
    APP_CONFIG.api.user_agent.to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            root_url: default_root_url(),
            timeout_seconds: default_timeout_seconds(),
            user_agent: default_user_agent(),
            default_headers: IndexMap::new(),
        }
    }
}

impl ClientConfig {
    /// ルートURLだけを差し替えた設定を作成
    ///
    /// 末尾に '/' がなければ補います。
    pub fn with_root_url(root_url: impl Into<String>) -> Self {
        let mut root_url = root_url.into();
        if !root_url.ends_with('/') {
            root_url.push('/');
        }
        Self {
            root_url,
            ..Self::default()
        }
    }

    /// TOML文字列から設定を読み込む
    ///
    /// 読み込み後、自動的に検証を実行します（Fail Fast）。
    ///
    /// # Errors
    /// パースまたは検証に失敗した場合に ConfigError を返します。
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::parse_error("Failed to parse client configuration", e))?;

        config.validate()?;

        Ok(config)
    }

    /// 設定を検証
    ///
    /// # 検証内容
    /// - root_url: http/https の絶対URLで、末尾が '/' であること
    /// - timeout_seconds: 1〜3600 の範囲であること
    /// - user_agent: 空文字列でないこと
    ///
    /// # Errors
    /// 検証に失敗した場合に ConfigError::ValidationError を返します。
    pub fn validate(&self) -> Result<(), ConfigError> {
        Self::validate_root_url(&self.root_url)?;
        Self::validate_timeout(self.timeout_seconds)?;

        if self.user_agent.trim().is_empty() {
            return Err(ConfigError::validation_error("user_agent cannot be empty"));
        }

        Ok(())
    }

    /// ルートURLを検証
    fn validate_root_url(root_url: &str) -> Result<(), ConfigError> {
        let parsed = Url::parse(root_url).map_err(|e| {
            ConfigError::validation_error(format!("Invalid root_url '{}': {}", root_url, e))
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::validation_error(format!(
                "root_url must use http or https, found '{}'",
                parsed.scheme()
            )));
        }

        if !root_url.ends_with('/') {
            return Err(ConfigError::validation_error(format!(
                "root_url must end with '/': {}",
                root_url
            )));
        }

        Ok(())
    }

    /// タイムアウト値を検証
    fn validate_timeout(timeout_seconds: u64) -> Result<(), ConfigError> {
        if !(MIN_TIMEOUT_SECONDS..=MAX_TIMEOUT_SECONDS).contains(&timeout_seconds) {
            return Err(ConfigError::validation_error(format!(
                "Invalid timeout_seconds '{}'. Must be between {} and {}",
                timeout_seconds, MIN_TIMEOUT_SECONDS, MAX_TIMEOUT_SECONDS
            )));
        }
        Ok(())
    }
}
