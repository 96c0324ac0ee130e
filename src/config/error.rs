/// Config層のエラー定義
///
/// 設定文字列のパースと検証に関するエラーを構造化して定義。
/// 外部エラー(toml::de::Error等)の発信元を適切に保持する。
use crate::error_category::ErrorCategory;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// 設定のパースエラー
    #[error("failed to parse client configuration: {context}")]
    ParseError {
        context: String,
        #[source]
        source: toml::de::Error,
    },

    /// 設定の検証エラー
    #[error("configuration validation failed: {message}")]
    ValidationError { message: String },
}

impl ConfigError {
    /// パースエラーを作成
    pub fn parse_error(context: impl Into<String>, source: toml::de::Error) -> Self {
        Self::ParseError {
            context: context.into(),
            source,
        }
    }

    /// 検証エラーを作成
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
        }
    }

    /// エラーの分類を返す
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::Config
    }

    /// 呼び出し側向けのヒントメッセージを返す
    pub fn hint(&self) -> Option<&str> {
        match self {
            Self::ParseError { .. } => {
                Some("Check the TOML syntax and field types of the client configuration.")
            }
            Self::ValidationError { .. } => {
                Some("Review the root_url, timeout_seconds and user_agent settings.")
            }
        }
    }
}
