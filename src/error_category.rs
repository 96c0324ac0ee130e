//! エラー分類
//!
//! クレート内の全エラーが共有する、最も抽象的なエラー分類。
//! 呼び出し側がログ出力やリトライ判断を上位層で行うための情報であり、
//! このクレート自身はこの分類に基づいてリトライを行わない。
//!
//! **依存方向の原則:**
//! - api, config はこのモジュールに依存してOK
//! - このモジュールは他のモジュールに依存しない（独立）

use std::fmt;

/// エラーの分類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// 呼び出し側のバグ
    ///
    /// 必須パラメータの欠落、URLテンプレートの解決失敗など。
    /// ネットワーク通信の前に同期的に検出される。
    Caller,

    /// 設定エラー
    ///
    /// ルートURLが無効、タイムアウト値が範囲外など。
    Config,

    /// トランスポートエラー
    ///
    /// 接続失敗、タイムアウト、キャンセルなど。
    /// トランスポート層から受け取った内容をそのまま返す。
    Transport,

    /// サーバーエラー
    ///
    /// 2xx 以外のHTTPステータス、またはレスポンスのデコード失敗。
    Server,
}

impl ErrorCategory {
    /// ネットワーク通信の前に検出されるエラーかどうか
    pub fn is_local(self) -> bool {
        matches!(self, Self::Caller | Self::Config)
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Caller => write!(f, "caller error"),
            Self::Config => write!(f, "configuration error"),
            Self::Transport => write!(f, "transport error"),
            Self::Server => write!(f, "server error"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_local() {
        assert!(ErrorCategory::Caller.is_local());
        assert!(ErrorCategory::Config.is_local());
        assert!(!ErrorCategory::Transport.is_local());
        assert!(!ErrorCategory::Server.is_local());
    }

    #[test]
    fn test_display() {
        assert_eq!(ErrorCategory::Caller.to_string(), "caller error");
        assert_eq!(ErrorCategory::Config.to_string(), "configuration error");
        assert_eq!(ErrorCategory::Transport.to_string(), "transport error");
        assert_eq!(ErrorCategory::Server.to_string(), "server error");
    }
}
