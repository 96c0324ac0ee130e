/// API層のエラー定義
///
/// 呼び出し側のバグ（ネットワーク通信前に検出）、トランスポートエラー、
/// サーバーエラーを構造化して定義。
/// 通信後のエラーには操作名・HTTPメソッド・解決済みURLを含む
/// `RequestSummary` を付与し、上位層でのログ出力やリトライ判断に使えるようにする。
use crate::api::request::RequestSummary;
use crate::api::transport::TransportError;
use crate::api::types::ServerErrorPayload;
use crate::config::ConfigError;
use crate::error_category::ErrorCategory;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    /// 必須パラメータが欠落している
    #[error("{operation}: missing required parameter '{name}'")]
    MissingRequiredParameter { operation: String, name: String },

    /// URLテンプレートのプレースホルダーに対応する値がない
    #[error("cannot resolve placeholder '{{{name}}}' in url template '{template}'")]
    TemplateResolution { template: String, name: String },

    /// メディアアップロードに対応していない操作にメディアが渡された
    #[error("{operation}: media upload is not supported by this operation")]
    MediaUploadUnsupported { operation: String },

    /// 操作名が記述子テーブルに存在しない
    #[error("unknown operation: {name}")]
    UnknownOperation { name: String },

    /// リクエストボディのシリアライズ失敗
    #[error("failed to serialize request body for {operation}")]
    Serialization {
        operation: String,
        #[source]
        source: serde_json::Error,
    },

    /// クライアント設定のエラー
    #[error("invalid client configuration")]
    Config(#[from] ConfigError),

    /// トランスポートエラー（接続失敗、タイムアウトなど）
    #[error("{request}: {source}")]
    Transport {
        request: RequestSummary,
        #[source]
        source: TransportError,
    },

    /// HTTPトランスポートを初期化できない
    #[error("failed to initialise HTTP transport")]
    TransportInit {
        #[source]
        source: TransportError,
    },

    /// コールバック形式の呼び出しが tokio ランタイムの外で行われた
    #[error("{operation}: no tokio runtime available to run the request")]
    RuntimeUnavailable { operation: String },

    /// 呼び出し側によってキャンセルされた
    #[error("{request}: request cancelled")]
    Cancelled { request: RequestSummary },

    /// 2xx 以外のHTTPステータス
    #[error("{request}: HTTP {status}: {message}")]
    Server {
        request: RequestSummary,
        status: u16,
        message: String,
        /// サーバーが返した構造化エラー（JSONとして解釈できた場合）
        payload: Option<ServerErrorPayload>,
    },

    /// レジューマブルアップロードの開始応答に有効な Location ヘッダーがない
    #[error("{request}: resumable upload session URI missing or invalid in response")]
    ResumableSessionMissing { request: RequestSummary },

    /// レスポンスボディのデコード失敗
    #[error("{request}: failed to decode response body")]
    Decode {
        request: RequestSummary,
        #[source]
        source: serde_json::Error,
    },

    /// レスポンスボディがUTF-8ではない
    #[error("{request}: response body is not valid UTF-8")]
    InvalidText {
        request: RequestSummary,
        #[source]
        source: std::str::Utf8Error,
    },
}

impl ApiError {
    /// 必須パラメータ欠落エラーを作成
    pub fn missing_required_parameter(operation: &str, name: &str) -> Self {
        Self::MissingRequiredParameter {
            operation: operation.to_string(),
            name: name.to_string(),
        }
    }

    /// エラーの分類を返す
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingRequiredParameter { .. }
            | Self::TemplateResolution { .. }
            | Self::MediaUploadUnsupported { .. }
            | Self::UnknownOperation { .. }
            | Self::Serialization { .. }
            | Self::RuntimeUnavailable { .. } => ErrorCategory::Caller,
            Self::Config(_) => ErrorCategory::Config,
            Self::Transport { .. } | Self::TransportInit { .. } | Self::Cancelled { .. } => {
                ErrorCategory::Transport
            }
            Self::Server { .. }
            | Self::ResumableSessionMissing { .. }
            | Self::Decode { .. }
            | Self::InvalidText { .. } => ErrorCategory::Server,
        }
    }

    /// 通信が行われた場合、その要約を返す
    pub fn request(&self) -> Option<&RequestSummary> {
        match self {
            Self::Transport { request, .. }
            | Self::Cancelled { request }
            | Self::Server { request, .. }
            | Self::ResumableSessionMissing { request }
            | Self::Decode { request, .. }
            | Self::InvalidText { request, .. } => Some(request),
            _ => None,
        }
    }

    /// HTTPステータスコード（サーバーエラーの場合のみ）
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// 呼び出し側向けのヒントメッセージを返す
    pub fn hint(&self) -> Option<&str> {
        match self {
            Self::MissingRequiredParameter { .. } => {
                Some("Set every required parameter of the operation before calling it.")
            }
            Self::MediaUploadUnsupported { .. } => {
                Some("Only references.insert accepts a media payload.")
            }
            Self::UnknownOperation { .. } => {
                Some("Operation names look like 'assets.get'; see api::operations::ALL.")
            }
            Self::Server { status: 401, .. } => {
                Some("Check that the credentials are valid and not expired.")
            }
            Self::Server { status: 403, .. } => Some(
                "Check that the account is linked to a content owner, or set onBehalfOfContentOwner.",
            ),
            Self::Server { status: 404, .. } => Some("Check the resource ID."),
            Self::Transport { .. } => Some("Check your network connection and the root URL."),
            Self::TransportInit { .. } => {
                Some("Check the TLS setup and that user_agent is a valid header value.")
            }
            Self::RuntimeUnavailable { .. } => {
                Some("Call this from inside a tokio runtime, or use the async call methods.")
            }
            _ => None,
        }
    }
}
