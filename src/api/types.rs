/// API通信用の型定義
///
/// Google API 共通のエラーレスポンスと、ディスパッチ結果の型を定義します。
/// 個々のリソーススキーマは定義せず、呼び出し側が任意の型でデコードします。
use crate::api::options::Headers;
use crate::api::request::RequestSummary;
use serde::{Deserialize, Serialize};

/// エラーレスポンスのエンベロープ
///
/// ```json
/// {"error": {"code": 404, "message": "Not Found", "errors": [...]}}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerErrorPayload {
    pub error: ServerError,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerError {
    pub code: u16,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub errors: Vec<ServerErrorDetail>,
}

/// エラーの詳細
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerErrorDetail {
    #[serde(default)]
    pub domain: String,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub message: String,
    pub location: Option<String>,
    pub location_type: Option<String>,
}

impl ServerErrorPayload {
    /// 最初の詳細エラーの reason（例: "notFound", "required"）
    pub fn reason(&self) -> Option<&str> {
        self.error.errors.first().map(|detail| detail.reason.as_str())
    }
}

/// デコード前のレスポンス
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub headers: Headers,
    pub body: bytes::Bytes,
    /// このレスポンスを返したリクエスト
    pub request: RequestSummary,
}

/// デコード済みのレスポンス
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse<T> {
    pub body: T,
    pub status: u16,
    pub headers: Headers,
}

impl<T> ApiResponse<T> {
    /// ボディだけを取り出す
    pub fn into_body(self) -> T {
        self.body
    }
}
