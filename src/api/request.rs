/// HTTPリクエスト・レスポンスの記述
///
/// リクエストとレスポンスを単なるデータとして表現します。
/// ビルダーは `HttpRequest` を組み立てるだけで、実際の通信は
/// `Transport` 実装が担当します。
use crate::api::descriptor::HttpMethod;
use crate::api::options::Headers;
use crate::api::template::encode_query_component;
use bytes::Bytes;
use std::fmt;

/// HTTPリクエスト
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    /// クエリ文字列を含まないURL
    pub url: String,
    /// エンコード前のクエリパラメータ（順序を保持）
    pub query: Vec<(String, String)>,
    pub headers: Headers,
    pub body: Option<Bytes>,
}

impl HttpRequest {
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            query: Vec::new(),
            headers: Headers::new(),
            body: None,
        }
    }

    /// クエリパラメータの値を返す（最初に見つかったもの）
    pub fn query_value(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// ヘッダーの値を返す（大文字小文字を区別しない）
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }

    /// ヘッダーを設定する（大文字小文字違いの既存ヘッダーは置き換える）
    pub fn set_header(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        self.headers.retain(|key, _| !key.eq_ignore_ascii_case(&name));
        self.headers.insert(name, value.into());
    }

    /// エンコード済みクエリ文字列を含む完全なURL
    pub fn full_url(&self) -> String {
        if self.query.is_empty() {
            return self.url.clone();
        }

        let query = self
            .query
            .iter()
            .map(|(key, value)| {
                format!(
                    "{}={}",
                    encode_query_component(key),
                    encode_query_component(value)
                )
            })
            .collect::<Vec<_>>()
            .join("&");

        let separator = if self.url.contains('?') { '&' } else { '?' };
        format!("{}{}{}", self.url, separator, query)
    }
}

/// HTTPレスポンス
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Headers,
    pub body: Bytes,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            headers: Headers::new(),
            body: body.into(),
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// ヘッダーの値を返す（大文字小文字を区別しない）
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }
}

fn find_header<'a>(headers: &'a Headers, name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, value)| value.as_str())
}

/// エラーやログに付与するリクエストの要約
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSummary {
    pub operation: String,
    pub method: HttpMethod,
    pub url: String,
}

impl RequestSummary {
    pub fn of(operation: &str, request: &HttpRequest) -> Self {
        Self {
            operation: operation.to_string(),
            method: request.method,
            url: request.url.clone(),
        }
    }
}

impl fmt::Display for RequestSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.operation, self.method, self.url)
    }
}
