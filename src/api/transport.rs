/// HTTPトランスポート
///
/// 組み立て済みの `HttpRequest` を実際に送信する外部協力者のインターフェースと、
/// reqwest による標準実装を提供します。
/// トランスポートはリトライを行わず、発生したエラーをそのまま返します。
use crate::api::descriptor::HttpMethod;
use crate::api::options::Headers;
use crate::api::request::{HttpRequest, HttpResponse};
use crate::config::ClientConfig;
use async_trait::async_trait;
use reqwest::{Client, Method};
use std::time::Duration;
use thiserror::Error;

/// トランスポートエラー
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// タイムアウト
    #[error("request timed out: {message}")]
    Timeout { message: String },

    /// 接続失敗
    #[error("connection failed: {message}")]
    Connect { message: String },

    /// その他の送受信エラー
    #[error("transport failure: {message}")]
    Other { message: String },
}

impl TransportError {
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout {
            message: message.into(),
        }
    }

    pub fn connect(message: impl Into<String>) -> Self {
        Self::Connect {
            message: message.into(),
        }
    }

    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }
}

/// HTTPリクエストを実行するトランスポート
///
/// 2xx 以外のステータスもエラーではなく `HttpResponse` として返すこと。
/// ステータスの解釈はディスパッチャーが行う。
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// reqwest によるトランスポート
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// 設定からトランスポートを作成
    ///
    /// # Errors
    /// HTTPクライアントの初期化に失敗した場合
    pub fn new(config: &ClientConfig) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| TransportError::other(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    /// 既存の reqwest クライアントを使う
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }

    fn method(method: HttpMethod) -> Method {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Patch => Method::PATCH,
            HttpMethod::Delete => Method::DELETE,
        }
    }

    /// reqwest のエラーを分類する
    ///
    /// reqwest のエラー表示はクエリ文字列（APIキーを含む）付きのURLを含むため、
    /// URLを取り除いてから整形する。`url` はクエリを含まないURLであること。
    fn map_error(e: reqwest::Error, method: HttpMethod, url: &str) -> TransportError {
        let e = e.without_url();
        if e.is_timeout() {
            TransportError::timeout(format!("{} {}", method, url))
        } else if e.is_connect() {
            TransportError::connect(format!("{} {}: {}", method, url, e))
        } else {
            TransportError::other(format!("{} {}: {}", method, url, e))
        }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let url = request.full_url();
        let mut builder = self
            .client
            .request(Self::method(request.method), url.as_str());

        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| Self::map_error(e, request.method, &request.url))?;

        let status = response.status().as_u16();
        let headers: Headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|value| (name.as_str().to_string(), value.to_string()))
            })
            .collect();

        let body = response
            .bytes()
            .await
            .map_err(|e| Self::map_error(e, request.method, &request.url))?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
