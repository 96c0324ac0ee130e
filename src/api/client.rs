/// APIクライアント
///
/// YouTube Content ID API の呼び出し窓口です。
/// 設定・認証情報・トランスポートを `RequestContext` にまとめ、
/// すべての操作を同じディスパッチャー経由で実行します。
use crate::api::auth::Credentials;
use crate::api::context::RequestContext;
use crate::api::descriptor::MethodDescriptor;
use crate::api::dispatcher::{self, PreparedCall};
use crate::api::error::ApiError;
use crate::api::operations;
use crate::api::options::RequestOptions;
use crate::api::params::CallParameters;
use crate::api::request::RequestSummary;
use crate::api::transport::{ReqwestTransport, Transport};
use crate::api::types::{ApiResponse, RawResponse};
use crate::config::ClientConfig;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// APIクライアントの結果型
type ApiResult<T> = Result<T, ApiError>;

/// YouTube Content ID API クライアント
///
/// `Clone` はコンテキストの参照カウントを増やすだけなので、
/// タスクごとに複製して並行に呼び出せます。
#[derive(Debug, Clone)]
pub struct YoutubePartner {
    context: RequestContext,
}

impl YoutubePartner {
    /// reqwest トランスポートでクライアントを作成
    ///
    /// # Errors
    /// 設定の検証に失敗した場合、またはHTTPクライアントを初期化できない場合
    pub fn new(config: ClientConfig, credentials: Credentials) -> ApiResult<Self> {
        config.validate()?;
        let transport =
            ReqwestTransport::new(&config).map_err(|source| ApiError::TransportInit { source })?;
        Ok(Self::with_transport(config, credentials, Arc::new(transport)))
    }

    /// 任意のトランスポートでクライアントを作成
    ///
    /// テストダブルや独自のHTTPスタックを差し込む場合に使います。
    /// 設定の検証は行いません。
    pub fn with_transport(
        config: ClientConfig,
        credentials: Credentials,
        transport: Arc<dyn Transport>,
    ) -> Self {
        Self {
            context: RequestContext::new(config, credentials, transport),
        }
    }

    pub fn context(&self) -> &RequestContext {
        &self.context
    }

    /// 通信せずにリクエストを組み立てる
    ///
    /// # Errors
    /// 必須パラメータの欠落など、呼び出し側の誤り
    pub fn prepare(
        &self,
        descriptor: &MethodDescriptor,
        params: &CallParameters,
        options: Option<RequestOptions>,
    ) -> ApiResult<PreparedCall> {
        dispatcher::build_request(descriptor, params, options, &self.context)
    }

    /// 操作を実行し、レスポンスボディを `T` としてデコードする
    ///
    /// # Example
    /// ```no_run
    /// use youtube_partner::api::{CallParameters, Credentials, YoutubePartner, operations};
    /// use youtube_partner::config::ClientConfig;
    ///
    /// # async fn run() -> Result<(), youtube_partner::api::ApiError> {
    /// let client = YoutubePartner::new(
    ///     ClientConfig::default(),
    ///     Credentials::Bearer("ya29.token".to_string()),
    /// )?;
    /// let params = CallParameters::new()
    ///     .with("assetId", "A123456789")
    ///     .with("onBehalfOfContentOwner", "CO1");
    /// let asset: serde_json::Value = client
    ///     .call(&operations::ASSETS_GET, &params, None)
    ///     .await?
    ///     .into_body();
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    /// 呼び出し側の誤り、トランスポートエラー、2xx 以外のステータス、デコード失敗
    pub async fn call<T: DeserializeOwned>(
        &self,
        descriptor: &MethodDescriptor,
        params: &CallParameters,
        options: Option<RequestOptions>,
    ) -> ApiResult<ApiResponse<T>> {
        dispatcher::dispatch(descriptor, params, options, &self.context, None).await
    }

    /// 操作を実行し、デコード前のレスポンスを返す
    pub async fn call_raw(
        &self,
        descriptor: &MethodDescriptor,
        params: &CallParameters,
        options: Option<RequestOptions>,
    ) -> ApiResult<RawResponse> {
        dispatcher::build_and_dispatch(descriptor, params, options, &self.context, None).await
    }

    /// キャンセル可能な呼び出し
    ///
    /// トークンがキャンセルされると、実行中の通信を破棄して
    /// `ApiError::Cancelled` を返します。
    pub async fn call_cancellable<T: DeserializeOwned>(
        &self,
        descriptor: &MethodDescriptor,
        params: &CallParameters,
        options: Option<RequestOptions>,
        cancel: &CancellationToken,
    ) -> ApiResult<ApiResponse<T>> {
        dispatcher::dispatch(descriptor, params, options, &self.context, Some(cancel)).await
    }

    /// 論理名（例: `"claims.get"`）で操作を実行する
    ///
    /// # Errors
    /// 名前が記述子テーブルにない場合 `ApiError::UnknownOperation`
    pub async fn call_by_name<T: DeserializeOwned>(
        &self,
        name: &str,
        params: &CallParameters,
        options: Option<RequestOptions>,
    ) -> ApiResult<ApiResponse<T>> {
        let descriptor = operations::find(name).ok_or_else(|| ApiError::UnknownOperation {
            name: name.to_string(),
        })?;
        self.call(descriptor, params, options).await
    }

    /// コールバック形式の呼び出し
    ///
    /// 結果はちょうど1回コールバックへ渡されます。
    /// リクエストの組み立てに失敗した場合はこの関数の中でコールバックが呼ばれ、
    /// `None` が返ります。tokio ランタイム外から呼ばれた場合も同様に
    /// `ApiError::RuntimeUnavailable` が渡されます。それ以外は実行中のタスクのハンドルが返ります。
    pub fn call_with_callback<T, F>(
        &self,
        descriptor: &MethodDescriptor,
        params: &CallParameters,
        options: Option<RequestOptions>,
        callback: F,
    ) -> Option<JoinHandle<()>>
    where
        T: DeserializeOwned + Send + 'static,
        F: FnOnce(ApiResult<ApiResponse<T>>) + Send + 'static,
    {
        dispatcher::dispatch_with_callback(descriptor, params, options, &self.context, None, callback)
    }

    /// 組み立て済みのリクエストの要約（ログ出力用）
    pub fn describe(
        &self,
        descriptor: &MethodDescriptor,
        params: &CallParameters,
        options: Option<RequestOptions>,
    ) -> ApiResult<RequestSummary> {
        let prepared = self.prepare(descriptor, params, options)?;
        Ok(RequestSummary::of(prepared.operation, &prepared.request))
    }
}
