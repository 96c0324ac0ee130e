/// リクエストディスパッチャー
///
/// 記述子と呼び出しパラメータからリクエストを組み立て、トランスポートで実行し、
/// レスポンスまたは構造化エラーを返します。
///
/// 処理の流れ:
/// 1. パラメータ分類（必須チェック、パス/クエリの分離）
/// 2. オプションのマージ
/// 3. URLテンプレートの解決
/// 4. ボディ・メディアの設定、認証情報の付与
/// 5. 実行（レジューマブルアップロードの場合は2回）とステータスの検査
///
/// 1〜4 はネットワーク通信を行わず、失敗は即座に返されます。
/// どのエラーに対してもリトライは行いません。
use crate::api::classifier::classify;
use crate::api::context::RequestContext;
use crate::api::descriptor::MethodDescriptor;
use crate::api::error::ApiError;
use crate::api::options::{self, RequestOptions, ResponseEncoding};
use crate::api::params::CallParameters;
use crate::api::request::{HttpRequest, HttpResponse, RequestSummary};
use crate::api::template;
use crate::api::types::{ApiResponse, RawResponse, ServerErrorPayload};
use crate::api::upload::{self, UploadStep};
use bytes::Bytes;
use serde::de::DeserializeOwned;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{Instrument, debug, info_span, warn};

const JSON_CONTENT_TYPE: &str = "application/json; charset=UTF-8";

/// 送信準備が完了した呼び出し
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedCall {
    pub operation: &'static str,
    pub request: HttpRequest,
    pub encoding: ResponseEncoding,
    pub upload: UploadStep,
}

/// リクエストを組み立てる（ネットワーク通信なし）
///
/// メディアが渡された場合は、オプションの `url` に関わらず記述子の
/// メディアアップロード用URLテンプレートを使用します。
///
/// # Errors
/// - 必須パラメータの欠落: `ApiError::MissingRequiredParameter`
/// - テンプレート解決失敗: `ApiError::TemplateResolution`
/// - メディア非対応の操作へのメディア指定: `ApiError::MediaUploadUnsupported`
pub fn build_request(
    descriptor: &MethodDescriptor,
    params: &CallParameters,
    caller_options: Option<RequestOptions>,
    context: &RequestContext,
) -> Result<PreparedCall, ApiError> {
    let config = context.config();
    let classified = classify(descriptor, params)?;
    let merged = options::resolve(
        descriptor,
        &config.root_url,
        &config.default_headers,
        caller_options,
    );

    let url_template = match &params.media {
        Some(_) => {
            let media_template = descriptor.media_upload_url_template.ok_or_else(|| {
                ApiError::MediaUploadUnsupported {
                    operation: descriptor.name.to_string(),
                }
            })?;
            format!("{}{}", config.root_url, media_template)
        }
        None => merged.url,
    };

    let url = template::render(&url_template, &classified.path_values)?;

    let mut request = HttpRequest::new(merged.method, url);
    request.headers = merged.headers;
    request.query = classified
        .query_values
        .iter()
        .flat_map(|(name, value)| {
            value
                .to_query_values()
                .into_iter()
                .map(move |v| (name.clone(), v))
        })
        .collect();

    let serialization_error = |source| ApiError::Serialization {
        operation: descriptor.name.to_string(),
        source,
    };

    let upload = match &params.media {
        Some(media) => upload::prepare_upload(&mut request, params.resource.as_ref(), media)
            .map_err(serialization_error)?,
        None => {
            if let Some(resource) = &params.resource {
                let body = serde_json::to_vec(resource).map_err(serialization_error)?;
                request.set_header("Content-Type", JSON_CONTENT_TYPE);
                request.body = Some(Bytes::from(body));
            }
            UploadStep::Complete
        }
    };

    context.credentials().apply(&mut request);

    debug!(
        operation = descriptor.name,
        method = %request.method,
        url = %request.url,
        query_params = request.query.len(),
        has_body = request.body.is_some(),
        credentials = %context.credentials().masked(),
        "request built"
    );

    Ok(PreparedCall {
        operation: descriptor.name,
        request,
        encoding: merged.encoding,
        upload,
    })
}

/// 組み立て済みの呼び出しを実行する
///
/// # Errors
/// トランスポートエラー、キャンセル、2xx 以外のステータス
pub async fn execute_prepared(
    prepared: PreparedCall,
    context: &RequestContext,
    cancel: Option<&CancellationToken>,
) -> Result<RawResponse, ApiError> {
    let span = info_span!(
        "dispatch",
        operation = prepared.operation,
        method = %prepared.request.method
    );

    async move {
        let response = send(prepared.operation, prepared.request, context, cancel).await?;

        match prepared.upload {
            UploadStep::Complete => Ok(response),
            UploadStep::SendToSession(media) => {
                let session_uri = response
                    .headers
                    .iter()
                    .find(|(name, _)| name.eq_ignore_ascii_case("location"))
                    .and_then(|(_, location)| {
                        upload::resolve_session_uri(&response.request.url, location)
                    })
                    .ok_or_else(|| ApiError::ResumableSessionMissing {
                        request: response.request.clone(),
                    })?;

                debug!(operation = prepared.operation, "resumable session opened");

                let mut request = upload::session_request(&session_uri, &media);
                context.credentials().apply(&mut request);
                send(prepared.operation, request, context, cancel).await
            }
        }
    }
    .instrument(span)
    .await
}

/// リクエストを組み立てて実行する
///
/// # Errors
/// `build_request` と `execute_prepared` のエラー
pub async fn build_and_dispatch(
    descriptor: &MethodDescriptor,
    params: &CallParameters,
    caller_options: Option<RequestOptions>,
    context: &RequestContext,
    cancel: Option<&CancellationToken>,
) -> Result<RawResponse, ApiError> {
    let prepared = build_request(descriptor, params, caller_options, context)?;
    execute_prepared(prepared, context, cancel).await
}

/// リクエストを組み立てて実行し、レスポンスをデコードする
///
/// # Errors
/// `build_and_dispatch` のエラー、およびデコードの失敗
pub async fn dispatch<T: DeserializeOwned>(
    descriptor: &MethodDescriptor,
    params: &CallParameters,
    caller_options: Option<RequestOptions>,
    context: &RequestContext,
    cancel: Option<&CancellationToken>,
) -> Result<ApiResponse<T>, ApiError> {
    let prepared = build_request(descriptor, params, caller_options, context)?;
    let encoding = prepared.encoding;
    let raw = execute_prepared(prepared, context, cancel).await?;
    decode(raw, encoding)
}

/// コールバック形式で実行する
///
/// リクエストの組み立ては呼び出し元で同期的に行われます。
/// 組み立てに失敗した場合はコールバックがその場でエラーを受け取り、`None` を返します。
/// 成功した場合は実行を現在の tokio ランタイムのタスクとして起動し、そのハンドルを返します。
/// ランタイム外から呼び出された場合は `ApiError::RuntimeUnavailable` をコールバックへ渡し、
/// `None` を返します。
pub fn dispatch_with_callback<T, F>(
    descriptor: &MethodDescriptor,
    params: &CallParameters,
    caller_options: Option<RequestOptions>,
    context: &RequestContext,
    cancel: Option<CancellationToken>,
    callback: F,
) -> Option<JoinHandle<()>>
where
    T: DeserializeOwned + Send + 'static,
    F: FnOnce(Result<ApiResponse<T>, ApiError>) + Send + 'static,
{
    let prepared = match build_request(descriptor, params, caller_options, context) {
        Ok(prepared) => prepared,
        Err(e) => {
            callback(Err(e));
            return None;
        }
    };

    let handle = match Handle::try_current() {
        Ok(handle) => handle,
        Err(_) => {
            callback(Err(ApiError::RuntimeUnavailable {
                operation: prepared.operation.to_string(),
            }));
            return None;
        }
    };

    let context = context.clone();
    Some(handle.spawn(async move {
        let encoding = prepared.encoding;
        let result = execute_prepared(prepared, &context, cancel.as_ref())
            .await
            .and_then(|raw| decode(raw, encoding));
        callback(result);
    }))
}

/// レスポンスボディをデコードする
///
/// 空のボディは JSON の `null` として扱うため、`()` や `Option<T>` で受け取れます。
///
/// # Errors
/// JSONとして解釈できない場合 `ApiError::Decode`、
/// `Text` 指定でUTF-8でない場合 `ApiError::InvalidText`
pub fn decode<T: DeserializeOwned>(
    raw: RawResponse,
    encoding: ResponseEncoding,
) -> Result<ApiResponse<T>, ApiError> {
    let RawResponse {
        status,
        headers,
        body,
        request,
    } = raw;

    let value = match encoding {
        ResponseEncoding::Json if body.iter().all(u8::is_ascii_whitespace) => {
            serde_json::from_value(serde_json::Value::Null)
        }
        ResponseEncoding::Json => serde_json::from_slice(&body),
        ResponseEncoding::Text => {
            let text = std::str::from_utf8(&body).map_err(|source| ApiError::InvalidText {
                request: request.clone(),
                source,
            })?;
            serde_json::from_value(serde_json::Value::String(text.to_string()))
        }
    };

    let body = value.map_err(|source| ApiError::Decode { request, source })?;

    Ok(ApiResponse {
        body,
        status,
        headers,
    })
}

/// 1回のHTTPリクエストを送信し、ステータスを検査する
async fn send(
    operation: &str,
    request: HttpRequest,
    context: &RequestContext,
    cancel: Option<&CancellationToken>,
) -> Result<RawResponse, ApiError> {
    let summary = RequestSummary::of(operation, &request);
    debug!(url = %summary.url, "sending request");

    let execution = context.transport().execute(request);
    let result = match cancel {
        Some(token) => {
            tokio::select! {
                biased;
                _ = token.cancelled() => {
                    debug!(url = %summary.url, "request cancelled");
                    return Err(ApiError::Cancelled { request: summary });
                }
                result = execution => result,
            }
        }
        None => execution.await,
    };

    let response = result.map_err(|source| ApiError::Transport {
        request: summary.clone(),
        source,
    })?;

    if !response.is_success() {
        warn!(status = response.status, url = %summary.url, "request failed");
        return Err(server_error(summary, response));
    }

    debug!(status = response.status, bytes = response.body.len(), "response received");

    Ok(RawResponse {
        status: response.status,
        headers: response.headers,
        body: response.body,
        request: summary,
    })
}

/// 2xx 以外のレスポンスを構造化エラーに変換する
fn server_error(request: RequestSummary, response: HttpResponse) -> ApiError {
    let payload = serde_json::from_slice::<ServerErrorPayload>(&response.body).ok();

    let message = match &payload {
        Some(payload) if !payload.error.message.is_empty() => payload.error.message.clone(),
        _ => {
            let text = String::from_utf8_lossy(&response.body).trim().to_string();
            if text.is_empty() {
                "no response body".to_string()
            } else {
                text
            }
        }
    };

    ApiError::Server {
        request,
        status: response.status,
        message,
        payload,
    }
}
