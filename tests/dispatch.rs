//! ディスパッチ経路の結合テスト
//!
//! 送信されたリクエストを記録するトランスポートを差し込み、
//! 組み立てから結果の受け渡しまでを検証する。

use async_trait::async_trait;
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;
use tokio_util::sync::CancellationToken;
use youtube_partner::api::{
    ApiError, ApiResponse, CallParameters, Credentials, HttpMethod, HttpRequest, HttpResponse,
    Media, ParamValue, RequestOptions, Transport, TransportError, UploadProtocol, YoutubePartner,
    operations,
};
use youtube_partner::config::ClientConfig;
use youtube_partner::error_category::ErrorCategory;

/// 送信されたリクエストを記録し、用意したレスポンスを順に返すトランスポート
#[derive(Default)]
struct RecordingTransport {
    requests: Mutex<Vec<HttpRequest>>,
    responses: Mutex<Vec<HttpResponse>>,
}

impl RecordingTransport {
    fn replying(responses: Vec<HttpResponse>) -> Arc<Self> {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            responses: Mutex::new(responses),
        })
    }

    fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            Ok(HttpResponse::new(200, "{}"))
        } else {
            Ok(responses.remove(0))
        }
    }
}

/// 応答を返さないトランスポート（キャンセルの検証用）
struct HangingTransport;

#[async_trait]
impl Transport for HangingTransport {
    async fn execute(&self, _request: HttpRequest) -> Result<HttpResponse, TransportError> {
        std::future::pending().await
    }
}

fn client(transport: Arc<RecordingTransport>) -> YoutubePartner {
    YoutubePartner::with_transport(ClientConfig::default(), Credentials::None, transport)
}

#[tokio::test]
async fn get_asset_renders_path_and_sends_no_body() {
    let transport = RecordingTransport::replying(vec![HttpResponse::new(
        200,
        r#"{"kind":"youtubePartner#asset","id":"A123"}"#,
    )]);
    let client = client(transport.clone());

    let params = CallParameters::new().with("assetId", "A123");
    let response: ApiResponse<Value> = client
        .call(&operations::ASSETS_GET, &params, None)
        .await
        .unwrap();

    assert_eq!(response.body["id"], "A123");

    let requests = transport.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, HttpMethod::Get);
    assert_eq!(
        requests[0].full_url(),
        "https://www.googleapis.com/youtube/partner/v1/assets/A123"
    );
    assert!(requests[0].body.is_none());
}

#[tokio::test]
async fn missing_required_parameter_never_reaches_transport() {
    let transport = RecordingTransport::replying(vec![]);
    let client = client(transport.clone());

    let err = client
        .call::<Value>(&operations::ASSETS_GET, &CallParameters::new(), None)
        .await
        .unwrap_err();

    match &err {
        ApiError::MissingRequiredParameter { operation, name } => {
            assert_eq!(operation, "assets.get");
            assert_eq!(name, "assetId");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(err.category(), ErrorCategory::Caller);
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn query_parameters_and_header_override() {
    let transport = RecordingTransport::replying(vec![]);
    let config = ClientConfig {
        default_headers: [("X-Default".to_string(), "1".to_string())]
            .into_iter()
            .collect(),
        ..ClientConfig::default()
    };
    let client = YoutubePartner::with_transport(config, Credentials::None, transport.clone());

    let params = CallParameters::new()
        .with("assetId", "A123")
        .with("onBehalfOfContentOwner", "CO1");
    let options = RequestOptions::new().with_header("X-Test", "1");

    client
        .call::<Value>(&operations::ASSETS_GET, &params, Some(options))
        .await
        .unwrap();

    let requests = transport.requests();
    let request = &requests[0];
    assert_eq!(
        request.full_url(),
        "https://www.googleapis.com/youtube/partner/v1/assets/A123?onBehalfOfContentOwner=CO1"
    );
    assert_eq!(request.header("X-Test"), Some("1"));
    // ヘッダーは浅くマージされるため、デフォルトのヘッダー集合は置き換わる
    assert_eq!(request.header("X-Default"), None);
}

#[tokio::test]
async fn default_headers_apply_without_caller_headers() {
    let transport = RecordingTransport::replying(vec![]);
    let config = ClientConfig {
        default_headers: [("X-Goog-User-Project".to_string(), "p1".to_string())]
            .into_iter()
            .collect(),
        ..ClientConfig::default()
    };
    let client = YoutubePartner::with_transport(config, Credentials::None, transport.clone());

    client
        .call::<Value>(&operations::CONTENT_OWNERS_LIST, &CallParameters::new(), None)
        .await
        .unwrap();

    assert_eq!(
        transport.requests()[0].header("x-goog-user-project"),
        Some("p1")
    );
}

#[tokio::test]
async fn reference_with_media_goes_to_upload_endpoint() {
    let transport = RecordingTransport::replying(vec![HttpResponse::new(200, r#"{"id":"R1"}"#)]);
    let client = client(transport.clone());

    let params = CallParameters::new()
        .with("onBehalfOfContentOwner", "CO1")
        .with_resource_value(json!({"assetId": "A1", "contentType": "video"}))
        .with_media(Media::new("video/mp4", &b"FAKE-VIDEO"[..]));

    let response: ApiResponse<Value> = client
        .call(&operations::REFERENCES_INSERT, &params, None)
        .await
        .unwrap();
    assert_eq!(response.body["id"], "R1");

    let requests = transport.requests();
    let request = &requests[0];
    assert_eq!(request.method, HttpMethod::Post);
    assert_eq!(
        request.url,
        "https://www.googleapis.com/upload/youtube/partner/v1/references"
    );
    assert_eq!(request.query_value("uploadType"), Some("multipart"));
    assert_eq!(request.query_value("onBehalfOfContentOwner"), Some("CO1"));

    let content_type = request.header("Content-Type").unwrap();
    assert!(content_type.starts_with("multipart/related; boundary="));
    let body = String::from_utf8(request.body.clone().unwrap().to_vec()).unwrap();
    assert!(body.contains(r#""assetId":"A1""#));
    assert!(body.contains("FAKE-VIDEO"));
}

#[tokio::test]
async fn reference_without_media_uses_plain_endpoint() {
    let transport = RecordingTransport::replying(vec![]);
    let client = client(transport.clone());

    let params = CallParameters::new().with_resource_value(json!({"assetId": "A1"}));
    client
        .call::<Value>(&operations::REFERENCES_INSERT, &params, None)
        .await
        .unwrap();

    let requests = transport.requests();
    let request = &requests[0];
    assert_eq!(
        request.full_url(),
        "https://www.googleapis.com/youtube/partner/v1/references"
    );
    assert_eq!(
        request.header("Content-Type"),
        Some("application/json; charset=UTF-8")
    );
}

#[tokio::test]
async fn resumable_upload_sends_media_to_session() {
    let transport = RecordingTransport::replying(vec![
        HttpResponse::new(200, "").with_header("location", "https://upload.example.com/session/42"),
        HttpResponse::new(200, r#"{"id":"R2","status":{"status":"processing"}}"#),
    ]);
    let client = YoutubePartner::with_transport(
        ClientConfig::default(),
        Credentials::Bearer("token-1234567890".to_string()),
        transport.clone(),
    );

    let params = CallParameters::new()
        .with_resource_value(json!({"assetId": "A1"}))
        .with_media(Media::new("video/mp4", &b"0123456789"[..]).with_protocol(UploadProtocol::Resumable));

    let response: ApiResponse<Value> = client
        .call(&operations::REFERENCES_INSERT, &params, None)
        .await
        .unwrap();
    assert_eq!(response.body["id"], "R2");

    let requests = transport.requests();
    assert_eq!(requests.len(), 2);

    let initiation = &requests[0];
    assert_eq!(initiation.query_value("uploadType"), Some("resumable"));
    assert_eq!(initiation.header("X-Upload-Content-Length"), Some("10"));
    assert_eq!(initiation.body.as_deref(), Some(&br#"{"assetId":"A1"}"#[..]));

    let upload = &requests[1];
    assert_eq!(upload.method, HttpMethod::Put);
    assert_eq!(upload.full_url(), "https://upload.example.com/session/42");
    assert_eq!(upload.body.as_deref(), Some(&b"0123456789"[..]));
    // セッションURIへの送信にも認証情報が付与される
    assert_eq!(upload.header("Authorization"), Some("Bearer token-1234567890"));
}

#[tokio::test]
async fn server_error_envelope_is_structured() {
    let transport = RecordingTransport::replying(vec![HttpResponse::new(
        403,
        r#"{"error":{"code":403,"message":"Forbidden","errors":[{"domain":"global","reason":"forbidden","message":"Forbidden"}]}}"#,
    )]);
    let client = client(transport);

    let params = CallParameters::new().with("claimId", "C1");
    let err = client
        .call::<Value>(&operations::CLAIMS_GET, &params, None)
        .await
        .unwrap_err();

    assert_eq!(err.category(), ErrorCategory::Server);
    assert_eq!(err.status(), Some(403));
    assert!(err.hint().is_some());

    let request = err.request().unwrap();
    assert_eq!(request.operation, "claims.get");
    assert_eq!(
        request.url,
        "https://www.googleapis.com/youtube/partner/v1/claims/C1"
    );

    match err {
        ApiError::Server { payload, .. } => {
            assert_eq!(payload.unwrap().reason(), Some("forbidden"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn api_key_is_sent_as_query_parameter() {
    let transport = RecordingTransport::replying(vec![]);
    let client = YoutubePartner::with_transport(
        ClientConfig::default(),
        Credentials::ApiKey("AIzaSyExample".to_string()),
        transport.clone(),
    );

    let params = CallParameters::new()
        .with("id", ParamValue::from(&["A1", "A2"][..]))
        .with("fetchMetadata", "effective");
    client
        .call::<Value>(&operations::ASSETS_LIST, &params, None)
        .await
        .unwrap();

    assert_eq!(
        transport.requests()[0].full_url(),
        "https://www.googleapis.com/youtube/partner/v1/assets?id=A1&id=A2&fetchMetadata=effective&key=AIzaSyExample"
    );
}

#[tokio::test]
async fn path_values_are_percent_encoded() {
    let transport = RecordingTransport::replying(vec![]);
    let client = client(transport.clone());

    let params = CallParameters::new().with("assetId", "a/b c");
    client
        .call::<Value>(&operations::ASSETS_GET, &params, None)
        .await
        .unwrap();

    assert_eq!(
        transport.requests()[0].url,
        "https://www.googleapis.com/youtube/partner/v1/assets/a%2Fb%20c"
    );
}

#[tokio::test]
async fn call_by_name_dispatches_descriptor() {
    let transport = RecordingTransport::replying(vec![]);
    let client = client(transport.clone());

    let params = CallParameters::new().with("id", "UC1");
    client
        .call_by_name::<Value>("whitelists.get", &params, None)
        .await
        .unwrap();

    assert_eq!(
        transport.requests()[0].url,
        "https://www.googleapis.com/youtube/partner/v1/whitelists/UC1"
    );
}

#[tokio::test]
async fn callback_receives_success() {
    let transport = RecordingTransport::replying(vec![HttpResponse::new(200, r#"{"id":"P1"}"#)]);
    let client = client(transport);
    let (tx, rx) = oneshot::channel();

    let params = CallParameters::new().with("policyId", "P1");
    let handle = client.call_with_callback(
        &operations::POLICIES_GET,
        &params,
        None,
        move |result: Result<ApiResponse<Value>, ApiError>| {
            let _ = tx.send(result);
        },
    );

    handle.expect("task should be spawned").await.unwrap();
    let response = rx.await.unwrap().unwrap();
    assert_eq!(response.body["id"], "P1");
}

#[tokio::test]
async fn callback_receives_caller_error_without_io() {
    let transport = RecordingTransport::replying(vec![]);
    let client = client(transport.clone());
    let (tx, rx) = oneshot::channel();

    let handle = client.call_with_callback(
        &operations::POLICIES_GET,
        &CallParameters::new(),
        None,
        move |result: Result<ApiResponse<Value>, ApiError>| {
            let _ = tx.send(result);
        },
    );

    assert!(handle.is_none());
    let err = rx.await.unwrap().unwrap_err();
    assert!(matches!(err, ApiError::MissingRequiredParameter { ref name, .. } if name == "policyId"));
    assert!(transport.requests().is_empty());
}

#[test]
fn callback_outside_runtime_receives_error() {
    let transport = RecordingTransport::replying(vec![]);
    let client = client(transport.clone());
    let (tx, rx) = std::sync::mpsc::channel();

    let params = CallParameters::new().with("policyId", "P1");
    let handle = client.call_with_callback(
        &operations::POLICIES_GET,
        &params,
        None,
        move |result: Result<ApiResponse<Value>, ApiError>| {
            let _ = tx.send(result);
        },
    );

    assert!(handle.is_none());
    let err = rx.try_recv().unwrap().unwrap_err();
    assert!(matches!(err, ApiError::RuntimeUnavailable { ref operation } if operation == "policies.get"));
    assert_eq!(err.category(), ErrorCategory::Caller);
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn cancellation_interrupts_pending_request() {
    let client = YoutubePartner::with_transport(
        ClientConfig::default(),
        Credentials::None,
        Arc::new(HangingTransport),
    );
    let token = CancellationToken::new();

    let canceller = token.clone();
    tokio::spawn(async move {
        tokio::time::sleep(std::time::Duration::from_millis(20)).await;
        canceller.cancel();
    });

    let err = client
        .call_cancellable::<Value>(
            &operations::CLAIM_HISTORY_GET,
            &CallParameters::new().with("claimId", "C1"),
            None,
            &token,
        )
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Cancelled { .. }));
    assert_eq!(err.category(), ErrorCategory::Transport);
}

#[tokio::test]
async fn concurrent_calls_share_one_client() {
    let transport = RecordingTransport::replying(vec![]);
    let client = client(transport.clone());

    let tasks: Vec<_> = (0..8)
        .map(|i| {
            let client = client.clone();
            tokio::spawn(async move {
                let params = CallParameters::new().with("assetId", format!("A{}", i));
                client
                    .call::<Value>(&operations::ASSETS_GET, &params, None)
                    .await
            })
        })
        .collect();

    for task in tasks {
        task.await.unwrap().unwrap();
    }

    let mut urls: Vec<_> = transport.requests().into_iter().map(|r| r.url).collect();
    urls.sort();
    assert_eq!(urls.len(), 8);
    assert!(urls[0].ends_with("/assets/A0"));
    assert!(urls[7].ends_with("/assets/A7"));
}
