/// メディアアップロード
///
/// メディアが渡された呼び出しのリクエストを、アップロード用エンドポイント向けに組み替えます。
///
/// | 条件 | uploadType | ボディ |
/// |------|------------|--------|
/// | resource + media（multipart） | `multipart` | `multipart/related`（JSON部 + メディア部） |
/// | media のみ（multipart） | `media` | メディアそのもの |
/// | resumable | `resumable` | JSON（セッション開始）→ セッションURIへ PUT |
use crate::api::descriptor::HttpMethod;
use crate::api::params::{Media, UploadProtocol};
use crate::api::request::HttpRequest;
use bytes::{BufMut, Bytes, BytesMut};
use url::Url;
use uuid::Uuid;

/// アップロード方式を指定するクエリパラメータ名
pub const UPLOAD_TYPE_PARAM: &str = "uploadType";

const JSON_CONTENT_TYPE: &str = "application/json; charset=UTF-8";

/// 組み替え後に残る作業
#[derive(Debug, Clone, PartialEq)]
pub enum UploadStep {
    /// 1回のリクエストで完了する
    Complete,
    /// セッション開始後、セッションURIへメディアを送る必要がある
    SendToSession(Media),
}

/// マルチパートの境界文字列を生成する
pub fn new_boundary() -> String {
    format!("upload_boundary_{}", Uuid::new_v4().simple())
}

/// リクエストをアップロード用に組み替える
///
/// `request.url` は呼び出し側でアップロード用URLに解決済みであること。
/// 既存の `uploadType` クエリパラメータは置き換えられる。
///
/// # Errors
/// resource のシリアライズに失敗した場合
pub fn prepare_upload(
    request: &mut HttpRequest,
    resource: Option<&serde_json::Value>,
    media: &Media,
) -> Result<UploadStep, serde_json::Error> {
    request.query.retain(|(name, _)| name != UPLOAD_TYPE_PARAM);

    match (media.protocol, resource) {
        (UploadProtocol::Resumable, resource) => {
            push_upload_type(request, "resumable");
            request.set_header("X-Upload-Content-Type", media.mime_type.clone());
            request.set_header("X-Upload-Content-Length", media.body.len().to_string());
            if let Some(resource) = resource {
                request.set_header("Content-Type", JSON_CONTENT_TYPE);
                request.body = Some(Bytes::from(serde_json::to_vec(resource)?));
            } else {
                request.body = None;
            }
            Ok(UploadStep::SendToSession(media.clone()))
        }
        (UploadProtocol::Multipart, Some(resource)) => {
            push_upload_type(request, "multipart");
            let boundary = new_boundary();
            request.set_header(
                "Content-Type",
                format!("multipart/related; boundary={}", boundary),
            );
            request.body = Some(multipart_related_body(resource, media, &boundary)?);
            Ok(UploadStep::Complete)
        }
        (UploadProtocol::Multipart, None) => {
            push_upload_type(request, "media");
            request.set_header("Content-Type", media.mime_type.clone());
            request.body = Some(media.body.clone());
            Ok(UploadStep::Complete)
        }
    }
}

/// セッションURIへメディアを送るリクエストを作る
pub fn session_request(session_uri: &str, media: &Media) -> HttpRequest {
    let mut request = HttpRequest::new(HttpMethod::Put, session_uri);
    request.set_header("Content-Type", media.mime_type.clone());
    request.body = Some(media.body.clone());
    request
}

/// `Location` ヘッダーの値をセッションURIに解決する
///
/// 相対URIは開始リクエストのURLを基準に解決する。解決できない場合は `None`。
pub fn resolve_session_uri(initiation_url: &str, location: &str) -> Option<String> {
    let location = location.trim();
    if location.is_empty() {
        return None;
    }
    Url::parse(initiation_url)
        .and_then(|base| base.join(location))
        .ok()
        .map(String::from)
}

fn push_upload_type(request: &mut HttpRequest, upload_type: &str) {
    request
        .query
        .push((UPLOAD_TYPE_PARAM.to_string(), upload_type.to_string()));
}

/// `multipart/related` のボディを組み立てる
///
/// # Errors
/// resource のシリアライズに失敗した場合
pub fn multipart_related_body(
    resource: &serde_json::Value,
    media: &Media,
    boundary: &str,
) -> Result<Bytes, serde_json::Error> {
    let json = serde_json::to_vec(resource)?;
    let mut body = BytesMut::with_capacity(json.len() + media.body.len() + 256);

    body.put_slice(format!("--{}\r\n", boundary).as_bytes());
    body.put_slice(format!("Content-Type: {}\r\n\r\n", JSON_CONTENT_TYPE).as_bytes());
    body.put_slice(&json);
    body.put_slice(format!("\r\n--{}\r\n", boundary).as_bytes());
    body.put_slice(format!("Content-Type: {}\r\n\r\n", media.mime_type).as_bytes());
    body.put_slice(&media.body);
    body.put_slice(format!("\r\n--{}--\r\n", boundary).as_bytes());

    Ok(body.freeze())
}
