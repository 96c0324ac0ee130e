/// リクエストオプションのマージ
///
/// メソッドのデフォルトオプションと呼び出し側のオプションを浅くマージします。
///
/// # マージ規則
/// - 呼び出し側に存在するキーはデフォルトを上書きする（右優先）
/// - 呼び出し側に存在しないキーはデフォルトを保持する
/// - ネストしたオブジェクトは再帰的にマージしない。
///   `headers` を指定するとデフォルトのヘッダー集合全体が置き換わる
/// - `url` と `method` の上書きも許可する（テストサーバーへの差し替えなど）
use crate::api::descriptor::{HttpMethod, MethodDescriptor};
use indexmap::IndexMap;

/// ヘッダーの集合（挿入順を保持）
pub type Headers = IndexMap<String, String>;

/// レスポンスボディの解釈方法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseEncoding {
    /// JSONとしてデコードする
    #[default]
    Json,
    /// UTF-8テキストとして受け取り、JSON文字列値としてデコードする
    Text,
}

/// 呼び出しごとに上書きできるオプション
///
/// すべてのフィールドは任意で、`None` はデフォルトを保持することを意味します。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    /// リクエストURL（テンプレート可、`{name}` はパスパラメータで解決される）
    pub url: Option<String>,
    pub method: Option<HttpMethod>,
    pub headers: Option<Headers>,
    pub encoding: Option<ResponseEncoding>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// 記述子とクライアント設定からデフォルトオプションを作る
    pub fn defaults_for(
        descriptor: &MethodDescriptor,
        root_url: &str,
        default_headers: &Headers,
    ) -> Self {
        Self {
            url: Some(format!("{}{}", root_url, descriptor.url_template)),
            method: Some(descriptor.http_method),
            headers: Some(default_headers.clone()),
            encoding: Some(ResponseEncoding::Json),
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_method(mut self, method: HttpMethod) -> Self {
        self.method = Some(method);
        self
    }

    /// ヘッダーを1つ追加する
    ///
    /// マージ時にはこのオプションのヘッダー集合がデフォルト全体を置き換えます。
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .get_or_insert_with(Headers::new)
            .insert(name.into(), value.into());
        self
    }

    pub fn with_encoding(mut self, encoding: ResponseEncoding) -> Self {
        self.encoding = Some(encoding);
        self
    }
}

/// マージ後、すべての値が確定したオプション
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedOptions {
    pub url: String,
    pub method: HttpMethod,
    pub headers: Headers,
    pub encoding: ResponseEncoding,
}

/// デフォルトオプションに呼び出し側オプションを浅くマージする
pub fn merge(defaults: RequestOptions, caller: RequestOptions) -> RequestOptions {
    RequestOptions {
        url: caller.url.or(defaults.url),
        method: caller.method.or(defaults.method),
        headers: caller.headers.or(defaults.headers),
        encoding: caller.encoding.or(defaults.encoding),
    }
}

/// 記述子のデフォルトに呼び出し側オプションをマージし、値を確定させる
///
/// `url` と `method` は記述子から必ず得られるため、欠けることはありません。
pub fn resolve(
    descriptor: &MethodDescriptor,
    root_url: &str,
    default_headers: &Headers,
    caller: Option<RequestOptions>,
) -> MergedOptions {
    let defaults = RequestOptions::defaults_for(descriptor, root_url, default_headers);
    let merged = merge(defaults, caller.unwrap_or_default());

    MergedOptions {
        url: merged
            .url
            .unwrap_or_else(|| format!("{}{}", root_url, descriptor.url_template)),
        method: merged.method.unwrap_or(descriptor.http_method),
        headers: merged.headers.unwrap_or_default(),
        encoding: merged.encoding.unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::operations;

    const ROOT: &str = "https://www.googleapis.com/";

    fn default_headers() -> Headers {
        let mut headers = Headers::new();
        headers.insert("X-Default".to_string(), "d".to_string());
        headers.insert("X-Other".to_string(), "o".to_string());
        headers
    }

    #[test]
    fn test_defaults_for_descriptor() {
        let defaults =
            RequestOptions::defaults_for(&operations::ASSETS_GET, ROOT, &default_headers());
        assert_eq!(
            defaults.url.as_deref(),
            Some("https://www.googleapis.com/youtube/partner/v1/assets/{assetId}")
        );
        assert_eq!(defaults.method, Some(HttpMethod::Get));
        assert_eq!(defaults.encoding, Some(ResponseEncoding::Json));
    }

    #[test]
    fn test_merge_is_right_biased() {
        // 呼び出し側に存在するキーは上書き、存在しないキーはデフォルトを保持
        let defaults = RequestOptions::defaults_for(&operations::CLAIMS_GET, ROOT, &default_headers());
        let caller = RequestOptions::new().with_method(HttpMethod::Post);

        let merged = merge(defaults.clone(), caller.clone());
        assert_eq!(merged.method, caller.method);
        assert_eq!(merged.url, defaults.url);
        assert_eq!(merged.headers, defaults.headers);
        assert_eq!(merged.encoding, defaults.encoding);
    }

    #[test]
    fn test_merge_headers_replace_whole_set() {
        let defaults = RequestOptions::defaults_for(&operations::CLAIMS_GET, ROOT, &default_headers());
        let caller = RequestOptions::new().with_header("X-Test", "1");

        let merged = merge(defaults, caller);
        let headers = merged.headers.expect("headers should be present");
        assert_eq!(headers.len(), 1);
        assert_eq!(headers.get("X-Test").map(String::as_str), Some("1"));
        assert!(!headers.contains_key("X-Default"));
    }

    #[test]
    fn test_merge_with_empty_caller_returns_defaults() {
        let defaults = RequestOptions::defaults_for(&operations::ORDERS_LIST, ROOT, &default_headers());
        assert_eq!(merge(defaults.clone(), RequestOptions::new()), defaults);
    }

    #[test]
    fn test_resolve_url_override() {
        let caller = RequestOptions::new().with_url("http://localhost:9999/assets/{assetId}");
        let resolved = resolve(&operations::ASSETS_GET, ROOT, &Headers::new(), Some(caller));

        assert_eq!(resolved.url, "http://localhost:9999/assets/{assetId}");
        assert_eq!(resolved.method, HttpMethod::Get);
        assert_eq!(resolved.encoding, ResponseEncoding::Json);
    }

    #[test]
    fn test_resolve_without_caller_options() {
        let resolved = resolve(&operations::WHITELISTS_DELETE, ROOT, &default_headers(), None);
        assert_eq!(
            resolved.url,
            "https://www.googleapis.com/youtube/partner/v1/whitelists/{id}"
        );
        assert_eq!(resolved.method, HttpMethod::Delete);
        assert_eq!(resolved.headers, default_headers());
    }
}
