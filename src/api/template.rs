/// URLテンプレート
///
/// `{name}` 形式のプレースホルダーをパーセントエンコードした値で置換します。
/// ネストしたテンプレートやデフォルト値はサポートしません。
use crate::api::error::ApiError;
use indexmap::IndexMap;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// RFC 3986 の非予約文字以外をエンコードする
const COMPONENT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(?<name>\w+)\}").expect("a valid regex"));

/// パスセグメント用にパーセントエンコードする
pub fn encode_path_segment(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT_ENCODE_SET).to_string()
}

/// クエリ文字列のキーまたは値としてパーセントエンコードする
pub fn encode_query_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT_ENCODE_SET).to_string()
}

/// テンプレート中のプレースホルダー名を出現順に返す
pub fn placeholders(template: &str) -> Vec<&str> {
    PLACEHOLDER
        .captures_iter(template)
        .filter_map(|caps| caps.name("name").map(|m| m.as_str()))
        .collect()
}

/// テンプレートを解決する
///
/// # Errors
/// 値が見つからないプレースホルダーがあれば `ApiError::TemplateResolution`
pub fn render(template: &str, path_values: &IndexMap<String, String>) -> Result<String, ApiError> {
    if let Some(name) = placeholders(template)
        .into_iter()
        .find(|name| !path_values.contains_key(*name))
    {
        return Err(ApiError::TemplateResolution {
            template: template.to_string(),
            name: name.to_string(),
        });
    }

    let rendered = PLACEHOLDER.replace_all(template, |caps: &Captures| {
        // 存在チェック済み
        path_values
            .get(&caps["name"])
            .map(|value| encode_path_segment(value))
            .unwrap_or_default()
    });

    Ok(rendered.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(pairs: &[(&str, &str)]) -> IndexMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_render_single_placeholder() {
        let url = render(
            "youtube/partner/v1/assets/{assetId}",
            &values(&[("assetId", "A123")]),
        )
        .unwrap();
        assert_eq!(url, "youtube/partner/v1/assets/A123");
    }

    #[test]
    fn test_render_encodes_values() {
        let url = render("claims/{claimId}", &values(&[("claimId", "a b/c?d&e")])).unwrap();
        assert_eq!(url, "claims/a%20b%2Fc%3Fd%26e");
        assert!(!url.contains('{') && !url.contains('}'));
    }

    #[test]
    fn test_render_keeps_unreserved_characters() {
        let url = render("x/{id}", &values(&[("id", "Az09-_.~")])).unwrap();
        assert_eq!(url, "x/Az09-_.~");
    }

    #[test]
    fn test_render_multiple_and_repeated_placeholders() {
        let url = render(
            "{a}/mid/{b}/{a}",
            &values(&[("a", "1"), ("b", "{b}")]),
        )
        .unwrap();
        // 置換後の値に含まれる '{' はエンコードされ、再展開されない
        assert_eq!(url, "1/mid/%7Bb%7D/1");
    }

    #[test]
    fn test_render_missing_value() {
        let err = render("videoAdvertisingOptions/{videoId}", &IndexMap::new()).unwrap_err();
        match err {
            ApiError::TemplateResolution { template, name } => {
                assert_eq!(template, "videoAdvertisingOptions/{videoId}");
                assert_eq!(name, "videoId");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_render_without_placeholders() {
        let url = render("youtube/partner/v1/assetLabels", &values(&[("x", "1")])).unwrap();
        assert_eq!(url, "youtube/partner/v1/assetLabels");
    }

    #[test]
    fn test_placeholders_in_order() {
        assert_eq!(
            placeholders("videoAdvertisingOptions/{videoId}/x/{other_id}"),
            vec!["videoId", "other_id"]
        );
        assert!(placeholders("assets").is_empty());
    }

    #[test]
    fn test_encode_query_component() {
        assert_eq!(encode_query_component("hello world"), "hello%20world");
        assert_eq!(encode_query_component("a+b=c"), "a%2Bb%3Dc");
        assert_eq!(encode_query_component("CO1"), "CO1");
    }
}
