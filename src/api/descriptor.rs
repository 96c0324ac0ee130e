/// メソッド記述子
///
/// 各API操作の静的な定義（HTTPメソッド、URLテンプレート、必須パラメータ、
/// パスパラメータ、メディアアップロード用URLテンプレート）を表します。
/// 記述子はプロセスの生存期間中変更されない読み取り専用データです。
use std::fmt;

/// HTTPメソッド
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    /// HTTPメソッド名を返す
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// API操作の記述子
///
/// `url_template` と `media_upload_url_template` はクライアントのルートURLからの
/// 相対パスで、`{name}` 形式のプレースホルダーを含みます。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MethodDescriptor {
    /// 論理的な操作名（例: "assets.get"）
    pub name: &'static str,
    pub http_method: HttpMethod,
    pub url_template: &'static str,
    /// 必須パラメータ（宣言順にチェックされる）
    pub required_params: &'static [&'static str],
    pub path_params: &'static [&'static str],
    pub media_upload_url_template: Option<&'static str>,
}

impl MethodDescriptor {
    /// メディアアップロードを持たない記述子を作成
    pub const fn new(
        name: &'static str,
        http_method: HttpMethod,
        url_template: &'static str,
        required_params: &'static [&'static str],
        path_params: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            http_method,
            url_template,
            required_params,
            path_params,
            media_upload_url_template: None,
        }
    }

    /// メディアアップロード用URLテンプレートを付与する
    pub const fn with_media_upload(mut self, media_upload_url_template: &'static str) -> Self {
        self.media_upload_url_template = Some(media_upload_url_template);
        self
    }

    pub fn supports_media_upload(&self) -> bool {
        self.media_upload_url_template.is_some()
    }

    pub fn is_path_param(&self, name: &str) -> bool {
        self.path_params.contains(&name)
    }
}

impl fmt::Display for MethodDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} {})", self.name, self.http_method, self.url_template)
    }
}
