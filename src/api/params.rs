/// 呼び出しパラメータ
///
/// 1回の呼び出しごとに呼び出し側が生成するパラメータの集合です。
/// 通常のパラメータに加え、予約されたリクエストボディ（resource）と
/// バイナリペイロード（media）を保持します。
use bytes::Bytes;
use indexmap::IndexMap;
use serde::Serialize;

/// パラメータの値
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    /// クエリでは同じキーを繰り返して送信し、パスではカンマ区切りにする
    List(Vec<String>),
    /// 明示的な未設定値（必須チェックでは欠落扱い、送信されない）
    Null,
}

impl ParamValue {
    /// 必須パラメータのチェックで欠落とみなす値かどうか
    ///
    /// `Null`、空文字列、空リストが該当します。`false` と `0` は有効な値です。
    pub fn is_empty_equivalent(&self) -> bool {
        match self {
            Self::Null => true,
            Self::String(s) => s.is_empty(),
            Self::List(items) => items.is_empty(),
            Self::Integer(_) | Self::Float(_) | Self::Bool(_) => false,
        }
    }

    /// クエリ文字列に載せる値（未エンコード）
    pub fn to_query_values(&self) -> Vec<String> {
        match self {
            Self::Null => Vec::new(),
            Self::List(items) => items.clone(),
            other => vec![other.to_path_value()],
        }
    }

    /// パスに埋め込む値（未エンコード）
    pub fn to_path_value(&self) -> String {
        match self {
            Self::String(s) => s.clone(),
            Self::Integer(n) => n.to_string(),
            Self::Float(n) => n.to_string(),
            Self::Bool(b) => b.to_string(),
            Self::List(items) => items.join(","),
            Self::Null => String::new(),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&String> for ParamValue {
    fn from(value: &String) -> Self {
        Self::String(value.clone())
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

impl From<&[&str]> for ParamValue {
    fn from(value: &[&str]) -> Self {
        Self::List(value.iter().map(|s| s.to_string()).collect())
    }
}

impl<T: Into<ParamValue>> From<Option<T>> for ParamValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// メディアのアップロード方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UploadProtocol {
    /// 1回のリクエストで送信する（resource があれば multipart/related）
    #[default]
    Multipart,
    /// セッションURIを取得してから本体を送信する
    Resumable,
}

/// アップロードするメディア
#[derive(Debug, Clone, PartialEq)]
pub struct Media {
    pub mime_type: String,
    pub body: Bytes,
    pub protocol: UploadProtocol,
}

impl Media {
    pub fn new(mime_type: impl Into<String>, body: impl Into<Bytes>) -> Self {
        Self {
            mime_type: mime_type.into(),
            body: body.into(),
            protocol: UploadProtocol::default(),
        }
    }

    /// アップロード方式を指定する
    pub fn with_protocol(mut self, protocol: UploadProtocol) -> Self {
        self.protocol = protocol;
        self
    }
}

/// 1回の呼び出しに渡すパラメータ
///
/// 挿入順が保持されるため、生成されるクエリ文字列は決定的です。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CallParameters {
    pub values: IndexMap<String, ParamValue>,
    /// リクエストボディとして送信されるJSON
    pub resource: Option<serde_json::Value>,
    pub media: Option<Media>,
}

impl CallParameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// パラメータを追加する（同名のパラメータは上書き）
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) {
        self.values.insert(name.into(), value.into());
    }

    /// リクエストボディを設定する
    ///
    /// # Errors
    /// JSONへのシリアライズに失敗した場合
    pub fn with_resource<T: Serialize>(mut self, resource: &T) -> Result<Self, serde_json::Error> {
        self.resource = Some(serde_json::to_value(resource)?);
        Ok(self)
    }

    /// 既にJSON値になっているリクエストボディを設定する
    pub fn with_resource_value(mut self, resource: serde_json::Value) -> Self {
        self.resource = Some(resource);
        self
    }

    pub fn with_media(mut self, media: Media) -> Self {
        self.media = Some(media);
        self
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.values.get(name)
    }
}
