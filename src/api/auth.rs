/// 認証情報
///
/// ディスパッチャーが各リクエストの送信前に呼び出す認証情報付与フックです。
/// トークンの取得・更新は外部の責務で、ここでは受け取った値を付与するだけです。
use crate::api::request::HttpRequest;
use base64::{Engine as _, engine::general_purpose};

/// APIキーを送信するクエリパラメータ名
pub const API_KEY_PARAM: &str = "key";

/// 認証情報
#[derive(Clone, Default, PartialEq, Eq)]
pub enum Credentials {
    /// 認証なし
    #[default]
    None,
    /// APIキー（`key` クエリパラメータ）
    ApiKey(String),
    /// OAuth 2.0 アクセストークン
    Bearer(String),
    /// HTTP Basic認証（プロキシやテストサーバー用）
    Basic { username: String, password: String },
}

impl Credentials {
    /// リクエストに認証情報を付与する
    pub fn apply(&self, request: &mut HttpRequest) {
        match self {
            Self::None => {}
            Self::ApiKey(key) => {
                request.query.retain(|(name, _)| name != API_KEY_PARAM);
                request.query.push((API_KEY_PARAM.to_string(), key.clone()));
            }
            Self::Bearer(token) => {
                request.set_header("Authorization", format!("Bearer {}", token));
            }
            Self::Basic { .. } => {
                if let Some(header) = self.basic_auth_header() {
                    request.set_header("Authorization", header);
                }
            }
        }
    }

    /// HTTP Basic認証ヘッダーの値を生成
    ///
    /// # Returns
    /// "Basic <base64(username:password)>" 形式の文字列（Basic以外は None）
    fn basic_auth_header(&self) -> Option<String> {
        match self {
            Self::Basic { username, password } => {
                let credentials = format!("{}:{}", username, password);
                let encoded = general_purpose::STANDARD.encode(credentials.as_bytes());
                Some(format!("Basic {}", encoded))
            }
            _ => None,
        }
    }

    /// ログ出力用にマスキングした表現
    pub fn masked(&self) -> String {
        match self {
            Self::None => "none".to_string(),
            Self::ApiKey(key) => format!("api_key({})", mask(key)),
            Self::Bearer(token) => format!("bearer({})", mask(token)),
            Self::Basic { username, .. } => format!("basic({}:****)", username),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.masked())
    }
}

/// 秘密値をマスキングする
///
/// 8文字以下はすべて '*'、それ以外は先頭4文字と末尾4文字のみ残す。
fn mask(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() <= 8 {
        "*".repeat(chars.len())
    } else {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}***{}", head, tail)
    }
}
