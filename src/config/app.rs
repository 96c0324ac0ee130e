/// アプリケーション設定モジュール
///
/// コンパイル時定数として定義される静的設定を管理します。
/// これらの値は `ClientConfig` のデフォルト値として使用されます。

/// クライアント全体の静的設定
#[derive(Debug, Clone, Copy)]
pub struct AppConfig {
    pub api: ApiConfig,
}

/// API関連の設定
#[derive(Debug, Clone, Copy)]
pub struct ApiConfig {
    /// Google APIs のルートURL（末尾は必ず '/'）
    pub root_url: &'static str,

    /// APIリクエストのタイムアウト(秒)
    pub timeout_seconds: u64,

    /// User-Agent ヘッダーの値
    pub user_agent: &'static str,
}

/// グローバル定数としての静的設定
pub const APP_CONFIG: AppConfig = AppConfig {
    api: ApiConfig {
        root_url: "https://www.googleapis.com/",
        timeout_seconds: 300,
        user_agent: concat!("youtube-partner-rs/", env!("CARGO_PKG_VERSION")),
    },
};
