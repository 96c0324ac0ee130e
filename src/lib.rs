//! YouTube Content ID (youtubePartner v1) API クライアント
//!
//! 操作ごとの静的な記述子と、それを解釈する汎用のリクエストビルダー／ディスパッチャーで構成されます。
//!
//! - `api` - 記述子テーブル、パラメータ分類、URLテンプレート、オプションのマージ、ディスパッチ
//! - `config` - コンパイル時定数とクライアント設定
//! - `error_category` - エラーの分類

pub mod api;
pub mod config;
pub mod error_category;

pub use api::{ApiError, CallParameters, Credentials, RequestOptions, YoutubePartner};
pub use config::ClientConfig;
pub use error_category::ErrorCategory;
