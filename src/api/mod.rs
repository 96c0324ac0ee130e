//! YouTube Content ID API モジュール
//!
//! 各操作は `operations` の静的な記述子として定義され、
//! すべての呼び出しは `dispatcher` の同じ経路で組み立て・実行されます。

pub mod auth;
pub mod classifier;
pub mod client;
pub mod context;
pub mod descriptor;
pub mod dispatcher;
pub mod error;
pub mod operations;
pub mod options;
pub mod params;
pub mod request;
pub mod template;
pub mod transport;
pub mod types;
pub mod upload;

pub use auth::Credentials;
pub use client::YoutubePartner;
pub use context::RequestContext;
pub use descriptor::{HttpMethod, MethodDescriptor};
pub use dispatcher::PreparedCall;
pub use error::ApiError;
pub use options::{RequestOptions, ResponseEncoding};
pub use params::{CallParameters, Media, ParamValue, UploadProtocol};
pub use request::{HttpRequest, HttpResponse, RequestSummary};
pub use transport::{ReqwestTransport, Transport, TransportError};
pub use types::{ApiResponse, RawResponse, ServerErrorPayload};
