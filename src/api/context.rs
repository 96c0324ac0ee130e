/// リクエストコンテキスト
///
/// 1つのクライアントから発行される全呼び出しが共有する読み取り専用の値です。
/// 明示的に各呼び出しへ渡され、呼び出し間で変更されることはありません。
use crate::api::auth::Credentials;
use crate::api::transport::Transport;
use crate::config::ClientConfig;
use std::fmt;
use std::sync::Arc;

/// リクエストコンテキスト
///
/// `Clone` は参照カウントの増加のみで、複数タスクから同時に読み取れます。
#[derive(Clone)]
pub struct RequestContext {
    config: Arc<ClientConfig>,
    credentials: Arc<Credentials>,
    transport: Arc<dyn Transport>,
}

impl RequestContext {
    pub fn new(
        config: ClientConfig,
        credentials: Credentials,
        transport: Arc<dyn Transport>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            credentials: Arc::new(credentials),
            transport,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn transport(&self) -> &dyn Transport {
        self.transport.as_ref()
    }
}

impl fmt::Debug for RequestContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestContext")
            .field("config", &self.config)
            .field("credentials", &self.credentials)
            .finish_non_exhaustive()
    }
}
