//! reqwest-backed transport.

use std::sync::OnceLock;
use std::time::Duration;

use async_trait::async_trait;

use super::{Transport, TransportError, TransportResponse};

static SHARED_CLIENT: OnceLock<reqwest::Client> = OnceLock::new();

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Get (or create) the shared reqwest client.
pub fn shared_client() -> &'static reqwest::Client {
    SHARED_CLIENT.get_or_init(|| {
        reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .pool_max_idle_per_host(4)
            .build()
            .unwrap_or_else(|err| {
                tracing::warn!(error = %err, "HTTP client build failed, using defaults without timeout");
                reqwest::Client::new()
            })
    })
}

/// Default [`Transport`] built on `reqwest`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl ReqwestTransport {
    /// Transport over the process-wide shared connection pool.
    pub fn new() -> Self {
        Self {
            client: shared_client().clone(),
        }
    }

    /// Transport over a caller-configured client (proxies, custom timeouts).
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<TransportResponse, TransportError> {
        let resp = self.client.get(url).send().await?;
        let status = resp.status().as_u16();
        let body = resp.bytes().await?;
        Ok(TransportResponse::new(status, body.to_vec()))
    }
}
