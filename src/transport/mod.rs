//! HTTP transport seam used by [`MailruClient`](crate::client::MailruClient).
//!
//! The client only ever needs to issue a GET and read the body back, so the
//! trait is a single method. Production code uses [`ReqwestTransport`]; tests
//! substitute their own implementation through
//! [`MailruClient::with_transport`](crate::client::MailruClient::with_transport).

pub mod http;

pub use http::{shared_client, ReqwestTransport};

use async_trait::async_trait;
use thiserror::Error;

/// Raw response handed back by a [`Transport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// A `200 OK` response with the given body.
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Self::new(200, body)
    }
}

/// Network-level failure: the request could not be completed or the body
/// could not be read.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct TransportError {
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(error: reqwest::Error) -> Self {
        let message = if error.is_timeout() {
            "request timed out".to_string()
        } else if error.is_connect() {
            "connection failed".to_string()
        } else {
            error.to_string()
        };
        Self::with_source(message, error)
    }
}

/// Something that can perform an HTTP GET.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str) -> Result<TransportResponse, TransportError>;
}
