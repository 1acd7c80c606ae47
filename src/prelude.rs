//! Convenience re-exports.

pub use crate::client::MailruClient;
pub use crate::config::{ClientConfig, Endpoints};
pub use crate::error::{MailruError, Result};
pub use crate::transport::{ReqwestTransport, Transport, TransportError, TransportResponse};
pub use crate::types::{AccessToken, UserProfile};
