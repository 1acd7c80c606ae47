//! Error types for mailru-connect.

pub mod unified;

pub use unified::{ErrorCategory, RecoverySuggestion};

use thiserror::Error;

use crate::transport::TransportError;

/// Primary error type for all client operations.
#[derive(Error, Debug)]
pub enum MailruError {
    #[error("Redirect is missing the authorization code")]
    MissingCode,

    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Unexpected result count: expected exactly 1, got {0}")]
    UnexpectedResultCount(usize),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl From<toml::de::Error> for MailruError {
    fn from(error: toml::de::Error) -> Self {
        Self::Configuration(error.to_string())
    }
}

impl MailruError {
    /// Classify this error into a category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingCode => ErrorCategory::Authorization,
            Self::Transport(_) => ErrorCategory::Network,
            Self::Decode(_) => ErrorCategory::Protocol,
            Self::UnexpectedResultCount(_) => ErrorCategory::Api,
            Self::Configuration(_) => ErrorCategory::Configuration,
        }
    }

    /// Whether this error is potentially retryable.
    ///
    /// Only network failures are; everything else fails the same way again.
    pub fn is_retryable(&self) -> bool {
        matches!(self.category(), ErrorCategory::Network)
    }

    /// Suggest recovery actions.
    pub fn recovery_suggestion(&self) -> RecoverySuggestion {
        match self.category() {
            ErrorCategory::Authorization => RecoverySuggestion::RestartAuthorization,
            ErrorCategory::Network => RecoverySuggestion::RetryWithBackoff,
            ErrorCategory::Api => RecoverySuggestion::CheckRequest,
            ErrorCategory::Configuration => RecoverySuggestion::CheckConfiguration,
            ErrorCategory::Protocol => RecoverySuggestion::ContactSupport,
        }
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, MailruError>;
