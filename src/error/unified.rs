//! Error classification and recovery.

use serde::{Deserialize, Serialize};
use strum::Display;

/// Broad error category for routing recovery logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ErrorCategory {
    /// The authorization flow did not produce a usable code.
    Authorization,
    Network,
    /// The response body did not match the documented shape.
    Protocol,
    Api,
    Configuration,
}

/// Suggested recovery action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RecoverySuggestion {
    RestartAuthorization,
    RetryWithBackoff,
    CheckRequest,
    CheckConfiguration,
    ContactSupport,
}
