//! Values produced by the token exchange and the platform API.

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

/// Access token returned by the token exchange.
///
/// Every field is required: a body missing any of them (such as an
/// `{"error": ...}` reply) fails to decode.
///
/// # Example
/// ```
/// use mailru_connect::types::AccessToken;
///
/// let token: AccessToken = serde_json::from_str(
///     r#"{"access_token":"T","expires_in":43200,"x_mailru_vid":"6492"}"#,
/// )
/// .unwrap();
/// assert_eq!(token.user_id, "6492");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken {
    pub access_token: String,
    /// Lifetime in seconds, counted from the exchange.
    pub expires_in: i64,
    #[serde(rename = "x_mailru_vid")]
    pub user_id: String,
}

impl AccessToken {
    /// Absolute expiry for a token issued at `issued_at`.
    ///
    /// `None` when the lifetime overflows the calendar.
    pub fn expires_at(&self, issued_at: DateTime<Utc>) -> Option<DateTime<Utc>> {
        TimeDelta::try_seconds(self.expires_in).and_then(|ttl| issued_at.checked_add_signed(ttl))
    }
}

/// A user record as returned by `users.get`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserProfile {
    pub id: String,
    pub photo_url: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// `first_name + " " + last_name`.
    pub display_name: String,
}

/// Wire shape of a `users.get` entry. Fields the platform omits (e.g. `email`
/// without the mail scope) come through empty.
#[derive(Debug, Deserialize)]
pub(crate) struct WireUser {
    #[serde(default)]
    uid: String,
    #[serde(default)]
    pic: String,
    #[serde(default)]
    first_name: String,
    #[serde(default)]
    last_name: String,
    #[serde(default)]
    email: String,
}

impl From<WireUser> for UserProfile {
    fn from(user: WireUser) -> Self {
        let display_name = format!("{} {}", user.first_name, user.last_name);
        Self {
            id: user.uid,
            photo_url: user.pic,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            display_name,
        }
    }
}
