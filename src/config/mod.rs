//! Configuration (layered: code > env > TOML file).

pub mod endpoints;

pub use endpoints::Endpoints;

use std::fmt;
use std::fs;
use std::path::Path;

use bon::Builder;
use serde::Deserialize;

use crate::error::{MailruError, Result};

pub const APP_ID_ENV: &str = "MAILRU_APP_ID";
pub const APP_SECRET_ENV: &str = "MAILRU_APP_SECRET";
pub const SIGNING_SECRET_ENV: &str = "MAILRU_SIGNING_SECRET";
pub const REDIRECT_URI_ENV: &str = "MAILRU_REDIRECT_URI";
pub const SCOPE_ENV: &str = "MAILRU_SCOPE";

/// Static application credentials for one Mail.ru Connect app.
///
/// Immutable once built. `app_secret` is sent to the token endpoint;
/// `signing_secret` never leaves the process and only feeds request
/// signatures.
///
/// # Example
/// ```
/// use mailru_connect::config::ClientConfig;
///
/// let config = ClientConfig::builder()
///     .app_id("APP_ID")
///     .app_secret("APP_SECRET")
///     .signing_secret("APP_SERVER_KEY")
///     .redirect_uri("https://example.com/callback")
///     .scope("stream")
///     .build();
/// assert_eq!(config.app_id(), "APP_ID");
/// ```
#[derive(Clone, PartialEq, Eq, Builder, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClientConfig {
    #[builder(into)]
    app_id: String,
    #[builder(into)]
    app_secret: String,
    #[builder(into)]
    signing_secret: String,
    #[builder(into)]
    redirect_uri: String,
    #[builder(into, default)]
    #[serde(default)]
    scope: String,
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("app_id", &self.app_id)
            .field("app_secret", &"..")
            .field("signing_secret", &"..")
            .field("redirect_uri", &self.redirect_uri)
            .field("scope", &self.scope)
            .finish()
    }
}

impl ClientConfig {
    pub fn new(
        app_id: impl Into<String>,
        app_secret: impl Into<String>,
        signing_secret: impl Into<String>,
        redirect_uri: impl Into<String>,
        scope: impl Into<String>,
    ) -> Self {
        Self {
            app_id: app_id.into(),
            app_secret: app_secret.into(),
            signing_secret: signing_secret.into(),
            redirect_uri: redirect_uri.into(),
            scope: scope.into(),
        }
    }

    /// Load from `MAILRU_*` environment variables (a `.env` file is honoured).
    ///
    /// `MAILRU_SCOPE` is optional; the rest are required.
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv(); // load .env if present, ignore error

        Ok(Self {
            app_id: required_env(APP_ID_ENV)?,
            app_secret: required_env(APP_SECRET_ENV)?,
            signing_secret: required_env(SIGNING_SECRET_ENV)?,
            redirect_uri: required_env(REDIRECT_URI_ENV)?,
            scope: std::env::var(SCOPE_ENV).unwrap_or_default(),
        })
    }

    /// Parse a flat TOML document with the same keys as the struct fields.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    /// Load from a TOML file.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|err| {
            MailruError::Configuration(format!("Cannot read {}: {err}", path.display()))
        })?;
        Self::from_toml_str(&raw)
    }

    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    pub fn app_secret(&self) -> &str {
        &self.app_secret
    }

    pub fn signing_secret(&self) -> &str {
        &self.signing_secret
    }

    pub fn redirect_uri(&self) -> &str {
        &self.redirect_uri
    }

    pub fn scope(&self) -> &str {
        &self.scope
    }
}

fn required_env(name: &str) -> Result<String> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(MailruError::Configuration(format!(
            "Environment variable {name} not set"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const TOML: &str = r#"
app_id = "APP_ID"
app_secret = "APP_SECRET"
signing_secret = "APP_SERVER_KEY"
redirect_uri = "REDIRECT_URI"
scope = "PERMISSIONS"
"#;

    #[test]
    fn builder_defaults_scope_to_empty() {
        let config = ClientConfig::builder()
            .app_id("a")
            .app_secret("b")
            .signing_secret("c")
            .redirect_uri("d")
            .build();
        assert_eq!(config.scope(), "");
    }

    #[test]
    fn builder_matches_positional_constructor() {
        let built = ClientConfig::builder()
            .app_id("APP_ID")
            .app_secret("APP_SECRET")
            .signing_secret("APP_SERVER_KEY")
            .redirect_uri("REDIRECT_URI")
            .scope("PERMISSIONS")
            .build();
        let positional = ClientConfig::new(
            "APP_ID",
            "APP_SECRET",
            "APP_SERVER_KEY",
            "REDIRECT_URI",
            "PERMISSIONS",
        );
        assert_eq!(built, positional);
    }

    #[test]
    fn debug_redacts_secrets() {
        let config = ClientConfig::from_toml_str(TOML).unwrap();
        let rendered = format!("{config:?}");
        assert!(rendered.contains("APP_ID"));
        assert!(!rendered.contains("APP_SECRET"));
        assert!(!rendered.contains("APP_SERVER_KEY"));
    }

    #[test]
    fn toml_round_trip_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(TOML.as_bytes()).unwrap();

        let config = ClientConfig::load_from_path(file.path()).unwrap();
        assert_eq!(config.app_id(), "APP_ID");
        assert_eq!(config.signing_secret(), "APP_SERVER_KEY");
        assert_eq!(config.scope(), "PERMISSIONS");
    }

    #[test]
    fn toml_scope_is_optional() {
        let config = ClientConfig::from_toml_str(
            "app_id = \"a\"\napp_secret = \"b\"\nsigning_secret = \"c\"\nredirect_uri = \"d\"\n",
        )
        .unwrap();
        assert_eq!(config.scope(), "");
    }

    #[test]
    fn toml_unknown_key_is_configuration_error() {
        let raw = format!("{TOML}\nextra = 1\n");
        let err = ClientConfig::from_toml_str(&raw).unwrap_err();
        assert!(matches!(err, MailruError::Configuration(_)));
    }

    #[test]
    fn missing_file_is_configuration_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = ClientConfig::load_from_path(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, MailruError::Configuration(_)));
    }
}
