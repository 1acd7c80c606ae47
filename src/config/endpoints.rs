//! Base URLs of the two Mail.ru hosts the client talks to.

use url::Url;

use crate::error::{MailruError, Result};

pub const DEFAULT_AUTH_BASE_URL: &str = "https://connect.mail.ru";
pub const DEFAULT_API_BASE_URL: &str = "https://www.appsmail.ru";

pub const AUTH_BASE_URL_ENV: &str = "MAILRU_AUTH_BASE_URL";
pub const API_BASE_URL_ENV: &str = "MAILRU_API_BASE_URL";

/// Where the dialog/token endpoints and the platform API live.
///
/// Production code uses [`Endpoints::default`]; tests point both at a mock
/// server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    auth_base: Url,
    api_base: Url,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            auth_base: Url::parse(DEFAULT_AUTH_BASE_URL).expect("default auth base URL is valid"),
            api_base: Url::parse(DEFAULT_API_BASE_URL).expect("default API base URL is valid"),
        }
    }
}

impl Endpoints {
    pub fn new(auth_base: &str, api_base: &str) -> Result<Self> {
        Ok(Self {
            auth_base: parse_base(auth_base)?,
            api_base: parse_base(api_base)?,
        })
    }

    /// Same host for both (mock servers).
    pub fn single(base: &str) -> Result<Self> {
        Self::new(base, base)
    }

    /// Defaults, overridden by `MAILRU_AUTH_BASE_URL` / `MAILRU_API_BASE_URL`.
    pub fn from_env() -> Result<Self> {
        let auth = std::env::var(AUTH_BASE_URL_ENV)
            .unwrap_or_else(|_| DEFAULT_AUTH_BASE_URL.to_string());
        let api =
            std::env::var(API_BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());
        Self::new(&auth, &api)
    }

    pub fn auth_base(&self) -> &Url {
        &self.auth_base
    }

    pub fn api_base(&self) -> &Url {
        &self.api_base
    }

    /// `<auth_base>/<path>?<params>`
    pub(crate) fn auth_url<'a, I>(&self, path: &str, params: I) -> Url
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        join(&self.auth_base, path, params)
    }

    /// `<api_base>/<path>?<params>`
    pub(crate) fn api_url<'a, I>(&self, path: &str, params: I) -> Url
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        join(&self.api_base, path, params)
    }
}

fn parse_base(raw: &str) -> Result<Url> {
    let url = Url::parse(raw)
        .map_err(|err| MailruError::Configuration(format!("Invalid base URL {raw:?}: {err}")))?;
    if url.cannot_be_a_base() {
        return Err(MailruError::Configuration(format!(
            "Base URL {raw:?} cannot carry a path"
        )));
    }
    Ok(url)
}

/// Append `path` to the base path and replace the query with `params`,
/// form-urlencoded in the order given.
fn join<'a, I>(base: &Url, path: &str, params: I) -> Url
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut url = base.clone();
    let prefix = base.path().trim_end_matches('/');
    url.set_path(&format!("{prefix}/{path}"));
    url.set_fragment(None);
    url.query_pairs_mut().clear().extend_pairs(params);
    url
}
