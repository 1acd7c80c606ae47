//! The Mail.ru Connect client: dialog URL, code exchange and signed API calls.

use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::config::{ClientConfig, Endpoints};
use crate::error::{MailruError, Result};
use crate::signing::{self, SIG_PARAMETER};
use crate::transport::{ReqwestTransport, Transport};
use crate::types::{AccessToken, UserProfile, WireUser};

const AUTHORIZE_PATH: &str = "oauth/authorize";
const ACCESS_TOKEN_PATH: &str = "access_token";
const PLATFORM_API_PATH: &str = "platform/api";

const RESPONSE_TYPE_CODE: &str = "code";
const GRANT_TYPE_AUTHORIZATION_CODE: &str = "authorization_code";
const CODE_PARAMETER: &str = "code";
const METHOD_PARAMETER: &str = "method";
const USERS_GET_METHOD: &str = "users.get";
/// Dialog/token parameters that never go to the platform API.
const UNSIGNED_PARAMETERS: [&str; 2] = ["client_id", "redirect_uri"];

/// Client for one Mail.ru Connect application.
///
/// Holds only immutable state, so it can be cloned and shared across tasks
/// as long as the transport is.
///
/// # Example
/// ```no_run
/// use std::sync::Arc;
/// use mailru_connect::prelude::*;
///
/// let config = ClientConfig::new("APP_ID", "APP_SECRET", "SERVER_KEY", "https://example.com/cb", "");
/// let client = MailruClient::new(config)
///     .with_transport(Arc::new(ReqwestTransport::new()));
/// println!("{}", client.dialog_url());
/// ```
#[derive(Clone)]
pub struct MailruClient {
    config: ClientConfig,
    endpoints: Endpoints,
    transport: Arc<dyn Transport>,
}

impl fmt::Debug for MailruClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MailruClient")
            .field("config", &self.config)
            .field("endpoints", &self.endpoints)
            .field("transport", &"..")
            .finish()
    }
}

impl MailruClient {
    /// Client against the production hosts over the shared reqwest pool.
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            endpoints: Endpoints::default(),
            transport: Arc::new(ReqwestTransport::new()),
        }
    }

    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = transport;
        self
    }

    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// URL of the authorization dialog the end user is sent to.
    pub fn dialog_url(&self) -> Url {
        self.endpoints.auth_url(
            AUTHORIZE_PATH,
            [
                ("client_id", self.config.app_id()),
                ("redirect_uri", self.config.redirect_uri()),
                ("response_type", RESPONSE_TYPE_CODE),
                ("scope", self.config.scope()),
            ],
        )
    }

    /// URL trading `code` for an access token.
    pub fn access_token_url(&self, code: &str) -> Url {
        self.endpoints.auth_url(
            ACCESS_TOKEN_PATH,
            [
                ("client_id", self.config.app_id()),
                ("client_secret", self.config.app_secret()),
                ("code", code),
                ("grant_type", GRANT_TYPE_AUTHORIZATION_CODE),
                ("redirect_uri", self.config.redirect_uri()),
            ],
        )
    }

    /// Signed platform API URL for `method` with extra `params`.
    ///
    /// `method`, `sig`, `client_id` and `redirect_uri` entries in `params` are
    /// ignored; the first value of a repeated name wins.
    pub fn signed_api_url<'a, I>(&self, method: &'a str, params: I) -> Url
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut query = signing::canonical_params(
            std::iter::once((METHOD_PARAMETER, method)).chain(
                params
                    .into_iter()
                    .filter(|(name, _)| !UNSIGNED_PARAMETERS.iter().any(|reserved| reserved == name)),
            ),
        );
        let sig = signing::sign(query.iter().map(|(k, v)| (*k, *v)), self.config.signing_secret());
        query.insert(SIG_PARAMETER, &sig);
        self.endpoints.api_url(PLATFORM_API_PATH, query)
    }

    /// Exchange the `code` carried by the OAuth redirect for an access token.
    ///
    /// Fails with [`MailruError::MissingCode`] before any request when the
    /// redirect has no (or an empty) `code`.
    pub async fn exchange_code(&self, redirect: &Url) -> Result<AccessToken> {
        let code = code_from_query(redirect.query().unwrap_or_default())
            .ok_or(MailruError::MissingCode)?;
        self.exchange(&code).await
    }

    /// Like [`exchange_code`](Self::exchange_code) for a raw redirect URL or
    /// bare query string.
    pub async fn exchange_code_str(&self, redirect: &str) -> Result<AccessToken> {
        let code = code_from_raw(redirect).ok_or(MailruError::MissingCode)?;
        self.exchange(&code).await
    }

    async fn exchange(&self, code: &str) -> Result<AccessToken> {
        self.get_json("access_token", self.access_token_url(code))
            .await
    }

    /// Fetch the profile of user `uid` through `users.get`.
    pub async fn fetch_user(&self, uid: &str) -> Result<UserProfile> {
        let mut users: Vec<WireUser> = self.call_api(USERS_GET_METHOD, [("uids", uid)]).await?;
        if users.len() != 1 {
            return Err(MailruError::UnexpectedResultCount(users.len()));
        }
        Ok(users.remove(0).into())
    }

    /// Call any signed platform method and decode the body into `T`.
    pub async fn call_api<'a, T, I>(&self, method: &'a str, params: I) -> Result<T>
    where
        T: DeserializeOwned,
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        self.get_json("platform_api", self.signed_api_url(method, params))
            .await
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: &'static str, url: Url) -> Result<T> {
        // The query carries client_secret, only the path is logged.
        debug!(endpoint, path = url.path(), "mailru request");
        let response = self.transport.get(url.as_str()).await?;
        debug!(
            endpoint,
            status = response.status,
            bytes = response.body.len(),
            "mailru response"
        );
        Ok(serde_json::from_slice(&response.body)?)
    }
}

/// First non-empty `code` in a query string.
fn code_from_query(query: &str) -> Option<String> {
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(name, _)| name == CODE_PARAMETER)
        .map(|(_, value)| value.into_owned())
        .filter(|code| !code.is_empty())
}

fn code_from_raw(raw: &str) -> Option<String> {
    match Url::parse(raw) {
        Ok(url) => code_from_query(url.query().unwrap_or_default()),
        Err(_) => {
            let query = raw.split_once('?').map_or(raw, |(_, query)| query);
            code_from_query(query.split('#').next().unwrap_or_default())
        }
    }
}
