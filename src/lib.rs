//! mailru-connect — Mail.ru Connect OAuth client
//!
//! Builds the authorization dialog URL, exchanges the redirect `code` for an
//! access token and calls the signed platform API (`users.get` and friends).
//!
//! # Quick Start
//!
//! ```no_run
//! use mailru_connect::prelude::*;
//!
//! # async fn example() -> mailru_connect::error::Result<()> {
//! let config = ClientConfig::from_env()?;
//! let client = MailruClient::new(config);
//!
//! println!("send the user to {}", client.dialog_url());
//!
//! let redirect: url::Url = "https://example.com/callback?code=abc".parse().unwrap();
//! let token = client.exchange_code(&redirect).await?;
//! let user = client.fetch_user(&token.user_id).await?;
//! println!("{}", user.display_name);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod prelude;
pub mod signing;
pub mod transport;
pub mod types;

#[cfg(feature = "cli")]
pub mod cli;
