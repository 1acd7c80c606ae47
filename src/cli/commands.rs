//! CLI command handlers.

use crate::cli::{ExchangeArgs, SignArgs, UserArgs};
use crate::client::MailruClient;
use crate::config::{ClientConfig, Endpoints};
use crate::signing;

fn client_from_env() -> crate::error::Result<MailruClient> {
    let config = ClientConfig::from_env()?;
    Ok(MailruClient::new(config).with_endpoints(Endpoints::from_env()?))
}

/// Handle `mailru-connect dialog-url`.
pub fn handle_dialog_url() -> Result<(), Box<dyn std::error::Error>> {
    let client = client_from_env()?;
    println!("{}", client.dialog_url());
    Ok(())
}

/// Handle `mailru-connect exchange <redirect-url>`.
pub async fn handle_exchange(args: &ExchangeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let client = client_from_env()?;
    let token = client.exchange_code_str(&args.redirect_url).await?;
    println!("{}", serde_json::to_string_pretty(&token)?);
    if let Some(expires_at) = token.expires_at(chrono::Utc::now()) {
        eprintln!("expires at {}", expires_at.to_rfc3339());
    }
    Ok(())
}

/// Handle `mailru-connect user <uid>`.
pub async fn handle_user(args: &UserArgs) -> Result<(), Box<dyn std::error::Error>> {
    let client = client_from_env()?;
    let user = client.fetch_user(&args.uid).await?;
    println!("{}", serde_json::to_string_pretty(&user)?);
    Ok(())
}

/// Handle `mailru-connect sign <method> [KEY=VALUE]...`.
///
/// Only the signing secret is needed, so the other variables are not read.
pub fn handle_sign(args: &SignArgs) -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();
    let secret = std::env::var(crate::config::SIGNING_SECRET_ENV)
        .map_err(|_| format!("{} not set", crate::config::SIGNING_SECRET_ENV))?;

    let params = std::iter::once(("method", args.method.as_str()))
        .chain(args.params.iter().map(|(k, v)| (k.as_str(), v.as_str())));
    println!("{}", signing::sign(params, &secret));
    Ok(())
}
