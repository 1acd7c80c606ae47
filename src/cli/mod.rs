//! CLI entry point for mailru-connect.

pub mod commands;

use clap::{Parser, Subcommand};

/// Mail.ru Connect OAuth helper
#[derive(Parser, Debug)]
#[command(
    name = "mailru-connect",
    version,
    about = "Mail.ru Connect OAuth helper",
    long_about = "Reads MAILRU_APP_ID, MAILRU_APP_SECRET, MAILRU_SIGNING_SECRET, \
                  MAILRU_REDIRECT_URI and MAILRU_SCOPE from the environment (or .env)."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the authorization dialog URL
    DialogUrl,
    /// Exchange the code from a redirect URL for an access token
    Exchange(ExchangeArgs),
    /// Fetch a user profile via users.get
    User(UserArgs),
    /// Print the request signature for a platform method call
    Sign(SignArgs),
}

/// Arguments for `mailru-connect exchange`.
#[derive(Parser, Debug)]
pub struct ExchangeArgs {
    /// Full redirect URL (or its query string) containing `code=`
    pub redirect_url: String,
}

/// Arguments for `mailru-connect user`.
#[derive(Parser, Debug)]
pub struct UserArgs {
    /// User id (x_mailru_vid from the token exchange)
    pub uid: String,
}

/// Arguments for `mailru-connect sign`.
#[derive(Parser, Debug)]
pub struct SignArgs {
    /// Platform method, e.g. users.get
    pub method: String,

    /// Extra parameters as KEY=VALUE
    #[arg(value_parser = parse_key_value)]
    pub params: Vec<(String, String)>,
}

fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected KEY=VALUE, got '{raw}'"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_sign_parameters() {
        let cli = Cli::try_parse_from([
            "mailru-connect",
            "sign",
            "friends.get",
            "app_id=423004",
            "secure=1",
        ])
        .unwrap();
        match cli.command {
            Commands::Sign(args) => {
                assert_eq!(args.method, "friends.get");
                assert_eq!(
                    args.params,
                    vec![
                        ("app_id".to_string(), "423004".to_string()),
                        ("secure".to_string(), "1".to_string()),
                    ]
                );
            }
            other => panic!("expected sign, got {other:?}"),
        }
    }

    #[test]
    fn rejects_parameter_without_equals() {
        let result = Cli::try_parse_from(["mailru-connect", "sign", "users.get", "uids"]);
        assert!(result.is_err());
    }

    #[test]
    fn value_may_contain_equals() {
        assert_eq!(
            parse_key_value("redirect=a=b").unwrap(),
            ("redirect".to_string(), "a=b".to_string())
        );
    }
}
