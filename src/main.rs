//! mailru-connect CLI binary entry point.

use clap::Parser;
use mailru_connect::cli::{commands, Cli, Commands};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::DialogUrl => commands::handle_dialog_url(),
        Commands::Exchange(args) => commands::handle_exchange(&args).await,
        Commands::User(args) => commands::handle_user(&args).await,
        Commands::Sign(args) => commands::handle_sign(&args),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
