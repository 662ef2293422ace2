pub mod commands;
pub mod utils;

use std::time::Duration;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::client::{http::DEFAULT_TIMEOUT_SECS, ApiClient};
use crate::database::models::{Product, Release, Stock, User};
use commands::records::RecordCommands;
use commands::session::SessionResource;

pub const DEFAULT_SERVER: &str = "http://localhost:5000";

#[derive(Parser)]
#[command(name = "pharm")]
#[command(about = "Pharm CLI - Command-line client for the Pharmacy Inventory API")]
#[command(version)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        env = "PHARM_SERVER",
        default_value = DEFAULT_SERVER,
        help = "API base URL"
    )]
    pub server: String,

    #[arg(
        long,
        global = true,
        env = "PHARM_TIMEOUT_SECS",
        default_value_t = DEFAULT_TIMEOUT_SECS,
        help = "Request timeout in seconds"
    )]
    pub timeout: u64,

    #[arg(long, global = true, help = "Output in human-readable text format")]
    pub text: bool,

    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Drug catalogue")]
    Products {
        #[command(subcommand)]
        cmd: RecordCommands,
    },

    #[command(about = "Stock levels per product")]
    Stocks {
        #[command(subcommand)]
        cmd: RecordCommands,
    },

    #[command(about = "Batch releases with expiry dates")]
    Releases {
        #[command(subcommand)]
        cmd: RecordCommands,
    },

    #[command(about = "Staff accounts")]
    Users {
        #[command(subcommand)]
        cmd: RecordCommands,
    },

    #[command(about = "Releases expiring soon (or already expired)")]
    Shortexpiry {
        #[arg(long, help = "Alert window in days (server default when omitted)")]
        days: Option<i32>,
    },

    #[command(about = "Inventory totals")]
    Summary,

    #[command(about = "Check a username and password")]
    Signin {
        #[arg(help = "Username")]
        username: String,
        #[arg(long, help = "Password")]
        password: String,
    },

    #[command(about = "Create an account")]
    Signup(commands::account::SignupArgs),

    #[command(about = "Show how to get a password reset")]
    ForgotPassword {
        #[arg(help = "Account email")]
        email: String,
    },

    #[command(about = "Interactive list session with undo")]
    Session {
        #[arg(value_enum, help = "Collection to work on")]
        resource: SessionResource,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);
    let client = ApiClient::new(&cli.server, Duration::from_secs(cli.timeout))?;

    use commands::{account, inventory, records, session};

    match cli.command {
        Commands::Products { cmd } => records::handle::<Product>(cmd, &client, output_format).await,
        Commands::Stocks { cmd } => records::handle::<Stock>(cmd, &client, output_format).await,
        Commands::Releases { cmd } => records::handle::<Release>(cmd, &client, output_format).await,
        Commands::Users { cmd } => records::handle::<User>(cmd, &client, output_format).await,
        Commands::Shortexpiry { days } => {
            inventory::short_expiry(&client, days, output_format).await
        }
        Commands::Summary => inventory::summary(&client, output_format).await,
        Commands::Signin { username, password } => {
            account::signin(&client, &username, &password, output_format).await
        }
        Commands::Signup(args) => account::signup(&client, args, output_format).await,
        Commands::ForgotPassword { email } => {
            account::forgot_password(&client, &email, output_format).await
        }
        Commands::Session { resource } => session::run(resource, client, output_format).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_record_subcommands() {
        let args = ["pharm", "--json", "stocks", "update", "3", "quantity=12"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(OutputFormat::from_cli(&cli), OutputFormat::Json);
        match cli.command {
            Commands::Stocks {
                cmd: RecordCommands::Update { id, fields },
            } => {
                assert_eq!(id, 3);
                assert_eq!(fields, vec!["quantity=12".to_string()]);
            }
            _ => panic!("expected stocks update"),
        }
    }

    #[test]
    fn kebab_case_command_names() {
        assert!(Cli::try_parse_from(["pharm", "forgot-password", "a@b.c"]).is_ok());
        assert!(Cli::try_parse_from(["pharm", "shortexpiry", "--days", "7"]).is_ok());
        assert!(Cli::try_parse_from(["pharm", "session", "releases"]).is_ok());
        assert!(Cli::try_parse_from(["pharm", "session", "invoices"]).is_err());
    }
}
