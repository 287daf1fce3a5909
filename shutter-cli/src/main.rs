//! Shutter CLI - sign in and pick an image from your terminal

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod output;
mod terminal;

use commands::{app, config, login, logs, signup};

/// Shutter - sign in and pick an image from your terminal
///
/// Without a subcommand, starts the interactive app at the login screen.
#[derive(Parser)]
#[command(name = "shutter", version, about, long_about = None)]
struct Cli {
    /// Auth API base URL for this run (overrides settings and environment)
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in once and exit
    Login {
        /// Email address (prompted when omitted)
        #[arg(long)]
        email: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create an account and exit
    Signup {
        /// Display name (prompted when omitted)
        #[arg(long)]
        name: Option<String>,
        /// Email address, Gmail or Outlook (prompted when omitted)
        #[arg(long)]
        email: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show or change configuration
    Config {
        #[command(subcommand)]
        command: config::ConfigCommands,
    },

    /// View and manage the event log
    Logs {
        #[command(subcommand)]
        command: logs::LogsCommands,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            output::error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let base_url = cli.base_url.as_deref();
    match cli.command {
        None => app::run(base_url).map(|()| ExitCode::SUCCESS),
        Some(Commands::Login { email, json }) => login::run(base_url, email, json),
        Some(Commands::Signup { name, email, json }) => signup::run(base_url, name, email, json),
        Some(Commands::Config { command }) => {
            config::run(command, base_url).map(|()| ExitCode::SUCCESS)
        }
        Some(Commands::Logs { command }) => logs::run(command).map(|()| ExitCode::SUCCESS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_runs_app() {
        let cli = Cli::try_parse_from(["shutter"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.base_url.is_none());
    }

    #[test]
    fn test_global_base_url() {
        let cli = Cli::try_parse_from(["shutter", "login", "--email", "a@gmail.com", "--base-url", "http://10.0.2.2:5000"])
            .unwrap();
        assert_eq!(cli.base_url.as_deref(), Some("http://10.0.2.2:5000"));
        assert!(matches!(cli.command, Some(Commands::Login { email: Some(_), json: false })));
    }

    #[test]
    fn test_config_set_base_url() {
        let cli = Cli::try_parse_from(["shutter", "config", "set-base-url", "http://localhost:5000"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Config {
                command: config::ConfigCommands::SetBaseUrl { .. }
            })
        ));
    }
}
