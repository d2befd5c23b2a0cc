//! RatPad CLI argument parsing and dispatch
//!
//! Command-line interface for the RatPad launchpad client: collects
//! launch parameters, talks to the local wallet agent, and reports the
//! outcome of each attempt.

use crate::commands;

use anyhow::Result;
use clap::parser::ValueSource;
use clap::{Args, CommandFactory, FromArgMatches, Parser, Subcommand};
use serde_json::Value;

/// RatPad launchpad CLI
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
#[command(name = "ratpad-cli")]
pub struct RatpadCli {
    /// Wallet agent endpoint (holds keys and signs on our behalf)
    #[arg(short, long, default_value = "http://127.0.0.1:8545", env = "RATPAD_AGENT")]
    pub agent: String,

    /// Enable verbose output
    #[arg(short, long, env = "RATPAD_VERBOSE")]
    pub verbose: bool,

    /// Output format (json, table)
    #[arg(short, long, default_value = "table", env = "RATPAD_FORMAT")]
    pub format: String,

    /// Configuration file path
    #[arg(short, long, env = "RATPAD_CONFIG")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: RatpadCommand,
}

/// RatPad commands
#[derive(Subcommand, Debug, Clone)]
pub enum RatpadCommand {
    /// Launch a token with locked liquidity
    Launch(LaunchArgs),

    /// Wallet operations
    Wallet(WalletArgs),

    /// Configuration management
    Config(ConfigArgs),

    /// Show version information
    Version(VersionArgs),
}

/// Token launch parameters.
///
/// Values stay raw strings here; constraint checking happens at submit
/// time so rejection reasons come from one place.
#[derive(Args, Debug, Clone)]
pub struct LaunchArgs {
    /// Token name
    #[arg(long)]
    pub name: String,

    /// Token symbol (e.g. RICKY)
    #[arg(long)]
    pub symbol: String,

    /// Total supply in whole tokens
    #[arg(long)]
    pub supply: String,

    /// Taker fee percent (max 5)
    #[arg(long)]
    pub fee: String,

    /// Token price in native units (e.g. 0.000001)
    #[arg(long)]
    pub price: String,

    /// LP lock duration: seconds, or one of 10d, 14d, 30d
    #[arg(long, default_value = "864000")]
    pub lp_lock: String,
}

/// Wallet operation commands
#[derive(Args, Debug, Clone)]
pub struct WalletArgs {
    #[command(subcommand)]
    pub action: WalletAction,
}

#[derive(Subcommand, Debug, Clone)]
pub enum WalletAction {
    /// Connect to the wallet agent and show the account
    Connect,
    /// Show the native balance of the connected account
    Balance,
}

/// Configuration commands
#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show the resolved configuration
    Show,
    /// Write a default config file
    Init {
        /// Overwrite an existing config
        #[arg(long)]
        force: bool,
    },
}

#[derive(Args, Debug, Clone)]
pub struct VersionArgs {}

/// Main CLI runner
pub async fn run_cli() -> Result<()> {
    let cmd = RatpadCli::command();
    let matches = cmd.get_matches();
    let mut cli = RatpadCli::from_arg_matches(&matches)?;

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    let config = crate::cli_config::load_config(cli.config.as_deref())?;
    let agent_source = matches
        .value_source("agent")
        .unwrap_or(ValueSource::DefaultValue);

    if let Some(defaults) = &config.defaults {
        if agent_source == ValueSource::DefaultValue {
            if let Some(agent) = &defaults.agent {
                cli.agent = agent.clone();
            }
        }
        if matches.value_source("format").unwrap_or(ValueSource::DefaultValue)
            == ValueSource::DefaultValue
        {
            if let Some(format) = &defaults.format {
                cli.format = format.clone();
            }
        }
    }

    let params = crate::cli_config::resolve_protocol(&config)?;
    crate::cli_config::set_protocol_params(params);

    match &cli.command {
        RatpadCommand::Launch(args) => commands::launch::handle_launch_command(args.clone(), &cli)
            .await
            .map_err(anyhow::Error::msg),
        RatpadCommand::Wallet(args) => commands::wallet::handle_wallet_command(args.clone(), &cli)
            .await
            .map_err(anyhow::Error::msg),
        RatpadCommand::Config(args) => commands::config::handle_config_command(args.clone(), &cli)
            .await
            .map_err(anyhow::Error::msg),
        RatpadCommand::Version(args) => commands::version::handle_version_command(args.clone())
            .await
            .map_err(anyhow::Error::msg),
    }
}

/// Format output based on CLI format preference
pub fn format_output(data: &Value, format: &str) -> Result<String> {
    match format {
        "json" => Ok(serde_json::to_string_pretty(data)?),
        "table" => {
            if let Some(obj) = data.as_object() {
                let mut result = String::new();
                for (key, value) in obj {
                    result.push_str(&format!("{:<20} {}\n", key, value));
                }
                Ok(result)
            } else if let Some(array) = data.as_array() {
                let mut result = String::new();
                for (i, item) in array.iter().enumerate() {
                    result.push_str(&format!("[{}] {}\n", i, item));
                }
                Ok(result)
            } else {
                Ok(data.to_string())
            }
        }
        _ => Err(anyhow::anyhow!("Unsupported output format: {}", format)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_output_json() {
        let data = json!({"status": "ok"});
        let out = format_output(&data, "json").unwrap();
        assert!(out.contains("\"status\""));
    }

    #[test]
    fn test_format_output_table() {
        let data = json!({"balance": "0.05"});
        let out = format_output(&data, "table").unwrap();
        assert!(out.contains("balance"));
        assert!(out.contains("0.05"));
    }

    #[test]
    fn test_format_output_unknown() {
        assert!(format_output(&json!({}), "yaml").is_err());
    }

    #[test]
    fn test_launch_args_parse() {
        let cli = RatpadCli::try_parse_from([
            "ratpad-cli", "launch", "--name", "Ricky", "--symbol", "RAT", "--supply",
            "10000000", "--fee", "5", "--price", "0.000001",
        ])
        .unwrap();
        match cli.command {
            RatpadCommand::Launch(args) => {
                assert_eq!(args.name, "Ricky");
                // lp-lock defaults to the 10-day preset
                assert_eq!(args.lp_lock, "864000");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_wallet_subcommands_parse() {
        let cli = RatpadCli::try_parse_from(["ratpad-cli", "wallet", "balance"]).unwrap();
        assert!(matches!(
            cli.command,
            RatpadCommand::Wallet(WalletArgs {
                action: WalletAction::Balance
            })
        ));
    }
}
