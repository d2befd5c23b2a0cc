//! Configuration commands

use crate::argument_parsing::{format_output, ConfigAction, ConfigArgs, RatpadCli};
use crate::cli_config::{self, CliConfig, CliDefaults, ProtocolOverrides, ProtocolParams};
use crate::error::{CliError, CliResult};
use crate::logic::units::format_native;
use crate::output::Output;
use serde_json::json;

/// A config file populated with the compiled-in defaults, so users edit
/// values instead of guessing key names.
fn starter_config(agent: &str) -> CliConfig {
    let params = ProtocolParams::default();
    CliConfig {
        defaults: Some(CliDefaults {
            agent: Some(agent.to_string()),
            format: None,
        }),
        protocol: Some(ProtocolOverrides {
            contract_address: Some(params.contract_address),
            min_funding: Some(format_native(params.min_funding_wei)),
            max_fee_percent: Some(params.max_fee_percent),
            min_lock_seconds: Some(params.min_lock_seconds),
            deadline_seconds: Some(params.deadline_seconds),
        }),
    }
}

/// Handle config command
pub async fn handle_config_command(args: ConfigArgs, cli: &RatpadCli) -> CliResult<()> {
    let output = crate::output::ConsoleOutput;
    handle_config_command_with_output(args, cli, &output).await
}

/// Handle config command with injected output (for testing)
pub async fn handle_config_command_with_output<O: Output>(
    args: ConfigArgs,
    cli: &RatpadCli,
    output: &O,
) -> CliResult<()> {
    match args.action {
        ConfigAction::Show => {
            let config = cli_config::load_config(cli.config.as_deref())?;
            let params = cli_config::resolve_protocol(&config)?;
            let rendered = json!({
                "config_path": cli_config::config_path(cli.config.as_deref()).display().to_string(),
                "agent": cli.agent,
                "contract_address": params.contract_address,
                "min_funding": format_native(params.min_funding_wei),
                "max_fee_percent": params.max_fee_percent,
                "min_lock_seconds": params.min_lock_seconds,
                "deadline_seconds": params.deadline_seconds,
            });
            let formatted = format_output(&rendered, &cli.format)?;
            output.print(&formatted)?;
            Ok(())
        }
        ConfigAction::Init { force } => {
            let path = cli_config::config_path(cli.config.as_deref());
            if path.exists() && !force {
                return Err(CliError::ConfigError(format!(
                    "Config already exists at {} (use --force to overwrite)",
                    path.display()
                )));
            }
            cli_config::save_config(cli.config.as_deref(), &starter_config(&cli.agent))?;
            output.success(&format!("Wrote default config to {}", path.display()))?;
            Ok(())
        }
    }
}
