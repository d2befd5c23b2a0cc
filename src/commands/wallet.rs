//! Wallet commands
//!
//! Connect the wallet agent and inspect the funding precondition.

use crate::argument_parsing::{RatpadCli, WalletAction, WalletArgs};
use crate::cli_config::protocol_params;
use crate::client::AgentClient;
use crate::error::CliResult;
use crate::logic::units::format_native;
use crate::output::Output;
use crate::session::Session;
use crate::wallet::AgentWallet;
use crate::wallet::WalletProvider;

/// Handle wallet command
pub async fn handle_wallet_command(args: WalletArgs, cli: &RatpadCli) -> CliResult<()> {
    let output = crate::output::ConsoleOutput;
    handle_wallet_command_with_output(args, cli, &output).await
}

/// Handle wallet command with injected output (for testing)
pub async fn handle_wallet_command_with_output<O: Output>(
    args: WalletArgs,
    cli: &RatpadCli,
    output: &O,
) -> CliResult<()> {
    let params = protocol_params();
    let provider = AgentWallet::new(AgentClient::new(&cli.agent));
    let session = Session::connect(provider, params.contract_address.clone()).await?;

    match args.action {
        WalletAction::Connect => {
            output.success("Wallet connected")?;
            output.info(&format!("Account: {}", session.account().short()))?;
            Ok(())
        }
        WalletAction::Balance => {
            let balance = session.provider().get_balance(session.account()).await?;
            output.info(&format!("Account: {}", session.account().short()))?;
            output.print(&format!("Balance: {} native", format_native(balance)))?;
            if balance < params.min_funding_wei {
                output.warning(&format!(
                    "Below the {} native minimum needed to launch",
                    format_native(params.min_funding_wei)
                ))?;
            }
            Ok(())
        }
    }
}
