//! Launch command and orchestrator
//!
//! Architecture: Functional Core, Imperative Shell (FCIS)
//!
//! - **Pure Logic**: parameter validation and derivation (`logic::launch`)
//! - **Imperative Shell**: balance query, submission, confirmation wait
//! - **Error Handling**: domain-specific CliError types
//! - **Testability**: Output trait + WalletProvider trait injection
//!
//! One attempt walks the phases Idle → Validating → CheckingBalance →
//! Submitting → AwaitingConfirmation → Succeeded | Failed. Each attempt
//! reports exactly one terminal status and never retries; a new submit
//! starts fresh from Idle.

use crate::argument_parsing::{LaunchArgs, RatpadCli};
use crate::cli_config::{protocol_params, ProtocolParams};
use crate::client::AgentClient;
use crate::error::{CliError, CliResult};
use crate::logic::form::{resolve_lock_input, LaunchForm};
use crate::logic::launch::{build_launch_request, deadline_timestamp};
use crate::logic::status::STATUS_SUCCESS;
use crate::logic::units::format_native;
use crate::output::Output;
use crate::session::Session;
use crate::wallet::{AgentWallet, LaunchCall, WalletProvider};
use std::time::{SystemTime, UNIX_EPOCH};

// ============================================================================
// Orchestrator state machine
// ============================================================================

/// Phases of one launch attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchPhase {
    Idle,
    Validating,
    CheckingBalance,
    Submitting,
    AwaitingConfirmation,
    Succeeded,
    Failed,
}

/// Terminal result of one launch attempt.
///
/// `status` is the single user-visible line for the attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchOutcome {
    pub phase: LaunchPhase,
    pub status: String,
    pub tx_hash: Option<String>,
}

impl LaunchOutcome {
    fn failed(status: String) -> Self {
        LaunchOutcome {
            phase: LaunchPhase::Failed,
            status,
            tx_hash: None,
        }
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

/// Run one launch attempt against a connected session.
///
/// Every failure path produces a Failed outcome with a specific status;
/// this function never retries and never panics on provider errors.
pub async fn submit_launch<P: WalletProvider>(
    session: Option<&Session<P>>,
    form: &LaunchForm,
    params: &ProtocolParams,
) -> LaunchOutcome {
    let Some(session) = session else {
        return LaunchOutcome::failed(CliError::NotConnected.to_string());
    };

    if !session.begin_attempt() {
        return LaunchOutcome::failed("A launch attempt is already in progress".to_string());
    }
    tracing::debug!(from = ?LaunchPhase::Idle, "submit action accepted");
    let outcome = run_attempt(session, form, params).await;
    session.end_attempt();
    outcome
}

/// Balance Checker: fetch the account's native balance and compare it
/// against the minimum funding requirement. One external call, no retry.
async fn check_funding<P: WalletProvider>(
    session: &Session<P>,
    min_funding_wei: u128,
) -> CliResult<()> {
    let balance = session.provider().get_balance(session.account()).await?;
    if balance < min_funding_wei {
        return Err(CliError::InsufficientFunds {
            required: format_native(min_funding_wei),
            available: format_native(balance),
        });
    }
    Ok(())
}

async fn run_attempt<P: WalletProvider>(
    session: &Session<P>,
    form: &LaunchForm,
    params: &ProtocolParams,
) -> LaunchOutcome {
    let mut phase = LaunchPhase::Validating;
    tracing::debug!(?phase, "launch attempt started");
    let request = match build_launch_request(form, params) {
        Ok(request) => request,
        Err(e) => return LaunchOutcome::failed(e.to_string()),
    };

    phase = LaunchPhase::CheckingBalance;
    tracing::debug!(?phase, account = %session.account());
    if let Err(e) = check_funding(session, params.min_funding_wei).await {
        return LaunchOutcome::failed(e.to_string());
    }

    let deadline = deadline_timestamp(unix_now(), params.deadline_seconds);
    let call = LaunchCall {
        name: request.name.clone(),
        symbol: request.symbol.clone(),
        total_supply: request.total_supply,
        min_tokens: request.min_tokens_for_liquidity,
        reserved0: 0,
        reserved1: 0,
        deadline,
        lock_seconds: request.lp_lock_seconds,
        fee_percent: request.fee_percent,
    };

    phase = LaunchPhase::Submitting;
    tracing::debug!(?phase, contract = %session.contract_address(), deadline);
    let pending = match session
        .provider()
        .sign_and_send(session.contract_address(), &call, params.min_funding_wei)
        .await
    {
        Ok(pending) => pending,
        Err(e) => return LaunchOutcome::failed(e.to_string()),
    };

    phase = LaunchPhase::AwaitingConfirmation;
    tracing::debug!(?phase, tx_hash = %pending.tx_hash);
    match session.provider().await_confirmation(&pending).await {
        Ok(receipt) => LaunchOutcome {
            phase: LaunchPhase::Succeeded,
            status: STATUS_SUCCESS.to_string(),
            tx_hash: Some(receipt.tx_hash),
        },
        Err(e) => LaunchOutcome::failed(e.to_string()),
    }
}

// ============================================================================
// IMPERATIVE SHELL - CLI entry points
// ============================================================================

/// Handle launch command
pub async fn handle_launch_command(args: LaunchArgs, cli: &RatpadCli) -> CliResult<()> {
    let output = crate::output::ConsoleOutput;
    handle_launch_command_with_output(args, cli, &output).await
}

/// Handle launch command with injected output (for testing)
pub async fn handle_launch_command_with_output<O: Output>(
    args: LaunchArgs,
    cli: &RatpadCli,
    output: &O,
) -> CliResult<()> {
    let params = protocol_params();

    let mut form = LaunchForm::default();
    form.update_field("name", &args.name)?;
    form.update_field("symbol", &args.symbol)?;
    form.update_field("supply", &args.supply)?;
    form.update_field("fee", &args.fee)?;
    form.update_field("price_per_token", &args.price)?;
    form.update_field("lp_lock", &resolve_lock_input(&args.lp_lock))?;

    output.info(&format!("Launching token: {} ({})", args.name, args.symbol))?;

    let provider = AgentWallet::new(AgentClient::new(&cli.agent));
    let session = Session::connect(provider, params.contract_address.clone()).await?;
    output.info(&format!("Connected account: {}", session.account().short()))?;

    let outcome = submit_launch(Some(&session), &form, &params).await;
    report_outcome(&outcome, output)
}

fn report_outcome<O: Output>(outcome: &LaunchOutcome, output: &O) -> CliResult<()> {
    match outcome.phase {
        LaunchPhase::Succeeded => {
            output.success(&outcome.status)?;
            if let Some(tx_hash) = &outcome.tx_hash {
                output.info(&format!("Transaction: {}", tx_hash))?;
            }
        }
        _ => output.error(&outcome.status)?,
    }
    Ok(())
}
