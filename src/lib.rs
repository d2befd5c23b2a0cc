//! RatPad CLI Library
//!
//! Client for launching tokens with locked liquidity through the RatPad
//! contract: validates launch parameters, checks the wallet funding
//! precondition, submits the funded transaction via a wallet agent, and
//! reports the outcome.
//!
//! ## Architecture
//!
//! This crate follows the **Functional Core, Imperative Shell** (FCIS)
//! architecture pattern:
//!
//! - **Functional Core** (`logic/` module): pure validation, unit
//!   conversion, and error normalization
//! - **Imperative Shell** (`commands/` module): wallet I/O, submission,
//!   confirmation wait, and command orchestration
//! - **Error Handling** (`error` module): structured, domain-specific
//!   error types
//! - **Output Abstraction** (`output` module): testable printing
//!   interface

pub mod argument_parsing;
pub mod cli_config;
pub mod client;
pub mod commands;
pub mod error;
pub mod logic;
pub mod output;
pub mod session;
pub mod wallet;

// Re-export main types for public use
pub use argument_parsing::{format_output, run_cli, RatpadCli, RatpadCommand};
pub use commands::launch::{submit_launch, LaunchOutcome, LaunchPhase};
pub use error::{CliError, CliResult};
pub use logic::form::LaunchForm;
pub use output::Output;
pub use session::Session;
pub use wallet::WalletProvider;

/// RatPad CLI version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
