//! RatPad Command-Line Interface
//!
//! Entry point for the ratpad-cli binary. Parses command-line arguments
//! and delegates to the appropriate command handler.

use ratpad_cli::run_cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    run_cli().await
}
