//! Version command

use crate::argument_parsing::VersionArgs;
use crate::error::CliResult;
use crate::output::Output;

pub async fn handle_version_command(_args: VersionArgs) -> CliResult<()> {
    let output = crate::output::ConsoleOutput;
    output.print(&format!(
        "{} {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    ))
}
