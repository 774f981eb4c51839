//! Comic page panel partitioning from the command line.
//!
//! Cuts in, panels out.

use anyhow::Result;
use panelcut::core;

/// Run the application with the given CLI arguments.
fn run_app(cli_args: core::cli::CliArgs) -> Result<()> {
    core::run_app(cli_args)
}

fn main() {
    let cli_args = core::platform::get_cli_args();
    if let Err(error) = run_app(cli_args) {
        core::platform::handle_error(error);
    }
}
