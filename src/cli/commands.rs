//! Command execution: parse, answer meta flags, dispatch

use tracing::{debug, instrument};

use crate::application::{DispatchOutcome, Dispatcher};
use crate::cli::args::Cli;
use crate::cli::error::CliResult;
use crate::cli::output;
use crate::cli::parse::parse_args;
use crate::cli::usage::{program_name, render_usage, render_version};
use crate::config::Settings;
use crate::infrastructure::di::ServiceContainer;

/// Hint printed after every error.
pub fn help_hint() -> String {
    format!("see: {} -help", program_name())
}

/// Run one invocation from raw arguments (program name excluded).
#[instrument]
pub fn execute_command(raw: &[String]) -> CliResult<()> {
    let cli = parse_args(raw)?;

    if cli.help {
        output::info(&render_usage(&program_name()));
        return Ok(());
    }
    if cli.version {
        output::info(&render_version(&program_name()));
        return Ok(());
    }

    // usage errors are reported ahead of configuration errors
    Dispatcher::resolve(&cli.args, cli.option_values())?;

    let settings = Settings::load()?;
    debug!(?settings, "loaded settings");
    let container = ServiceContainer::new(&settings);

    let outcome = dispatch(&cli, &container)?;
    output::success(&format!("{}: {}", outcome.subcommand, outcome.output.display()));
    Ok(())
}

/// Validate and run a parsed command line against the container's services.
pub fn dispatch(cli: &Cli, container: &ServiceContainer) -> CliResult<DispatchOutcome> {
    let outcome = container
        .dispatcher()
        .dispatch(&cli.args, cli.option_values())?;
    Ok(outcome)
}
