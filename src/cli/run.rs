//! CLI entry point and dispatch logic
//!
//! This module owns the `run()` function which:
//! - Parses CLI arguments
//! - Builds CliArgs and discovers Config
//! - Dispatches to command handlers
//! - Handles all error output

use clap::Parser;

use powerhell_config::{CliArgs, Config, ConfigError};
use powerhell_encoding::EncodingError;
use powerhell_fault::PowerHellError;
use powerhell_utils::exit_codes::ExitCode;
use powerhell_utils::logging::init_tracing;

use super::args::{Cli, Commands};
use super::commands::{self, CommandError};

/// Main CLI execution function.
///
/// Handles ALL output including errors and returns `Err(ExitCode)` on failure.
/// main.rs only calls `std::process::exit(code.as_i32())`.
///
/// # Errors
///
/// Returns the exit code matching the failure.
pub fn run() -> Result<(), ExitCode> {
    let cli = Cli::parse();

    let cli_args = CliArgs {
        config_path: cli.config.clone(),
        argument_style: cli.style,
        interpreter: cli.interpreter.clone(),
        invocation_form: cli.form,
        timeout_secs: cli.timeout,
        verbose: cli.verbose.then_some(true),
    };

    let config = match Config::discover(&cli_args) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {err:#}");
            return Err(ExitCode::CLI_ARGS);
        }
    };

    // A subscriber may already be installed when embedded; that is fine.
    let _ = init_tracing(config.verbose());

    let result = match cli.command {
        Commands::Encode {
            command,
            args,
            encoded,
            list,
            json,
        } => commands::execute_encode_command(&config, &command, &args, encoded, list, json),
        Commands::Decode { payload } => commands::execute_decode_command(&payload),
        Commands::Run {
            command,
            args,
            power_shell,
        } => commands::execute_run_command(&config, &command, &args, power_shell),
        Commands::Config { json } => commands::execute_config_command(&config, json),
    };

    result.map_err(|err| {
        report_error(&err);
        exit_code_for(&err)
    })
}

fn report_error(err: &anyhow::Error) {
    eprintln!("Error: {err:#}");
    if let Some(domain) = err.downcast_ref::<PowerHellError>() {
        eprintln!("Suggestion: {}", domain.suggestion());
    }
}

/// Map an error from a command handler to its exit code.
#[must_use]
pub fn exit_code_for(err: &anyhow::Error) -> ExitCode {
    if let Some(domain) = err.downcast_ref::<PowerHellError>() {
        return ExitCode::from(domain);
    }
    if let Some(command_error) = err.downcast_ref::<CommandError>() {
        return match command_error {
            CommandError::Usage(_) => ExitCode::CLI_ARGS,
            CommandError::RemoteExit { .. } => ExitCode::REMOTE_FAILURE,
        };
    }
    if err.downcast_ref::<EncodingError>().is_some() || err.downcast_ref::<ConfigError>().is_some()
    {
        return ExitCode::CLI_ARGS;
    }
    ExitCode::INTERNAL
}
