//! Core library for the `validate-ssot` and `create-upload-zip` tools.

pub mod adapters;
pub mod archive;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod ports;
pub mod telemetry;
pub mod validate;

use std::ffi::OsString;
use std::process::ExitCode;

use clap::Parser;

/// Run the doc validator with the provided arguments.
///
/// Returns the process exit status: `0` passed, `1` violations found,
/// `2` source-of-truth document missing.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or the working
/// directory cannot be read.
pub fn run_validate<I, T>(args: I) -> Result<ExitCode, String>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match cli::ValidateCli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) if !err.use_stderr() => {
            print!("{err}");
            return Ok(ExitCode::SUCCESS);
        }
        Err(err) => return Err(err.to_string()),
    };
    let outcome = commands::validate::run(&cli)?;
    Ok(ExitCode::from(outcome.exit_code()))
}

/// Run the archiver with the provided arguments.
///
/// # Errors
///
/// Returns an error when argument parsing fails or archiving fails.
pub fn run_pack<I, T>(args: I) -> anyhow::Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match cli::PackCli::try_parse_from(args) {
        Ok(_) => commands::pack::run(),
        Err(err) if !err.use_stderr() => {
            print!("{err}");
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}
