//! CLI argument definitions.

use clap::Parser;

/// Arguments for `validate-ssot`.
#[derive(Debug, Parser)]
#[command(
    name = "validate-ssot",
    version,
    about = "Check SSOT.md links, the plan.md pointer, and required docs"
)]
pub struct ValidateCli {
    /// Print each check as it starts and every link that resolves.
    #[arg(short, long)]
    pub verbose: bool,
    /// Print the result as a JSON object instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `create-upload-zip`. The tool takes no options.
#[derive(Debug, Parser)]
#[command(
    name = "create-upload-zip",
    version,
    about = "Package the project into upload/<project>_<timestamp>.zip"
)]
pub struct PackCli {}
