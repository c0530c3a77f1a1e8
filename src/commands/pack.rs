//! `create-upload-zip` command.

use std::path::Path;

use anyhow::{Context, Result};

use crate::archive::{self, ArchiveSummary, PackProgress};
use crate::config::{self, ArchiveConfig};
use crate::context::ServiceContext;

const RULE: &str = "========================================";

/// Execute the `create-upload-zip` command.
///
/// Archives the directory named by `UPLOAD_ZIP_ROOT`, or the current
/// directory when it is unset.
///
/// # Errors
///
/// Returns an error if the root cannot be determined or archiving fails.
pub fn run() -> Result<()> {
    let root = config::archive_root().context("Failed to determine project root")?;
    let ctx = ServiceContext::live();
    run_in(&ctx, &root, &ArchiveConfig::default())?;
    Ok(())
}

/// Archive `root` with `config`, printing progress and the summary.
///
/// # Errors
///
/// Returns an error if archiving fails.
pub fn run_in(ctx: &ServiceContext, root: &Path, config: &ArchiveConfig) -> Result<ArchiveSummary> {
    println!("{RULE}");
    println!("Upload ZIP creation");
    println!("{RULE}");
    println!();

    let summary = archive::create_archive(ctx, root, config, |step| match step {
        PackProgress::CreatingOutputDir => println!("Creating {} folder...", config.output_folder),
        PackProgress::Collecting => println!("Collecting files..."),
    })?;

    println!();
    println!("{RULE}");
    println!("Done!");
    println!("{RULE}");
    println!("{}", archive::format_summary(&summary, &config.rules));
    println!();
    Ok(summary)
}
