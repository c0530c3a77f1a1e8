//! Project packaging into a timestamped ZIP archive.
//!
//! Responsibilities:
//! - Decide which root-relative paths are left out (`rules`).
//! - Walk the tree and build the entry list (`walk`).
//! - Write the entries into a compressed archive (`writer`).

pub mod rules;
pub mod walk;
pub mod writer;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use tracing::info;

use crate::config::{ArchiveConfig, ExclusionRules};
use crate::context::ServiceContext;

pub use walk::{collect_entries, ArchiveEntry};
pub use writer::write_archive;

const BYTES_PER_MIB: f64 = 1024.0 * 1024.0;

/// Steps reported while an archive is being built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackProgress {
    /// The output folder did not exist and is being created.
    CreatingOutputDir,
    /// The tree walk is starting.
    Collecting,
}

/// Outcome of a successful archiver run.
#[derive(Debug, Clone, PartialEq)]
pub struct ArchiveSummary {
    /// Path of the written archive.
    pub path: PathBuf,
    /// Number of files stored.
    pub file_count: usize,
    /// Archive size on disk.
    pub size_bytes: u64,
}

impl ArchiveSummary {
    /// Archive size in MiB.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn size_mib(&self) -> f64 {
        self.size_bytes as f64 / BYTES_PER_MIB
    }
}

/// Builds the archive file name `{project}_{YYYYMMDD_HHMMSS}.zip`.
#[must_use]
pub fn archive_file_name(project_name: &str, at: &DateTime<Local>) -> String {
    format!("{project_name}_{}.zip", at.format("%Y%m%d_%H%M%S"))
}

/// Packages every non-excluded file under `root` into a new archive.
///
/// The archive goes to `<root>/<output_folder>/`, which is created when
/// missing. Source files are never modified.
///
/// # Errors
///
/// Returns an error if the output folder cannot be created, the tree
/// cannot be read, or the archive cannot be written.
pub fn create_archive(
    ctx: &ServiceContext,
    root: &Path,
    config: &ArchiveConfig,
    mut on_progress: impl FnMut(PackProgress),
) -> Result<ArchiveSummary> {
    let output_dir = root.join(&config.output_folder);
    if !output_dir.exists() {
        on_progress(PackProgress::CreatingOutputDir);
        fs::create_dir_all(&output_dir).with_context(|| {
            format!("Failed to create output directory {}", output_dir.display())
        })?;
    }
    let path = output_dir.join(archive_file_name(&config.project_name, &ctx.clock.now()));

    on_progress(PackProgress::Collecting);
    let entries = collect_entries(root, &config.rules)?;
    write_archive(&path, &entries)?;

    let size_bytes = fs::metadata(&path)
        .with_context(|| format!("Failed to stat archive {}", path.display()))?
        .len();
    info!(archive = %path.display(), files = entries.len(), size_bytes, "archive written");

    Ok(ArchiveSummary { path, file_count: entries.len(), size_bytes })
}

/// Formats the closing summary: output path, counts, size, and exclusions.
#[must_use]
pub fn format_summary(summary: &ArchiveSummary, rules: &ExclusionRules) -> String {
    let join = |set: &std::collections::BTreeSet<String>| {
        set.iter().map(String::as_str).collect::<Vec<_>>().join(", ")
    };
    [
        format!("Output file: {}", summary.path.display()),
        format!("File count: {}", summary.file_count),
        format!("Size: {:.2} MB", summary.size_mib()),
        String::new(),
        "Excluded items:".to_string(),
        format!("  - Directories: {}", join(&rules.dirs)),
        format!("  - Files: {}", join(&rules.files)),
        format!("  - Extensions: {}", join(&rules.extensions)),
    ]
    .join("\n")
}
