//! ZIP output.

use std::fs::{self, File};
use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;
use zip::{write::FileOptions, CompressionMethod, ZipWriter};

use super::walk::ArchiveEntry;

/// Entries at or above this size need ZIP64 headers.
const LARGE_FILE_THRESHOLD: u64 = 0xFFFF_FFFF;

/// Writes `entries` into a Deflate-compressed ZIP at `output`.
///
/// The file is written in place; an interrupted write leaves a partial
/// archive behind.
///
/// # Errors
///
/// Returns an error if the archive cannot be created or a source file
/// cannot be read.
pub fn write_archive(output: &Path, entries: &[ArchiveEntry]) -> Result<()> {
    let file = File::create(output)
        .with_context(|| format!("Failed to write archive file {}", output.display()))?;
    let mut zip = ZipWriter::new(file);
    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(CompressionMethod::Deflated);

    for entry in entries {
        let size = fs::metadata(&entry.source)
            .with_context(|| format!("Failed to stat {}", entry.source.display()))?
            .len();

        zip.start_file(entry.archive_path.as_str(), options.large_file(size >= LARGE_FILE_THRESHOLD))
            .with_context(|| format!("Failed to add file {} to archive", entry.archive_path))?;

        let mut reader = File::open(&entry.source)
            .with_context(|| format!("Failed to read {}", entry.source.display()))?;
        io::copy(&mut reader, &mut zip)
            .with_context(|| format!("Failed to write {} into archive", entry.archive_path))?;
        debug!(entry = %entry.archive_path, size, "added");
    }

    zip.finish().context("Failed to finalize archive")?;
    Ok(())
}
