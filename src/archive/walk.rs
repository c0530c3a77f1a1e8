//! Directory traversal that builds the archive entry list.

use std::fs;
use std::path::{Component, Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use crate::config::ExclusionRules;

/// One file to be stored in the archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    /// Absolute path of the file on disk.
    pub source: PathBuf,
    /// `/`-separated path of the entry inside the archive.
    pub archive_path: String,
}

/// Walks `root` and returns every regular file that `rules` does not exclude.
///
/// Excluded directories are not descended into. Entries are sorted by
/// archive path.
///
/// # Errors
///
/// Returns an error if a directory under `root` cannot be read.
pub fn collect_entries(root: &Path, rules: &ExclusionRules) -> Result<Vec<ArchiveEntry>> {
    let mut entries = Vec::new();
    walk_dir(root, root, rules, &mut entries)?;
    entries.sort_by(|a, b| a.archive_path.cmp(&b.archive_path));
    Ok(entries)
}

fn walk_dir(
    root: &Path,
    dir: &Path,
    rules: &ExclusionRules,
    entries: &mut Vec<ArchiveEntry>,
) -> Result<()> {
    let read_dir =
        fs::read_dir(dir).with_context(|| format!("Failed to read directory {}", dir.display()))?;

    for entry in read_dir {
        let entry =
            entry.with_context(|| format!("Failed to read entry in {}", dir.display()))?;
        let path = entry.path();
        let file_type = entry
            .file_type()
            .with_context(|| format!("Failed to stat {}", path.display()))?;

        if file_type.is_dir() {
            let name = entry.file_name();
            if name.to_str().is_some_and(|n| rules.dirs.contains(n)) {
                debug!(dir = %path.display(), "skipping excluded directory");
                continue;
            }
            walk_dir(root, &path, rules, entries)?;
        } else if path.is_file() {
            let relative = path
                .strip_prefix(root)
                .with_context(|| format!("{} is outside {}", path.display(), root.display()))?;
            if rules.should_exclude(relative) {
                debug!(file = %relative.display(), "excluded");
                continue;
            }
            entries.push(ArchiveEntry { archive_path: archive_name(relative), source: path });
        }
    }
    Ok(())
}

/// Joins the components of a relative path with `/`.
fn archive_name(relative: &Path) -> String {
    relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
