//! Compiled-in configuration for both tools.
//!
//! Neither tool reads a configuration file. The values here are the
//! defaults the binaries run with; tests build their own instances.

use std::collections::BTreeSet;
use std::path::PathBuf;

/// Project name used as the archive file name prefix.
pub const PROJECT_NAME: &str = "rope-optimus-simulator";

/// Output folder (relative to the archive root) that receives archives.
pub const UPLOAD_FOLDER: &str = "upload";

/// Environment variable overriding the archiver's root directory.
pub const ROOT_ENV_VAR: &str = "UPLOAD_ZIP_ROOT";

const EXCLUDE_DIRS: &[&str] =
    &["node_modules", ".git", "dist", "temp_for_zip", UPLOAD_FOLDER, "__pycache__", ".venv", "venv"];

const EXCLUDE_FILES: &[&str] = &[".DS_Store", "Thumbs.db"];

const EXCLUDE_EXTENSIONS: &[&str] = &[".log", ".zip", ".tmp"];

const REQUIRED_FILES: &[&str] = &["CLAUDE.md", "SSOT.md", "TASKS.md", "progress.md", "plan.md"];

/// Names matched by the archiver's exclusion test.
///
/// Extensions are stored lower-cased with their leading dot (`.log`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionRules {
    /// Directory names excluded wherever they appear in a path.
    pub dirs: BTreeSet<String>,
    /// Exact file names.
    pub files: BTreeSet<String>,
    /// Lower-cased extensions including the leading dot.
    pub extensions: BTreeSet<String>,
}

impl ExclusionRules {
    /// Builds a rule set from string slices.
    #[must_use]
    pub fn new(dirs: &[&str], files: &[&str], extensions: &[&str]) -> Self {
        Self {
            dirs: dirs.iter().map(|s| (*s).to_string()).collect(),
            files: files.iter().map(|s| (*s).to_string()).collect(),
            extensions: extensions.iter().map(|s| s.to_lowercase()).collect(),
        }
    }
}

impl Default for ExclusionRules {
    fn default() -> Self {
        Self::new(EXCLUDE_DIRS, EXCLUDE_FILES, EXCLUDE_EXTENSIONS)
    }
}

/// Settings for one archiver run.
#[derive(Debug, Clone)]
pub struct ArchiveConfig {
    /// Prefix of the archive file name.
    pub project_name: String,
    /// Folder under the root that receives the archive.
    pub output_folder: String,
    /// Exclusion rules applied to every root-relative path.
    pub rules: ExclusionRules,
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self {
            project_name: PROJECT_NAME.to_string(),
            output_folder: UPLOAD_FOLDER.to_string(),
            rules: ExclusionRules::default(),
        }
    }
}

/// Resolves the archiver root: `UPLOAD_ZIP_ROOT` if set, else the current directory.
///
/// # Errors
///
/// Returns an error if the current directory cannot be determined.
pub fn archive_root() -> std::io::Result<PathBuf> {
    match std::env::var_os(ROOT_ENV_VAR) {
        Some(root) => Ok(PathBuf::from(root)),
        None => std::env::current_dir(),
    }
}

/// File names the doc validator looks for under its root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocLayout {
    /// Source-of-truth document whose links are checked.
    pub source_of_truth: String,
    /// Plan document whose first line is a pointer.
    pub plan: String,
    /// Files that must exist directly under the root.
    pub required: Vec<String>,
}

impl Default for DocLayout {
    fn default() -> Self {
        Self {
            source_of_truth: "SSOT.md".to_string(),
            plan: "plan.md".to_string(),
            required: REQUIRED_FILES.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}
