//! Exclusion test for archive candidates.

use std::path::{Component, Path};

use crate::config::ExclusionRules;

impl ExclusionRules {
    /// Returns `true` if a root-relative path must be left out of the archive.
    ///
    /// A path is excluded when any component is an excluded directory name,
    /// when its file name is an excluded file name, or when its lower-cased
    /// extension (with leading dot) is an excluded extension.
    #[must_use]
    pub fn should_exclude(&self, path: &Path) -> bool {
        let in_excluded_dir = path.components().any(|component| match component {
            Component::Normal(part) => part.to_str().is_some_and(|s| self.dirs.contains(s)),
            _ => false,
        });
        if in_excluded_dir {
            return true;
        }

        if path.file_name().and_then(|n| n.to_str()).is_some_and(|n| self.files.contains(n)) {
            return true;
        }

        dotted_extension(path).is_some_and(|ext| self.extensions.contains(&ext))
    }
}

/// Lower-cased extension with its leading dot; dot-files have none.
fn dotted_extension(path: &Path) -> Option<String> {
    path.extension().map(|ext| format!(".{}", ext.to_string_lossy().to_lowercase()))
}
