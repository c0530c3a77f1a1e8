//! Documentation consistency checks.
//!
//! Three independent checks run against a root directory: required files,
//! local links in the source-of-truth document, and the plan pointer.
//! Each returns a list of [`Violation`]s; [`validate`] runs them in order
//! and collects the results into a [`ValidationReport`].

pub mod links;
pub mod pointer;
pub mod required;

use std::fmt;
use std::path::{Component, Path, PathBuf};

use serde::Serialize;
use thiserror::Error;
use tracing::info;

use crate::config::DocLayout;
use crate::context::ServiceContext;

/// Which check produced a violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckKind {
    /// Required files exist under the root.
    RequiredFiles,
    /// Local links in the source-of-truth document resolve.
    Links,
    /// The plan document's first line points at an existing file.
    PlanPointer,
}

/// A single documentation problem found by one of the checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// A required file is absent from the root.
    MissingRequiredFile {
        /// File name that was expected.
        name: String,
    },
    /// A local link target does not exist relative to its document.
    BrokenLink {
        /// Document containing the link.
        document: String,
        /// Link target with any anchor removed.
        target: String,
    },
    /// A document a check needed to read does not exist.
    DocumentMissing {
        /// Check that needed the document.
        check: CheckKind,
        /// Missing document name.
        document: String,
    },
    /// A document exists but could not be read as text.
    Unreadable {
        /// Check that needed the document.
        check: CheckKind,
        /// Document name.
        document: String,
        /// Underlying read error.
        cause: String,
    },
    /// The plan document has no non-blank content.
    PlanEmpty {
        /// Plan document name.
        document: String,
    },
    /// The plan pointer line is a Markdown heading/comment.
    PointerIsComment {
        /// Plan document name.
        document: String,
    },
    /// The plan pointer does not resolve to an existing file.
    PointerUnresolved {
        /// Plan document name.
        document: String,
        /// Pointer text as written.
        pointer: String,
    },
}

impl Violation {
    /// Returns the check that produced this violation.
    #[must_use]
    pub fn check(&self) -> CheckKind {
        match self {
            Self::MissingRequiredFile { .. } => CheckKind::RequiredFiles,
            Self::BrokenLink { .. } => CheckKind::Links,
            Self::DocumentMissing { check, .. } | Self::Unreadable { check, .. } => *check,
            Self::PlanEmpty { .. }
            | Self::PointerIsComment { .. }
            | Self::PointerUnresolved { .. } => CheckKind::PlanPointer,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingRequiredFile { name } => write!(f, "Required file missing: {name}"),
            Self::BrokenLink { document, target } => {
                write!(f, "Broken link in {document}: {target}")
            }
            Self::DocumentMissing { document, .. } => write!(f, "{document} not found"),
            Self::Unreadable { document, cause, .. } => {
                write!(f, "Failed to read {document}: {cause}")
            }
            Self::PlanEmpty { document } => write!(f, "{document} is empty"),
            Self::PointerIsComment { document } => {
                write!(f, "{document} first line should be a file path, not a comment")
            }
            Self::PointerUnresolved { document, pointer } => {
                write!(f, "{document} points to non-existent file: {pointer}")
            }
        }
    }
}

/// Ordered, append-only list of violations from one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Violations in check order: required files, links, plan pointer.
    pub violations: Vec<Violation>,
}

impl ValidationReport {
    /// Returns `true` if no check found a problem.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }

    /// Appends the violations of one check.
    pub fn extend(&mut self, violations: impl IntoIterator<Item = Violation>) {
        self.violations.extend(violations);
    }

    /// Returns violations produced by the given check.
    #[must_use]
    pub fn by_check(&self, check: CheckKind) -> Vec<&Violation> {
        self.violations.iter().filter(|v| v.check() == check).collect()
    }
}

/// Failure that prevents the checks from running at all.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidateError {
    /// The source-of-truth document is not under the root.
    #[error("{name} not found in current directory")]
    SourceOfTruthMissing {
        /// Expected document name.
        name: String,
    },
}

/// Progress notifications emitted while the checks run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress<'a> {
    /// A check is about to start.
    Checking(CheckKind),
    /// A local link resolved to an existing file.
    LinkResolved(&'a str),
}

/// Runs all checks against `root` in order and collects their violations.
///
/// `on_progress` is told when each check starts and about every link that
/// resolves; it cannot affect the result.
///
/// # Errors
///
/// Returns [`ValidateError::SourceOfTruthMissing`] when the source-of-truth
/// document is absent. No check runs in that case.
pub fn validate(
    ctx: &ServiceContext,
    root: &Path,
    layout: &DocLayout,
    mut on_progress: impl FnMut(Progress<'_>),
) -> Result<ValidationReport, ValidateError> {
    let source_of_truth = root.join(&layout.source_of_truth);
    if !ctx.fs.exists(&source_of_truth) {
        return Err(ValidateError::SourceOfTruthMissing { name: layout.source_of_truth.clone() });
    }

    let mut report = ValidationReport::default();

    on_progress(Progress::Checking(CheckKind::RequiredFiles));
    report.extend(required::check_required_files(ctx, root, &layout.required));

    on_progress(Progress::Checking(CheckKind::Links));
    report.extend(links::check_links(ctx, &source_of_truth, |target| {
        on_progress(Progress::LinkResolved(target));
    }));

    on_progress(Progress::Checking(CheckKind::PlanPointer));
    report.extend(pointer::check_plan_pointer(ctx, &root.join(&layout.plan), root));

    info!(root = %root.display(), violations = report.violations.len(), "validation finished");
    Ok(report)
}

/// Formats a failed report as the banner and bullet list printed to stderr.
#[must_use]
pub fn format_failure(report: &ValidationReport) -> String {
    let mut lines = vec![String::new(), "✗ SSOT VALIDATION FAILED".to_string()];
    for violation in &report.violations {
        lines.push(format!("  - {violation}"));
    }
    lines.join("\n")
}

/// Name used for a document in violation messages.
pub(crate) fn document_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}

/// Lexically resolves `.` and `..` components without touching the disk.
pub(crate) fn normalize_path(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(out.components().next_back(), Some(Component::Normal(_))) {
                    out.pop();
                } else if !matches!(
                    out.components().next_back(),
                    Some(Component::RootDir | Component::Prefix(_))
                ) {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
