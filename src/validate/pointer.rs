//! Plan pointer check.
//!
//! The plan document's first non-blank line names the active plan file,
//! relative to the validation root.

use std::path::Path;

use tracing::debug;

use super::{document_name, normalize_path, CheckKind, Violation};
use crate::context::ServiceContext;

/// Returns the first non-blank line of `content`, trimmed.
#[must_use]
pub fn pointer_line(content: &str) -> Option<&str> {
    content.lines().map(str::trim).find(|line| !line.is_empty())
}

/// Checks that `plan`'s pointer line is a path that exists under `root`.
///
/// Produces at most one violation.
pub fn check_plan_pointer(ctx: &ServiceContext, plan: &Path, root: &Path) -> Vec<Violation> {
    let document = document_name(plan);
    if !ctx.fs.exists(plan) {
        return vec![Violation::DocumentMissing { check: CheckKind::PlanPointer, document }];
    }
    let content = match ctx.fs.read_to_string(plan) {
        Ok(content) => content,
        Err(e) => {
            return vec![Violation::Unreadable {
                check: CheckKind::PlanPointer,
                document,
                cause: e.to_string(),
            }];
        }
    };

    let Some(pointer) = pointer_line(&content) else {
        return vec![Violation::PlanEmpty { document }];
    };
    if pointer.starts_with('#') {
        return vec![Violation::PointerIsComment { document }];
    }

    let target = normalize_path(&root.join(pointer));
    debug!(pointer, target = %target.display(), "plan pointer");
    if ctx.fs.exists(&target) {
        Vec::new()
    } else {
        vec![Violation::PointerUnresolved { document, pointer: pointer.to_string() }]
    }
}
