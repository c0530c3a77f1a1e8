//! Required-file check.

use std::path::Path;

use tracing::debug;

use super::Violation;
use crate::context::ServiceContext;

/// Reports every name in `required` that does not exist directly under `root`.
pub fn check_required_files(
    ctx: &ServiceContext,
    root: &Path,
    required: &[String],
) -> Vec<Violation> {
    required
        .iter()
        .filter(|name| {
            let present = ctx.fs.exists(&root.join(name));
            debug!(file = %name, present, "required file");
            !present
        })
        .map(|name| Violation::MissingRequiredFile { name: name.clone() })
        .collect()
}
