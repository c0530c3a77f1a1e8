//! Local Markdown link checks.
//!
//! Links are found with a loose `[text](target)` pattern rather than a
//! Markdown parser, so reference-style links and links whose `](` is split
//! by a line break are not seen.

use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use super::{document_name, normalize_path, CheckKind, Violation};
use crate::context::ServiceContext;

/// Target prefixes that never refer to a local file.
const NON_LOCAL_PREFIXES: &[&str] = &["http://", "https://", "mailto:", "#"];

fn link_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\[[^\]]+\]\(([^)]+)\)").expect("link pattern compiles"))
}

/// Extracts the raw target of every `[text](target)` link in `content`.
#[must_use]
pub fn extract_link_targets(content: &str) -> Vec<&str> {
    link_pattern()
        .captures_iter(content)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
        .collect()
}

/// Returns `true` unless the target is a URL, a mail link, or a bare anchor.
#[must_use]
pub fn is_local_target(target: &str) -> bool {
    !NON_LOCAL_PREFIXES.iter().any(|prefix| target.starts_with(prefix))
}

/// Removes a trailing `#anchor` from a link target.
#[must_use]
pub fn strip_anchor(target: &str) -> &str {
    target.split_once('#').map_or(target, |(path, _)| path)
}

/// Checks that every local link in `document` resolves to an existing file.
///
/// Targets are resolved against the document's own directory. Each
/// resolved target is passed to `on_resolved`.
pub fn check_links(
    ctx: &ServiceContext,
    document: &Path,
    mut on_resolved: impl FnMut(&str),
) -> Vec<Violation> {
    let name = document_name(document);
    if !ctx.fs.exists(document) {
        return vec![Violation::DocumentMissing { check: CheckKind::Links, document: name }];
    }
    let content = match ctx.fs.read_to_string(document) {
        Ok(content) => content,
        Err(e) => {
            return vec![Violation::Unreadable {
                check: CheckKind::Links,
                document: name,
                cause: e.to_string(),
            }];
        }
    };

    let base = document.parent().unwrap_or_else(|| Path::new(""));
    let mut violations = Vec::new();
    for raw in extract_link_targets(&content) {
        let target = strip_anchor(raw);
        if target.is_empty() || !is_local_target(target) {
            continue;
        }

        let resolved = normalize_path(&base.join(target));
        if ctx.fs.exists(&resolved) {
            debug!(link = target, resolved = %resolved.display(), "link resolved");
            on_resolved(target);
        } else {
            debug!(link = target, resolved = %resolved.display(), "broken link");
            violations.push(Violation::BrokenLink {
                document: name.clone(),
                target: target.to_string(),
            });
        }
    }
    violations
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{context, MemFs, ROOT};
    use super::*;

    fn ssot_path() -> std::path::PathBuf {
        Path::new(ROOT).join("SSOT.md")
    }

    #[test]
    fn extracts_targets_from_inline_links() {
        let content = "Read [the plan](plan.md) then [docs](docs/a.md#intro).\n![img](x.png)";
        assert_eq!(extract_link_targets(content), vec!["plan.md", "docs/a.md#intro", "x.png"]);
    }

    #[test]
    fn empty_link_text_is_not_a_link() {
        assert!(extract_link_targets("[](plan.md)").is_empty());
    }

    #[test]
    fn reference_style_and_detached_links_are_missed() {
        assert!(extract_link_targets("[plan][ref]\n\n[ref]: plan.md").is_empty());
        assert!(extract_link_targets("[plan]\n(plan.md)").is_empty());
    }

    #[test]
    fn classifies_non_local_targets() {
        assert!(!is_local_target("https://example.com"));
        assert!(!is_local_target("http://example.com"));
        assert!(!is_local_target("mailto:dev@example.com"));
        assert!(!is_local_target("#section"));
        assert!(is_local_target("docs/a.md"));
        assert!(is_local_target("../a.md"));
    }

    #[test]
    fn strips_anchor_suffix() {
        assert_eq!(strip_anchor("a.md#top"), "a.md");
        assert_eq!(strip_anchor("#top"), "");
        assert_eq!(strip_anchor("a.md"), "a.md");
    }

    #[test]
    fn reports_single_broken_link() {
        let ctx = context(MemFs::with_files(&[("SSOT.md", "[x](missing.md)")]));
        let violations = check_links(&ctx, &ssot_path(), |_| {});

        assert_eq!(
            violations,
            vec![Violation::BrokenLink {
                document: "SSOT.md".to_string(),
                target: "missing.md".to_string()
            }]
        );
    }

    #[test]
    fn skips_external_and_anchor_links() {
        let ctx = context(MemFs::with_files(&[(
            "SSOT.md",
            "[site](https://example.com/page#x) [mail](mailto:a@b.c) [here](#section)",
        )]));
        assert!(check_links(&ctx, &ssot_path(), |_| {}).is_empty());
    }

    #[test]
    fn resolves_relative_to_document_directory() {
        let ctx = context(MemFs::with_files(&[
            ("docs/SSOT.md", "[up](../TASKS.md) [side](guide.md#setup) [root](SSOT.md)"),
            ("docs/guide.md", "guide"),
            ("TASKS.md", "tasks"),
        ]));
        let mut resolved = Vec::new();
        let violations =
            check_links(&ctx, &Path::new(ROOT).join("docs/SSOT.md"), |t| resolved.push(t.to_string()));

        assert_eq!(resolved, vec!["../TASKS.md", "guide.md", "SSOT.md"]);
        assert!(violations.is_empty());
    }

    #[test]
    fn links_to_directories_resolve() {
        let ctx = context(MemFs::with_files(&[
            ("SSOT.md", "[specs](docs/specs)"),
            ("docs/specs/one.md", "one"),
        ]));
        assert!(check_links(&ctx, &ssot_path(), |_| {}).is_empty());
    }

    #[test]
    fn unreadable_document_is_a_violation() {
        let ctx = context(MemFs::with_files(&[]).with_unreadable("SSOT.md"));
        let violations = check_links(&ctx, &ssot_path(), |_| {});

        assert_eq!(violations.len(), 1);
        assert!(matches!(&violations[0], Violation::Unreadable { check: CheckKind::Links, .. }));
    }

    #[test]
    fn missing_document_is_a_violation() {
        let ctx = context(MemFs::with_files(&[]));
        let violations = check_links(&ctx, &ssot_path(), |_| {});
        assert_eq!(violations[0].to_string(), "SSOT.md not found");
    }
}
