// src/links/resolve.rs
// =============================================================================
// This module turns a link target found in a document into an absolute URL.
//
// Every target falls into exactly one kind, checked in this order:
// - Empty:         ""                        -> left alone
// - Special:       "https://x", "mailto:a", "//cdn/x"  -> left alone
// - Anchor:        "#setup"                  -> document URL + "#setup"
// - RootRelative:  "/img/logo.png"           -> repository root + path
// - Relative:      "./guide.md", "../x.md"   -> joined onto the document URL
//
// We use the `url` crate for the relative case. Url::join implements the
// standard resolution rules ('.' and '..' segments, query, fragment).
// =============================================================================

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

use crate::config::RepoSource;

// A URI scheme is a letter followed by letters, digits, '+', '-' or '.'
// Note that a Windows drive letter like "C:" matches too; such targets are
// left alone.
static SCHEME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*:").expect("valid regex"));

/// What kind of address a link target is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    Empty,
    Special,
    Anchor,
    RootRelative,
    Relative,
}

impl TargetKind {
    pub fn of(target: &str) -> Self {
        if target.is_empty() {
            TargetKind::Empty
        } else if is_special_link(target) {
            // Must come before RootRelative: "//cdn/x" starts with '/' too
            TargetKind::Special
        } else if target.starts_with('#') {
            TargetKind::Anchor
        } else if target.starts_with('/') {
            TargetKind::RootRelative
        } else {
            TargetKind::Relative
        }
    }
}

/// True for protocol-relative and scheme-qualified targets
pub fn is_special_link(target: &str) -> bool {
    target.starts_with("//") || SCHEME.is_match(target)
}

// Resolves one link target found in the document at `document_path`
//
// Never fails: a target that cannot be resolved is returned unchanged.
//
// Example (repo o/r, branch main, document docs/a/index.md):
//   "./guide.md#setup" -> "https://github.com/o/r/blob/main/docs/a/guide.md#setup"
pub fn resolve_link(source: &RepoSource, target: &str, document_path: &str) -> String {
    match TargetKind::of(target) {
        TargetKind::Empty | TargetKind::Special => target.to_string(),
        TargetKind::Anchor => format!("{}{}", source.source_url(document_path), target),
        TargetKind::RootRelative => format!("{}{}", source.repo_root_url(), target),
        TargetKind::Relative => {
            let base = source.source_url(document_path);
            match Url::parse(&base).and_then(|base| base.join(target)) {
                Ok(url) => url.to_string(),
                Err(e) => {
                    tracing::debug!(link = target, document_path, error = %e, "leaving unresolvable link as is");
                    target.to_string()
                }
            }
        }
    }
}
