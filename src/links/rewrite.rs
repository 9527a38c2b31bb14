// src/links/rewrite.rs
// =============================================================================
// This module rewrites every relative link in a Markdown document into an
// absolute GitHub URL.
//
// How it works:
// 1. Walk the document line by line
// 2. Track whether we are inside a fenced code block (``` or ~~~)
// 3. Outside fences, run three rules over the line, in order:
//      - inline and image links    [label](target), ![alt](target)
//      - reference definitions     [id]: target "optional title"
//      - raw HTML attributes       href="...", src='...'
// 4. Join the lines back with '\n'
//
// Lines are never added, removed or reordered. Code inside fences is never
// touched. Running the rewriter twice gives the same text as running it once,
// because every rewritten target is absolute and resolve_link leaves absolute
// targets alone.
// =============================================================================

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::resolve::resolve_link;
use super::target::rewrite_target;
use crate::config::RepoSource;

// [label](target) with an optional leading '!' for images
static INLINE_LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(!?\[[^\]\n]*\])\(([^)\n]*)\)").expect("valid regex"));

// [id]: target "title"
// An id starting with '^' is a footnote definition, not a link.
static REFERENCE_DEFINITION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\s*\[[^\]\^\n][^\]\n]*\]:)(.*)$").expect("valid regex"));

// href="..." / href='...' / src="..." / src='...'
// The attribute name must follow whitespace or start the line, so data-src
// and data-href are left alone.
static HTML_ATTRIBUTE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(^|\s)(href|src)=(?:"([^"]*)"|'([^']*)')"#).expect("valid regex")
});

/// Line state of the fence tracker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FenceState {
    #[default]
    Normal,
    InFence,
}

impl FenceState {
    fn toggle(self) -> Self {
        match self {
            FenceState::Normal => FenceState::InFence,
            FenceState::InFence => FenceState::Normal,
        }
    }
}

/// True for a line opening or closing a fenced code block
pub fn is_fence_line(line: &str) -> bool {
    let line = line.trim_start();
    line.starts_with("```") || line.starts_with("~~~")
}

// Rewrites every relative link of a document into an absolute URL
//
// Parameters:
//   source: the repository and branch the document lives in
//   content: the document text, with '\n' line endings
//   document_path: the document's path inside the repository
//
// Example (repo o/r, branch main, document docs/a/index.md):
//   "See [guide](./guide.md#setup)."
//   -> "See [guide](https://github.com/o/r/blob/main/docs/a/guide.md#setup)."
pub fn rewrite_document(source: &RepoSource, content: &str, document_path: &str) -> String {
    let mut state = FenceState::default();
    let mut lines = Vec::new();

    for line in content.split('\n') {
        if is_fence_line(line) {
            state = state.toggle();
            lines.push(line.to_string());
            continue;
        }

        match state {
            FenceState::InFence => lines.push(line.to_string()),
            FenceState::Normal => lines.push(rewrite_line(source, line, document_path)),
        }
    }

    if state == FenceState::InFence {
        tracing::debug!(document_path, "document ends inside an unterminated code fence");
    }

    lines.join("\n")
}

// Applies the three link rules to one line outside a fence
fn rewrite_line(source: &RepoSource, line: &str, document_path: &str) -> String {
    let resolve = |core: &str| resolve_link(source, core, document_path);

    let line = INLINE_LINK.replace_all(line, |caps: &Captures| {
        format!("{}({})", &caps[1], rewrite_target(&caps[2], resolve))
    });

    let line = REFERENCE_DEFINITION.replace(&line, |caps: &Captures| {
        format!("{}{}", &caps[1], rewrite_target(&caps[2], resolve))
    });

    let line = HTML_ATTRIBUTE.replace_all(&line, |caps: &Captures| {
        let (quote, value) = match (caps.get(3), caps.get(4)) {
            (Some(value), _) => ('"', value.as_str()),
            (None, Some(value)) => ('\'', value.as_str()),
            (None, None) => return caps[0].to_string(),
        };
        format!("{}{}={quote}{}{quote}", &caps[1], &caps[2], resolve(value))
    });

    line.into_owned()
}
