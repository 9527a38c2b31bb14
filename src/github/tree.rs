// src/github/tree.rs
// =============================================================================
// This module picks the Markdown documents out of a Git Trees API response.
//
// GET /repos/{owner}/{repo}/git/trees/{branch}?recursive=1 returns every
// file and directory on the branch:
//
//   { "tree": [ { "path": "docs/a.md", "type": "blob", ... }, ... ],
//     "truncated": false }
//
// We keep blobs (files) under the docs prefix that end in .md or .mdx.
// =============================================================================

use anyhow::{anyhow, Result};
use serde::Deserialize;

/// The parts of a Git Trees API response we read
#[derive(Debug, Deserialize)]
pub struct TreeResponse {
    pub tree: Option<Vec<TreeEntry>>,
    #[serde(default)]
    pub truncated: bool,
}

#[derive(Debug, Deserialize)]
pub struct TreeEntry {
    pub path: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

// Returns the sorted Markdown paths under `prefix`
//
// An empty prefix selects the whole repository.
pub fn markdown_paths(response: TreeResponse, prefix: &str) -> Result<Vec<String>> {
    if response.truncated {
        tracing::warn!("GitHub truncated the tree listing, some documents may be missing");
    }

    let tree = response
        .tree
        .ok_or_else(|| anyhow!("Unexpected GitHub API response: missing tree array."))?;

    let mut paths: Vec<String> = tree
        .into_iter()
        .filter(|entry| entry.kind.as_deref() == Some("blob"))
        .filter_map(|entry| entry.path)
        .filter(|path| is_markdown_path(path, prefix))
        .collect();

    paths.sort();
    Ok(paths)
}

/// True for a .md/.mdx file (any case) under `prefix`
pub fn is_markdown_path(path: &str, prefix: &str) -> bool {
    let under_prefix = prefix.is_empty()
        || path
            .strip_prefix(prefix)
            .is_some_and(|rest| rest.starts_with('/'));

    let lower = path.to_ascii_lowercase();
    under_prefix && (lower.ends_with(".md") || lower.ends_with(".mdx"))
}
