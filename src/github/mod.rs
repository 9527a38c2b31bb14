// src/github/mod.rs
// =============================================================================
// This module handles everything that talks to GitHub.
//
// Currently implements:
// - Parsing GitHub URLs to extract owner/repo
// - Listing Markdown documents with the Git Trees API
// - Downloading raw document text from raw.githubusercontent.com
// =============================================================================

mod fetch;
mod tree;

pub use fetch::{parse_github_url, GithubClient};
