// src/config.rs
// =============================================================================
// This file holds the configuration values the rest of the tool works with.
//
// There is no global state: main.rs turns the parsed command line into a
// RepoSource (which repository and branch) and a GenerateConfig (what to
// collect and where to write it), then passes them down explicitly.
//
// RepoSource also knows how to build every GitHub URL we need, so the
// link resolver and the downloader agree on the exact same addresses.
// =============================================================================

use std::path::PathBuf;

/// A GitHub repository at a specific branch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoSource {
    pub owner: String,
    pub repo: String,
    pub branch: String,
}

impl RepoSource {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>, branch: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
            branch: branch.into(),
        }
    }

    /// Browsable URL of the repository root at the branch, without a trailing slash
    ///
    /// Example: https://github.com/o/r/blob/main
    pub fn repo_root_url(&self) -> String {
        format!(
            "https://github.com/{}/{}/blob/{}",
            self.owner, self.repo, self.branch
        )
    }

    /// Canonical source URL of one document
    ///
    /// Example: "docs/a/index.md" -> https://github.com/o/r/blob/main/docs/a/index.md
    ///
    /// The path is inserted as is, not percent-encoded. Anchor links built on
    /// top of it keep a space in "docs/a b/x.md" literally, while relative
    /// links resolved through `Url::join` come out as "a%20b".
    pub fn source_url(&self, path: &str) -> String {
        format!("{}/{}", self.repo_root_url(), path)
    }

    /// URL serving the raw bytes of one document
    pub fn raw_url(&self, path: &str) -> String {
        format!(
            "https://raw.githubusercontent.com/{}/{}/{}/{}",
            self.owner, self.repo, self.branch, path
        )
    }

    /// Browsable directory listing for the docs prefix
    pub fn tree_url(&self, prefix: &str) -> String {
        format!(
            "https://github.com/{}/{}/tree/{}/{}",
            self.owner, self.repo, self.branch, prefix
        )
    }

    /// Git Trees API endpoint listing every file on the branch
    ///
    /// The branch is encoded as a single path segment, so "release/v5"
    /// becomes "release%2Fv5".
    pub fn tree_api_url(&self) -> String {
        let branch: String = url::form_urlencoded::byte_serialize(self.branch.as_bytes()).collect();
        format!(
            "https://api.github.com/repos/{}/{}/git/trees/{}?recursive=1",
            self.owner, self.repo, branch
        )
    }
}

/// Everything the `generate` command needs
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    pub source: RepoSource,
    /// Directory inside the repository to collect, without leading/trailing '/'
    pub docs_prefix: String,
    pub output: PathBuf,
    /// Number of concurrent downloads, at least 1
    pub concurrency: usize,
    pub token: Option<String>,
    pub title: String,
}

impl GenerateConfig {
    pub fn new(
        source: RepoSource,
        docs_prefix: &str,
        output: PathBuf,
        concurrency: usize,
        token: Option<String>,
        title: Option<String>,
    ) -> Self {
        let title = title.unwrap_or_else(|| format!("{}/{} Docs", source.owner, source.repo));
        Self {
            docs_prefix: normalize_docs_prefix(docs_prefix),
            output,
            concurrency: concurrency.max(1),
            token: token.filter(|t| !t.trim().is_empty()),
            title,
            source,
        }
    }
}

/// Strips leading and trailing slashes: "/docs/react/" -> "docs/react"
pub fn normalize_docs_prefix(prefix: &str) -> String {
    prefix.trim_matches('/').to_string()
}
