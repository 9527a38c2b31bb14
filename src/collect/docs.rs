// src/collect/docs.rs
// =============================================================================
// This module downloads every document and rewrites its links.
//
// The downloading side is described by the DocumentSource trait. In the
// real tool that is the GitHub client; in tests it is an in-memory map.
//
// For each path we:
// 1. Fetch the raw text
// 2. Normalize "\r\n" line endings to "\n"
// 3. Trim trailing whitespace
// 4. Rewrite relative links into absolute GitHub URLs
// =============================================================================

use anyhow::{Context, Result};

use super::pool::map_with_concurrency;
use crate::config::RepoSource;
use crate::links::rewrite_document;

/// Where documents come from
#[allow(async_fn_in_trait)]
pub trait DocumentSource {
    /// Lists every Markdown document under `prefix`, sorted
    async fn list_paths(&self, prefix: &str) -> Result<Vec<String>>;

    /// Downloads the raw text of one document
    async fn fetch_text(&self, path: &str) -> Result<String>;
}

/// One downloaded document with its links already rewritten
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub path: String,
    pub source_url: String,
    pub raw_url: String,
    pub content: String,
}

impl Document {
    pub fn new(repo: &RepoSource, path: &str, raw: &str) -> Self {
        let normalized = normalize_newlines(raw);
        let content = rewrite_document(repo, normalized.trim_end(), path);

        Self {
            path: path.to_string(),
            source_url: repo.source_url(path),
            raw_url: repo.raw_url(path),
            content,
        }
    }
}

fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n")
}

// Downloads and rewrites `paths`, at most `concurrency` at a time
//
// Returns the documents in the same order as `paths`. The first failed
// download fails the whole collection.
pub async fn collect_documents<S: DocumentSource>(
    source: &S,
    repo: &RepoSource,
    paths: &[String],
    concurrency: usize,
) -> Result<Vec<Document>> {
    map_with_concurrency(paths, concurrency, |index, path| async move {
        tracing::debug!(index, path = %path, "downloading document");
        let raw = source
            .fetch_text(path)
            .await
            .with_context(|| format!("Failed to download {}", path))?;
        Ok::<_, anyhow::Error>(Document::new(repo, path, &raw))
    })
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collect::memory::MemorySource;

    fn repo() -> RepoSource {
        RepoSource::new("o", "r", "main")
    }

    #[test]
    fn test_document_normalizes_and_rewrites() {
        let doc = Document::new(&repo(), "docs/a/index.md", "# A\r\n\r\n[b](./b.md)\r\n\r\n");
        assert_eq!(doc.content, "# A\n\n[b](https://github.com/o/r/blob/main/docs/a/b.md)");
        assert_eq!(doc.source_url, "https://github.com/o/r/blob/main/docs/a/index.md");
        assert_eq!(
            doc.raw_url,
            "https://raw.githubusercontent.com/o/r/main/docs/a/index.md"
        );
    }

    #[tokio::test]
    async fn test_collects_in_path_order() {
        let source = MemorySource::new(&[
            ("docs/a.md", "[x](x.md)"),
            ("docs/b.md", "plain"),
            ("docs/c.md", ""),
        ]);
        let paths = source.list_paths("docs/").await.unwrap();
        let docs = collect_documents(&source, &repo(), &paths, 2).await.unwrap();

        let names: Vec<&str> = docs.iter().map(|d| d.path.as_str()).collect();
        assert_eq!(names, vec!["docs/a.md", "docs/b.md", "docs/c.md"]);
        assert_eq!(docs[0].content, "[x](https://github.com/o/r/blob/main/docs/x.md)");
        assert_eq!(docs[2].content, "");
    }

    #[tokio::test]
    async fn test_missing_document_fails_collection() {
        let source = MemorySource::new(&[("docs/a.md", "a")]);
        let paths = vec!["docs/a.md".to_string(), "docs/gone.md".to_string()];
        let err = collect_documents(&source, &repo(), &paths, 4).await.unwrap_err();
        assert!(err.to_string().contains("docs/gone.md"));
    }
}
