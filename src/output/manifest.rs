// src/output/manifest.rs
// =============================================================================
// A JSON summary of what was written, printed with --json.
// =============================================================================

use serde::Serialize;
use std::path::Path;

use crate::collect::Document;

#[derive(Debug, Serialize)]
pub struct Manifest {
    pub output: String,
    pub source: String,
    pub documents: Vec<ManifestEntry>,
}

#[derive(Debug, Serialize)]
pub struct ManifestEntry {
    pub path: String,
    pub source_url: String,
    pub raw_url: String,
    pub lines: usize,
}

impl Manifest {
    pub fn new(output: &Path, source: &str, docs: &[Document]) -> Self {
        Self {
            output: output.display().to_string(),
            source: source.to_string(),
            documents: docs
                .iter()
                .map(|doc| ManifestEntry {
                    path: doc.path.clone(),
                    source_url: doc.source_url.clone(),
                    raw_url: doc.raw_url.clone(),
                    lines: doc.content.lines().count(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RepoSource;

    #[test]
    fn test_manifest_json() {
        let repo = RepoSource::new("o", "r", "main");
        let docs = vec![Document::new(&repo, "docs/a.md", "one\ntwo\n")];
        let manifest = Manifest::new(Path::new("llms.txt"), &repo.tree_url("docs"), &docs);

        let json = serde_json::to_value(&manifest).unwrap();
        assert_eq!(json["output"], "llms.txt");
        assert_eq!(json["documents"][0]["path"], "docs/a.md");
        assert_eq!(json["documents"][0]["lines"], 2);
    }
}
