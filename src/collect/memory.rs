// src/collect/memory.rs
// An in-memory DocumentSource for tests.

use anyhow::{anyhow, Result};
use std::collections::BTreeMap;

use super::DocumentSource;

pub struct MemorySource {
    files: BTreeMap<String, String>,
}

impl MemorySource {
    pub fn new(files: &[(&str, &str)]) -> Self {
        Self {
            files: files
                .iter()
                .map(|(path, text)| (path.to_string(), text.to_string()))
                .collect(),
        }
    }
}

impl DocumentSource for MemorySource {
    async fn list_paths(&self, prefix: &str) -> Result<Vec<String>> {
        Ok(self
            .files
            .keys()
            .filter(|path| path.starts_with(prefix))
            .cloned()
            .collect())
    }

    async fn fetch_text(&self, path: &str) -> Result<String> {
        tokio::task::yield_now().await;
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| anyhow!("404 for {}", path))
    }
}
