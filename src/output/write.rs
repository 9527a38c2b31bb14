// src/output/write.rs
// =============================================================================
// This module writes the artifact to disk all-or-nothing.
//
// We write to a temporary file next to the target and rename it into place.
// A rename within one directory replaces the old file in a single step, so a
// reader sees either the previous file or the complete new one.
// =============================================================================

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;

pub async fn write_atomically(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    let temp = temp_path(path);
    fs::write(&temp, contents)
        .await
        .with_context(|| format!("Failed to write {}", temp.display()))?;

    if let Err(e) = fs::rename(&temp, path).await {
        let _ = fs::remove_file(&temp).await;
        return Err(e).with_context(|| format!("Failed to move output into {}", path.display()));
    }

    Ok(())
}

// "out/llms.txt" -> "out/.llms.txt.tmp-<pid>"
fn temp_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    path.with_file_name(format!(".{}.tmp-{}", name, std::process::id()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_creates_parents_and_replaces_file() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("nested/out/llms.txt");

        write_atomically(&target, "first\n").await.unwrap();
        write_atomically(&target, "second\n").await.unwrap();

        assert_eq!(std::fs::read_to_string(&target).unwrap(), "second\n");
        let leftovers: Vec<_> = std::fs::read_dir(target.parent().unwrap())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(leftovers, vec![std::ffi::OsString::from("llms.txt")]);
    }

    #[test]
    fn test_temp_path_is_a_hidden_sibling() {
        let temp = temp_path(Path::new("out/llms.txt"));
        assert_eq!(temp.parent(), Some(Path::new("out")));
        assert!(temp
            .file_name()
            .unwrap()
            .to_string_lossy()
            .starts_with(".llms.txt.tmp-"));
    }
}
