// src/output/llms.rs
// =============================================================================
// This module renders the final llms.txt text.
//
// Layout:
//   # Title
//   (short preamble with the source tree URL)
//   ## File Index      one line per document: path | source URL
//   ## Content         one section per document with its metadata and text
//
// Document content is inserted exactly as the rewriter produced it.
// =============================================================================

use crate::collect::Document;

// Text used in place of an empty document
const EMPTY_FILE: &str = "(empty file)";

// Renders the artifact
//
// Parameters:
//   title: the top-level heading
//   tree_url: browsable URL of the docs directory, shown in the preamble
//   docs: the documents, in index order
//
// Returns: the full text, ending with exactly one '\n'
pub fn render_llms_txt(title: &str, tree_url: &str, docs: &[Document]) -> String {
    let mut lines: Vec<String> = vec![
        format!("# {}", title),
        String::new(),
        "This file is auto-generated for LLM ingestion.".to_string(),
        format!("Source: {}", tree_url),
        String::new(),
        "## File Index".to_string(),
    ];

    lines.extend(docs.iter().map(|doc| format!("- {} | {}", doc.path, doc.source_url)));
    lines.push(String::new());
    lines.push("## Content".to_string());
    lines.push(String::new());

    for doc in docs {
        lines.push(format!("### {}", doc.path));
        lines.push(format!("SOURCE_URL: {}", doc.source_url));
        lines.push(format!("RAW_URL: {}", doc.raw_url));
        lines.push(String::new());
        if doc.content.is_empty() {
            lines.push(EMPTY_FILE.to_string());
        } else {
            lines.push(doc.content.clone());
        }
        lines.push(String::new());
    }

    format!("{}\n", lines.join("\n").trim())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RepoSource;

    #[test]
    fn test_render_layout() {
        let repo = RepoSource::new("o", "r", "main");
        let docs = vec![
            Document::new(&repo, "docs/a.md", "# A\n\n[b](b.md)"),
            Document::new(&repo, "docs/b.md", ""),
        ];

        let text = render_llms_txt("o/r Docs", &repo.tree_url("docs"), &docs);

        let expected = "\
# o/r Docs

This file is auto-generated for LLM ingestion.
Source: https://github.com/o/r/tree/main/docs

## File Index
- docs/a.md | https://github.com/o/r/blob/main/docs/a.md
- docs/b.md | https://github.com/o/r/blob/main/docs/b.md

## Content

### docs/a.md
SOURCE_URL: https://github.com/o/r/blob/main/docs/a.md
RAW_URL: https://raw.githubusercontent.com/o/r/main/docs/a.md

# A

[b](https://github.com/o/r/blob/main/docs/b.md)

### docs/b.md
SOURCE_URL: https://github.com/o/r/blob/main/docs/b.md
RAW_URL: https://raw.githubusercontent.com/o/r/main/docs/b.md

(empty file)
";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_render_without_documents_ends_with_one_newline() {
        let text = render_llms_txt("T", "https://github.com/o/r/tree/main/docs", &[]);
        assert!(text.ends_with("## Content\n"));
        assert!(!text.ends_with("\n\n"));
    }
}
