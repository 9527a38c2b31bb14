// src/collect/mod.rs
// =============================================================================
// This module turns a list of document paths into rewritten documents.
//
// Submodules:
// - pool: runs async jobs with a fixed number of workers, keeping order
// - docs: downloads each document and rewrites its links
// =============================================================================

mod docs;
mod pool;

#[cfg(test)]
pub mod memory;

pub use docs::{collect_documents, Document, DocumentSource};
