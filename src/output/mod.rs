// src/output/mod.rs
// =============================================================================
// This module produces the final artifact.
//
// Submodules:
// - llms: renders the llms.txt text
// - write: writes it to disk all-or-nothing
// - manifest: JSON summary for --json
// =============================================================================

mod llms;
mod manifest;
mod write;

pub use llms::render_llms_txt;
pub use manifest::Manifest;
pub use write::write_atomically;
