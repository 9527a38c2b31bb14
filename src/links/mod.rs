// src/links/mod.rs
// =============================================================================
// This module contains the link absolutization engine.
//
// Submodules:
// - resolve: turns one link target into an absolute URL
// - target: splits a raw Markdown target into address, title and whitespace
// - rewrite: walks a whole document, skipping fenced code blocks
//
// Everything in here is pure and synchronous: no I/O, no async.
// =============================================================================

mod resolve;
mod rewrite;
mod target;

pub use rewrite::rewrite_document;
