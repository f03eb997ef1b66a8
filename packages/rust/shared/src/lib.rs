//! Shared types and error model for diagramdex.
//!
//! This crate is the foundation depended on by all other diagramdex crates.
//! It provides:
//! - [`DiagramdexError`] — the unified error type
//! - Domain types ([`DiagramBlock`], [`BlockType`])
//! - The fixed filesystem conventions ([`DOCS_DIR_NAME`], [`OUTPUT_FILE_NAME`])

pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use error::{DiagramdexError, Result};
pub use types::{BlockType, DOCS_DIR_NAME, DiagramBlock, OUTPUT_FILE_NAME};
