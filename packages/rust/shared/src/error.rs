//! Error types for diagramdex.
//!
//! Library crates use [`DiagramdexError`] via `thiserror`.
//! The CLI wraps this with `color-eyre` for rich diagnostics.

use std::path::PathBuf;

/// Top-level error type for all diagramdex operations.
#[derive(Debug, thiserror::Error)]
pub enum DiagramdexError {
    /// The scan root directory does not exist. Fatal: no output is written.
    #[error("docs directory not found: {}", path.display())]
    MissingRoot { path: PathBuf },

    /// Filesystem I/O error.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Convenience alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, DiagramdexError>;

impl DiagramdexError {
    /// Create the fatal missing-root error.
    pub fn missing_root(path: impl Into<PathBuf>) -> Self {
        Self::MissingRoot { path: path.into() }
    }

    /// Wrap a `std::io::Error` with a path for context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
