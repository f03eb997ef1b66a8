//! Pipeline orchestration for diagramdex.
//!
//! Ties the extract and report crates together into one synchronous run:
//! walk → scan → group → render → write.

pub mod pipeline;

pub use pipeline::{ExtractConfig, ExtractResult, ProgressReporter, SilentProgress, run};
