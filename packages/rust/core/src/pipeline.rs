//! End-to-end extraction pipeline.
//!
//! Walk the docs tree, scan each document, group by domain, render, write
//! the output file. One synchronous pass; a failed document read is logged
//! and contributes zero blocks, a missing docs root aborts before anything
//! is written.

use std::path::{Path, PathBuf};

use tracing::{info, instrument, warn};

use diagramdex_shared::{DOCS_DIR_NAME, DiagramBlock, DiagramdexError, OUTPUT_FILE_NAME, Result};

/// Where to scan and where to write.
///
/// Both paths are fixed conventions relative to the working directory;
/// there are no flags or environment overrides.
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    /// Root of the Markdown tree to scan.
    pub docs_dir: PathBuf,
    /// Path of the generated document, overwritten on every run.
    pub output_path: PathBuf,
}

impl ExtractConfig {
    /// Resolve the conventional layout under the current working directory:
    /// `docs/` as the scan root, `diagrams.md` beside it.
    pub fn from_cwd() -> Result<Self> {
        let cwd = std::env::current_dir().map_err(|e| DiagramdexError::io(".", e))?;
        Ok(Self {
            docs_dir: cwd.join(DOCS_DIR_NAME),
            output_path: cwd.join(OUTPUT_FILE_NAME),
        })
    }
}

/// Summary of a completed run.
#[derive(Debug, Clone)]
pub struct ExtractResult {
    /// Where the document was written.
    pub output_path: PathBuf,
    /// Markdown documents scanned.
    pub document_count: usize,
    /// Diagram blocks extracted across all documents.
    pub block_count: usize,
    /// `(domain, count)` totals, sorted by domain name.
    pub domain_totals: Vec<(String, usize)>,
}

/// Progress callbacks for the run; the CLI prints these to stdout.
pub trait ProgressReporter {
    /// Scan is starting under `root`.
    fn scan_started(&self, root: &Path);
    /// The walker found `count` candidate documents.
    fn documents_found(&self, count: usize);
    /// One document was scanned and yielded `blocks` diagrams (called only
    /// when at least one was found).
    fn document_scanned(&self, rel_path: &str, blocks: usize);
    /// One document could not be read; the run continues without it.
    fn document_failed(&self, path: &Path, error: &DiagramdexError);
    /// All documents scanned; `total` blocks collected.
    fn scan_finished(&self, total: usize);
    /// Per-domain totals, reported once per domain in sorted order.
    fn domain_total(&self, domain: &str, count: usize);
    /// The output document was written.
    fn finished(&self, result: &ExtractResult);
}

/// A reporter that swallows everything, for library callers and tests.
pub struct SilentProgress;

impl ProgressReporter for SilentProgress {
    fn scan_started(&self, _root: &Path) {}
    fn documents_found(&self, _count: usize) {}
    fn document_scanned(&self, _rel_path: &str, _blocks: usize) {}
    fn document_failed(&self, _path: &Path, _error: &DiagramdexError) {}
    fn scan_finished(&self, _total: usize) {}
    fn domain_total(&self, _domain: &str, _count: usize) {}
    fn finished(&self, _result: &ExtractResult) {}
}

/// Run the full pipeline.
///
/// Fatal only when the docs root is absent or the output cannot be
/// written; per-document read failures are reported and skipped.
#[instrument(skip_all, fields(root = %config.docs_dir.display()))]
pub fn run(config: &ExtractConfig, reporter: &dyn ProgressReporter) -> Result<ExtractResult> {
    if !config.docs_dir.is_dir() {
        return Err(DiagramdexError::missing_root(&config.docs_dir));
    }

    reporter.scan_started(&config.docs_dir);
    let documents = diagramdex_extract::walker::find_documents(&config.docs_dir)?;
    reporter.documents_found(documents.len());
    info!(count = documents.len(), "documents discovered");

    let mut all_blocks: Vec<DiagramBlock> = Vec::new();
    for document in &documents {
        match diagramdex_extract::scan_document(document, &config.docs_dir) {
            Ok(blocks) => {
                if !blocks.is_empty() {
                    reporter.document_scanned(&blocks[0].source_path, blocks.len());
                }
                all_blocks.extend(blocks);
            }
            Err(e) => {
                warn!(path = %document.display(), error = %e, "skipping unreadable document");
                reporter.document_failed(document, &e);
            }
        }
    }

    reporter.scan_finished(all_blocks.len());
    let block_count = all_blocks.len();

    let organized = diagramdex_report::group_by_domain(all_blocks);
    let domain_totals: Vec<(String, usize)> = organized
        .iter()
        .map(|(domain, blocks)| (domain.clone(), blocks.len()))
        .collect();
    for (domain, count) in &domain_totals {
        reporter.domain_total(domain, *count);
    }

    let rendered = diagramdex_report::render_document(&organized);
    std::fs::write(&config.output_path, rendered)
        .map_err(|e| DiagramdexError::io(&config.output_path, e))?;

    info!(
        output = %config.output_path.display(),
        blocks = block_count,
        domains = domain_totals.len(),
        "extraction complete"
    );

    let result = ExtractResult {
        output_path: config.output_path.clone(),
        document_count: documents.len(),
        block_count,
        domain_totals,
    };
    reporter.finished(&result);

    Ok(result)
}
