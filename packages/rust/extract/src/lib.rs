//! Mermaid block extraction from Markdown documents.
//!
//! The scanner finds every ```` ```mermaid ```` fenced region in a
//! document, pairs it with a title and section inferred from the
//! surrounding lines, tags its notation variant, and classifies it into a
//! domain based on the document path.

pub mod classify;
pub mod context;
pub mod walker;

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use diagramdex_shared::{BlockType, DiagramBlock, DiagramdexError, Result};

/// Opening/closing fence pair with the `mermaid` tag, non-greedy across
/// lines. Case-sensitive: `Mermaid` fences are not ours. An unterminated
/// fence simply never matches.
static MERMAID_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```mermaid\s*\n(.*?)```").expect("valid regex"));

/// Extract every diagram block from a document's full text.
///
/// Pure function of `(text, rel_path)`. Whitespace-only fences are
/// discarded; everything else comes back trimmed, with context inferred
/// from the lines above the fence.
pub fn scan_text(text: &str, rel_path: &str) -> Vec<DiagramBlock> {
    let lines: Vec<&str> = text.split('\n').collect();
    let mut blocks = Vec::new();

    for captures in MERMAID_FENCE.captures_iter(text) {
        let full_match = captures.get(0).expect("group 0 always present");
        let content = captures[1].trim().to_string();
        if content.is_empty() {
            continue;
        }

        // Zero-based line of the opening fence, anchor for context lookup.
        let block_start = text[..full_match.start()]
            .bytes()
            .filter(|&b| b == b'\n')
            .count();

        let title = context::title_from_context(&lines, block_start);
        let section = context::section_from_context(&lines, block_start);
        let block_type = BlockType::infer(&content);
        let domain = classify::classify_domain(rel_path, text).to_string();

        blocks.push(DiagramBlock {
            content,
            source_path: rel_path.to_string(),
            title,
            section,
            block_type,
            domain,
        });
    }

    debug!(path = rel_path, count = blocks.len(), "document scanned");
    blocks
}

/// Read one document and extract its diagram blocks.
///
/// The caller decides how to handle a read failure; the pipeline treats it
/// as "zero blocks from this document" and keeps going.
pub fn scan_document(path: &Path, root: &Path) -> Result<Vec<DiagramBlock>> {
    let text =
        std::fs::read_to_string(path).map_err(|e| DiagramdexError::io(path, e))?;
    let rel_path = relative_path(path, root);
    Ok(scan_text(&text, &rel_path))
}

/// Root-relative path with `/` separators, independent of platform.
fn relative_path(path: &Path, root: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
