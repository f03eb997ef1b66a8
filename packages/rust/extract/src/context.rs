//! Title and section inference from the lines preceding a block.
//!
//! Both lookups operate on the original document split on `\n`, anchored at
//! the zero-based line where the fence opens.

use std::sync::LazyLock;

use regex::Regex;

/// How many lines above the fence are considered for a title.
const TITLE_WINDOW: usize = 5;

/// How far back the section lookup walks for an enclosing heading.
const SECTION_WINDOW: usize = 20;

/// Titles at or above this length are rejected as noise.
const MAX_TITLE_LEN: usize = 200;

static HEADING_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#+\s*").expect("valid regex"));

/// Infer a title from the window of lines immediately above the block.
///
/// Scans the window in forward order, so the *earliest* qualifying line
/// wins, not the closest one. Callers downstream rely on that ordering;
/// keep it as is.
///
/// A line qualifies when, trimmed, it is a heading, a `**bold**` line, or
/// mentions a diagram keyword, and the stripped text is non-empty and
/// shorter than 200 characters.
pub fn title_from_context(lines: &[&str], block_start: usize) -> Option<String> {
    let window_start = block_start.saturating_sub(TITLE_WINDOW);

    for line in &lines[window_start..block_start] {
        let line = line.trim();

        if line.starts_with('#') {
            let title = HEADING_PREFIX_RE.replace(line, "").trim().to_string();
            if accept_title(&title) {
                return Some(title);
            }
        } else if line.starts_with("**") && line.ends_with("**") {
            let title = line.trim_matches('*').trim().to_string();
            if accept_title(&title) {
                return Some(title);
            }
        } else if line.contains("Diagram") || line.contains("Flow") || line.contains("Sequence") {
            let title: String = line.chars().filter(|c| *c != '*' && *c != '#').collect();
            let title = title.trim().to_string();
            if accept_title(&title) {
                return Some(title);
            }
        }
    }

    None
}

/// Find the nearest heading above the block, walking backward at most
/// [`SECTION_WINDOW`] lines. The lower bound is exclusive, so the first
/// document line is never part of the walk.
pub fn section_from_context(lines: &[&str], block_start: usize) -> Option<String> {
    let lower = block_start.saturating_sub(SECTION_WINDOW);

    for i in ((lower + 1)..block_start).rev() {
        let line = lines[i].trim();
        if line.starts_with('#') {
            return Some(HEADING_PREFIX_RE.replace(line, "").trim().to_string());
        }
    }

    None
}

fn accept_title(title: &str) -> bool {
    !title.is_empty() && title.chars().count() < MAX_TITLE_LEN
}
