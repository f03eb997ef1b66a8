//! Recursive discovery of candidate Markdown documents.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use diagramdex_shared::{DiagramdexError, OUTPUT_FILE_NAME, Result};

/// Enumerate all Markdown documents under `root`, recursively.
///
/// Entries are visited in sorted order so the sequence is deterministic
/// across runs. The reserved output filename is excluded, which keeps
/// reruns from consuming their own prior output. A missing root is fatal;
/// unreadable entries are logged and skipped.
pub fn find_documents(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(DiagramdexError::missing_root(root));
    }

    let mut documents = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!(error = %e, "skipping unreadable directory entry");
                continue;
            }
        };

        let path = entry.path();
        if !entry.file_type().is_file() {
            continue;
        }
        if path.extension().and_then(|ext| ext.to_str()) != Some("md") {
            continue;
        }
        if path.file_name().and_then(|name| name.to_str()) == Some(OUTPUT_FILE_NAME) {
            debug!(path = %path.display(), "skipping reserved output file");
            continue;
        }

        documents.push(path.to_path_buf());
    }

    debug!(count = documents.len(), root = %root.display(), "document walk complete");
    Ok(documents)
}
