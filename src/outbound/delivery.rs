//! Local file delivery of the rendered document
//!
//! Both channels save a copy on the user's machine: the messaging channel
//! needs the file so the user can attach it by hand, and the email channel
//! keeps it as a receipt.

use crate::render::RenderedDocument;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Fixed prefix of every saved request document
pub const FILE_PREFIX: &str = "طلب_تغطية";

/// Stem used when the event name is blank
pub const EVENT_FALLBACK: &str = "فعالية";

/// Derive the document file name from the event name
pub fn derive_file_name(event_name: &str) -> String {
    let trimmed = event_name.trim();
    let stem = if trimmed.is_empty() {
        EVENT_FALLBACK
    } else {
        trimmed
    };
    format!("{FILE_PREFIX}_{}.pdf", sanitize(stem))
}

/// Replace characters that are path separators or reserved on common
/// filesystems
fn sanitize(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c => c,
        })
        .collect()
}

/// Write the document into `dir`, creating it if needed
pub fn save_document(
    dir: &Path,
    file_name: &str,
    document: &RenderedDocument,
) -> io::Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(file_name);
    fs::write(&path, &document.bytes)?;
    tracing::info!(path = %path.display(), "saved local copy of the document");
    Ok(path)
}
