//! Document text acquisition: source file -> ordered line sequence.
//!
//! This is the collaborator boundary around the core: extraction and
//! comparison only ever see a completed `Vec<String>`. Errors here stay
//! here; a caller that wants the fail-soft pipeline maps them to an
//! empty sequence, which every downstream stage tolerates.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::DocumentError;

/// Read a source document into lines, dispatching on file extension.
///
/// Supported: `.pdf` (embedded text) and `.txt`.
pub fn extract_lines(path: &Path) -> Result<Vec<String>, DocumentError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match extension.as_str() {
        "pdf" => extract_pdf_lines(path),
        "txt" => read_text_lines(path),
        other => Err(DocumentError::Unsupported(other.to_string())),
    }
}

/// Extract the embedded text of a PDF and split it into lines.
pub fn extract_pdf_lines(path: &Path) -> Result<Vec<String>, DocumentError> {
    let text = pdf_extract::extract_text(path)
        .map_err(|e| DocumentError::Read(e.to_string()))?;

    if text.trim().is_empty() {
        return Err(DocumentError::NoText);
    }

    let lines: Vec<String> = text.lines().map(str::to_string).collect();
    debug!("extracted {} lines from {}", lines.len(), path.display());
    Ok(lines)
}

/// Read a plain-text document into lines.
pub fn read_text_lines(path: &Path) -> Result<Vec<String>, DocumentError> {
    let text = fs::read_to_string(path).map_err(|e| DocumentError::Read(e.to_string()))?;

    if text.trim().is_empty() {
        return Err(DocumentError::NoText);
    }

    let lines: Vec<String> = text.lines().map(str::to_string).collect();
    debug!("read {} lines from {}", lines.len(), path.display());
    Ok(lines)
}
