//! Error types for the estcmp-core library.

use thiserror::Error;

/// Main error type for the estcmp library.
#[derive(Error, Debug)]
pub enum EstcmpError {
    /// Document acquisition error.
    #[error("document error: {0}")]
    Document(#[from] DocumentError),

    /// Report export error.
    #[error("export error: {0}")]
    Export(#[from] ExportError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors surfaced while turning a source document into text lines.
///
/// Extraction and comparison never raise these; a caller that wants the
/// fail-soft behavior maps them to an empty line sequence before
/// building a hierarchy.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// Failed to open or parse the source document.
    #[error("failed to read document: {0}")]
    Read(String),

    /// The document parsed but contained no extractable text.
    #[error("no extractable text in document")]
    NoText,

    /// The file extension is not a supported document type.
    #[error("unsupported document type: {0}")]
    Unsupported(String),
}

/// Errors related to report export.
#[derive(Error, Debug)]
pub enum ExportError {
    /// CSV serialization failed.
    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),

    /// Exported bytes were not valid UTF-8.
    #[error("invalid UTF-8 in exported data: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// I/O error while flushing the export writer.
    #[error("I/O error during export: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the estcmp library.
pub type Result<T> = std::result::Result<T, EstcmpError>;
