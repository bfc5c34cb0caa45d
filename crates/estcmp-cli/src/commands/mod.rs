//! CLI subcommands.

pub mod compare;
pub mod config;
pub mod diff;
pub mod extract;

use std::path::Path;

use tracing::warn;

use estcmp_core::document;
use estcmp_core::error::DocumentError;
use estcmp_core::models::config::EstcmpConfig;

/// Load the extraction configuration, falling back to defaults when no
/// path is given.
pub(crate) fn load_config(config_path: Option<&str>) -> anyhow::Result<EstcmpConfig> {
    match config_path {
        Some(path) => Ok(EstcmpConfig::from_file(Path::new(path))?),
        None => Ok(EstcmpConfig::default()),
    }
}

/// Read a document's lines. A readable document with no extractable
/// text degrades to an empty sequence; unreadable input is an error.
pub(crate) fn load_lines(path: &Path) -> anyhow::Result<Vec<String>> {
    match document::extract_lines(path) {
        Ok(lines) => Ok(lines),
        Err(DocumentError::NoText) => {
            warn!("no extractable text in {}, continuing with empty document", path.display());
            Ok(Vec::new())
        }
        Err(e) => Err(anyhow::anyhow!("{}: {}", path.display(), e)),
    }
}
