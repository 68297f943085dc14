//! Output writers for trace snapshots and summaries.
//!
//! This module handles:
//! - JSON snapshots of the loaded model
//! - Text summaries for the terminal

pub mod json;
pub mod schema;
pub mod summary;

// Re-export main functions
pub use json::{read_snapshot, to_snapshot, write_snapshot};
pub use schema::{EventRecord, NodeRecord, TraceSnapshot};
pub use summary::{describe_event, generate_text_summary};

use crate::utils::error::OutputError;
use std::path::Path;

/// Common path validation for output files
pub fn validate_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.exists() && path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}
