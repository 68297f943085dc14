//! JSON snapshot writer.
//!
//! Converts a loaded trace to a `TraceSnapshot` and writes it to disk.

use super::schema::{EventRecord, NodeRecord, TraceSnapshot};
use crate::loader::Trace;
use crate::utils::config::SCHEMA_VERSION;
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Build the serializable snapshot of a trace
///
/// **Public** - used by the export command
pub fn to_snapshot(trace: &Trace) -> TraceSnapshot {
    use chrono::Utc;

    let graph = trace.graph();
    let timeline = trace.timeline();

    let nodes = graph
        .nodes()
        .map(|node| NodeRecord {
            id: node.id,
            name: node.name.clone(),
            group: node.group().to_string(),
            local: node.local().to_string(),
            content: node.content.clone(),
        })
        .collect();

    let events = timeline
        .events()
        .iter()
        .enumerate()
        .map(|(position, event)| EventRecord {
            position,
            kind: event.kind,
            tag: event.tag.clone(),
            payload: event.payload,
        })
        .collect();

    TraceSnapshot {
        version: SCHEMA_VERSION.to_string(),
        source: trace.source().to_string(),
        nodes,
        edges: graph.edges().collect(),
        payloads: timeline.payload_table().iter().map(str::to_string).collect(),
        events,
        generated_at: Utc::now().to_rfc3339(),
    }
}

/// Write a snapshot to a JSON file
///
/// **Public** - main entry point for JSON output
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
pub fn write_snapshot(
    snapshot: &TraceSnapshot,
    output_path: impl AsRef<Path>,
) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing snapshot to: {}", output_path.display());

    super::validate_path(output_path)?;

    // Create parent directories if needed
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, snapshot).map_err(OutputError::SerializationFailed)?;

    info!(
        "Snapshot written successfully ({} bytes)",
        calculate_file_size(output_path)
    );

    Ok(())
}

/// Read a snapshot from a JSON file
///
/// **Public** - useful for validation and testing
pub fn read_snapshot(input_path: impl AsRef<Path>) -> Result<TraceSnapshot, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading snapshot from: {}", input_path.display());

    let file = File::open(input_path).map_err(OutputError::ReadFailed)?;
    let snapshot: TraceSnapshot =
        serde_json::from_reader(file).map_err(OutputError::SerializationFailed)?;

    debug!(
        "Snapshot loaded: version {}, {} nodes, {} events",
        snapshot.version,
        snapshot.nodes.len(),
        snapshot.events.len()
    );

    Ok(snapshot)
}

/// Calculate file size in bytes
///
/// **Private** - internal utility
fn calculate_file_size(path: &Path) -> u64 {
    std::fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}
