//! Export command implementation.

use super::models::ExportArgs;
use crate::loader::TraceLoader;
use crate::output::{to_snapshot, write_snapshot};
use anyhow::{Context, Result};
use log::info;

/// Load a trace and write its JSON snapshot
pub fn execute_export(args: ExportArgs) -> Result<()> {
    let trace = TraceLoader::load_file(&args.trace)
        .with_context(|| format!("Failed to load trace {}", args.trace.display()))?;

    let snapshot = to_snapshot(&trace);
    write_snapshot(&snapshot, &args.output).context("Failed to write snapshot JSON")?;

    info!("✓ Snapshot written to: {}", args.output.display());
    Ok(())
}
