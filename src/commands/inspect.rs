//! Inspect and history commands.

use super::models::{HistoryArgs, InspectArgs};
use crate::loader::TraceLoader;
use crate::output::generate_text_summary;
use crate::timeline::EventKind;
use anyhow::{bail, Context, Result};
use log::debug;

/// Load a trace and print its summary
pub fn execute_inspect(args: InspectArgs) -> Result<()> {
    let trace = TraceLoader::load_file(&args.trace)
        .with_context(|| format!("Failed to load trace {}", args.trace.display()))?;

    println!("{}", generate_text_summary(&trace, args.max_groups));
    Ok(())
}

/// Print the annotation history of one node
pub fn execute_history(args: HistoryArgs) -> Result<()> {
    let trace = TraceLoader::load_file(&args.trace)
        .with_context(|| format!("Failed to load trace {}", args.trace.display()))?;

    let Some(node) = trace.graph().lookup(&args.node) else {
        bail!("Node {} does not appear in {}", args.node, trace.source());
    };

    let timeline = trace.timeline();
    let key = EventKind::NodeInfo { node };
    let at = args.at.unwrap_or(timeline.len().saturating_sub(1));
    debug!("History of {} up to position {}", args.node, at);

    println!("Annotations on {}:", args.node);
    for &position in timeline.positions_of(key).iter().take_while(|&&pos| pos <= at) {
        if let Some(event) = timeline.event(position) {
            println!(
                "  [{}] {}: {}",
                position,
                if event.tag.is_empty() { "-" } else { event.tag.as_str() },
                first_line(timeline.payload_of(event))
            );
        }
    }

    match timeline.value_at_or_before(key, at) {
        Some(value) => println!("\nValue at {}:\n{}", at, value),
        None => println!("\nNo annotation at or before {}", at),
    }

    Ok(())
}

fn first_line(text: &str) -> &str {
    text.lines().next().unwrap_or("")
}
