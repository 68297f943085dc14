//! Show command implementation.
//!
//! Positions the timeline cursor the way a playback view would and
//! prints what that view displays: the current event, its payload and
//! the active group.

use super::models::{SameKeyJump, ShowArgs};
use crate::loader::TraceLoader;
use crate::output::describe_event;
use anyhow::{Context, Result};
use log::debug;

pub fn execute_show(args: ShowArgs) -> Result<()> {
    let mut trace = TraceLoader::load_file(&args.trace)
        .with_context(|| format!("Failed to load trace {}", args.trace.display()))?;

    let timeline = trace.timeline_mut();
    if timeline.is_empty() {
        println!("Timeline is empty");
        return Ok(());
    }

    if let Some(index) = args.index {
        timeline.set_cursor(index);
    } else if let Some(position) = args.position {
        timeline.set_float_position(position);
    }

    let moved = match args.jump {
        Some(SameKeyJump::Next) => timeline.jump_to_next_same_key(),
        Some(SameKeyJump::Prev) => timeline.jump_to_prev_same_key(),
        None => true,
    };
    if !moved {
        debug!("No event with the same key in that direction, cursor unchanged");
    }

    let timeline = trace.timeline();
    let graph = trace.graph();
    println!(
        "Event {}/{} ({:.3})",
        timeline.cursor(),
        timeline.len(),
        timeline.float_position()
    );
    if let Some(event) = timeline.current() {
        println!("  {}", describe_event(graph, event));
        println!("{}", timeline.payload_of(event));
    }

    let group = trace.active_group();
    if group.is_empty() {
        println!("\nNo active group");
    } else {
        println!(
            "\nActive group: {} ({} nodes, {} edges)",
            group,
            graph.active_node_ids(group).len(),
            graph.active_edges(group).len()
        );
    }

    Ok(())
}
