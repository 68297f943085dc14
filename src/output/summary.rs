//! Plain-text reports for the terminal.

use crate::graph::GraphIndex;
use crate::loader::Trace;
use crate::timeline::{Event, EventKind};

/// Render the overview printed by `inspect`
pub fn generate_text_summary(trace: &Trace, max_groups: usize) -> String {
    let stats = trace.stats();
    let mut lines = Vec::new();

    lines.push(format!("  TRACE {}", trace.source()));
    lines.push(format!(
        "  Nodes: {} ({} without content)   Edges: {}",
        stats.nodes, stats.nodes_without_content, stats.edges
    ));
    lines.push(format!(
        "  Events: {} (global {}, node {}, edge {})",
        stats.events, stats.global_events, stats.node_events, stats.edge_events
    ));

    let dedup = if stats.events > 0 {
        stats.back_references as f64 / stats.events as f64 * 100.0
    } else {
        0.0
    };
    lines.push(format!(
        "  Payloads: {} ({} bytes), {} back-referenced events ({:.1}%)",
        stats.payloads, stats.payload_bytes, stats.back_references, dedup
    ));

    if !stats.groups.is_empty() {
        lines.push(String::new());
        lines.push("  ┏━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━┳━━━━━━━━━━┳━━━━━━━━━━┓".to_string());
        lines.push(format!("  ┃ {:<40} ┃ {:^8} ┃ {:^8} ┃", "Group", "NODES", "EDGES"));
        lines.push("  ┣━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━╋━━━━━━━━━━╋━━━━━━━━━━┫".to_string());
        for group in stats.groups.iter().take(max_groups) {
            lines.push(format!(
                "  ┃ {:<40} ┃ {:>8} ┃ {:>8} ┃",
                truncate(&group.name, 40),
                group.nodes,
                group.edges
            ));
        }
        lines.push("  ┗━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━┻━━━━━━━━━━┻━━━━━━━━━━┛".to_string());
        if stats.groups.len() > max_groups {
            lines.push(format!("  ... {} more groups", stats.groups.len() - max_groups));
        }
    }

    lines.join("\n")
}

/// One-line description of an event's target
pub fn describe_event(graph: &GraphIndex, event: &Event) -> String {
    let name = |id| graph.name_of(id).unwrap_or("?").to_string();
    let target = match event.kind {
        EventKind::Global => "global".to_string(),
        EventKind::NodeInfo { node } => format!("node {}", name(node)),
        EventKind::EdgeInfo { src, dst } => format!("edge {} -> {}", name(src), name(dst)),
    };
    if event.tag.is_empty() {
        target
    } else {
        format!("{} [{}]", target, event.tag)
    }
}

fn truncate(text: &str, width: usize) -> String {
    let count = text.chars().count();
    if count > width {
        let tail: String = text.chars().skip(count + 3 - width).collect();
        format!("...{}", tail)
    } else {
        text.to_string()
    }
}
