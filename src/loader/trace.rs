//! The loaded, query-ready trace model.

use crate::graph::GraphIndex;
use crate::timeline::{EventKind, EventLog};
use serde::{Deserialize, Serialize};

/// Graph and timeline of one loaded trace
///
/// Both structures are fixed after loading; only the timeline cursor moves.
#[derive(Debug, Clone)]
pub struct Trace {
    source: String,
    graph: GraphIndex,
    timeline: EventLog,
}

impl Trace {
    pub(crate) fn new(source: String, graph: GraphIndex, timeline: EventLog) -> Self {
        Self {
            source,
            graph,
            timeline,
        }
    }

    /// File the trace was read from, or `<memory>`
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn graph(&self) -> &GraphIndex {
        &self.graph
    }

    pub fn timeline(&self) -> &EventLog {
        &self.timeline
    }

    /// Timeline access for cursor navigation
    pub fn timeline_mut(&mut self) -> &mut EventLog {
        &mut self.timeline
    }

    /// Active group at the timeline cursor
    pub fn active_group(&self) -> &str {
        self.timeline.active_group(&self.graph)
    }

    pub fn into_parts(self) -> (GraphIndex, EventLog) {
        (self.graph, self.timeline)
    }

    /// Summary counts for reporting
    pub fn stats(&self) -> TraceStats {
        let mut stats = TraceStats {
            nodes: self.graph.node_count(),
            nodes_without_content: self
                .graph
                .nodes()
                .filter(|node| node.content.is_none())
                .count(),
            edges: self.graph.edge_count(),
            groups: self
                .graph
                .groups()
                .map(|group| GroupStats {
                    name: group.to_string(),
                    nodes: self.graph.active_node_ids(group).len(),
                    edges: self.graph.active_edges(group).len(),
                })
                .collect(),
            events: self.timeline.len(),
            payloads: self.timeline.payload_table().len(),
            payload_bytes: self.timeline.payload_table().total_bytes(),
            back_references: self.timeline.back_reference_count(),
            ..TraceStats::default()
        };

        for event in self.timeline.events() {
            match event.kind {
                EventKind::Global => stats.global_events += 1,
                EventKind::NodeInfo { .. } => stats.node_events += 1,
                EventKind::EdgeInfo { .. } => stats.edge_events += 1,
            }
        }

        stats
    }
}

/// Per-group node and edge counts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupStats {
    pub name: String,
    pub nodes: usize,
    pub edges: usize,
}

/// Summary statistics of a loaded trace
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceStats {
    pub nodes: usize,
    pub nodes_without_content: usize,
    pub edges: usize,
    pub groups: Vec<GroupStats>,
    pub events: usize,
    pub global_events: usize,
    pub node_events: usize,
    pub edge_events: usize,
    pub payloads: usize,
    pub payload_bytes: usize,
    pub back_references: usize,
}
