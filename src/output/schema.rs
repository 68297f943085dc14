//! Snapshot JSON schema definitions.
//!
//! This module defines the structure of snapshot files we write to disk.
//! Schema is versioned to allow future evolution.

use crate::graph::NodeId;
use crate::timeline::{EventKind, PayloadRef};
use serde::{Deserialize, Serialize};

/// Top-level snapshot of a loaded trace
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceSnapshot {
    /// Schema version for compatibility checking
    pub version: String,

    /// Trace file the snapshot was built from
    pub source: String,

    /// All nodes, indexed by id
    pub nodes: Vec<NodeRecord>,

    /// Directed edges as (src, dst) id pairs
    pub edges: Vec<(NodeId, NodeId)>,

    /// Payload table, indexed by payload reference
    pub payloads: Vec<String>,

    /// Timeline events in log order
    pub events: Vec<EventRecord>,

    /// Timestamp when snapshot was generated
    pub generated_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub id: NodeId,
    pub name: String,
    pub group: String,
    pub local: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    pub position: usize,
    #[serde(flatten)]
    pub kind: EventKind,
    pub tag: String,
    pub payload: PayloadRef,
}
