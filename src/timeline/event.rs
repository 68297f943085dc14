//! Timeline event types.

use super::payload::PayloadRef;
use crate::graph::NodeId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What an annotation is attached to
///
/// This is also the event key: two events share a key when they have the
/// same kind and node ids, whatever their tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EventKind {
    Global,
    NodeInfo { node: NodeId },
    EdgeInfo { src: NodeId, dst: NodeId },
}

impl EventKind {
    /// First node of the key, if any
    pub fn primary_node(self) -> Option<NodeId> {
        match self {
            Self::Global => None,
            Self::NodeInfo { node } => Some(node),
            Self::EdgeInfo { src, .. } => Some(src),
        }
    }

    pub fn is_global(self) -> bool {
        matches!(self, Self::Global)
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Global => write!(f, "global info"),
            Self::NodeInfo { node } => write!(f, "node {} info", node),
            Self::EdgeInfo { src, dst } => write!(f, "edge {} -> {} info", src, dst),
        }
    }
}

/// A single annotation on the timeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub kind: EventKind,
    pub tag: String,
    pub payload: PayloadRef,
}

impl Event {
    pub fn key(&self) -> EventKind {
        self.kind
    }
}
