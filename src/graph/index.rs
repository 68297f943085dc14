//! Qualified node identities, node content and the directed edge set.
//!
//! Node names are `group:local`. Ids are dense and assigned on first
//! reference, so an edge or annotation may create a node before its
//! content is defined.

use crate::utils::config::GROUP_SEPARATOR;
use crate::utils::error::GraphError;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt;

/// Dense node identifier, an index into the node table
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A node of the graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub id: NodeId,
    pub name: String,
    /// Byte offset of the group separator in `name`, if any
    split: Option<usize>,
    pub content: Option<String>,
}

impl Node {
    pub fn group(&self) -> &str {
        match self.split {
            Some(pos) => &self.name[..pos],
            None => &self.name,
        }
    }

    pub fn local(&self) -> &str {
        match self.split {
            Some(pos) => &self.name[pos + 1..],
            None => "",
        }
    }
}

/// Split a qualified name on the first separator
///
/// A name without a separator is a group of its own with an empty local part.
pub fn split_qualified(name: &str) -> (&str, &str) {
    name.split_once(GROUP_SEPARATOR).unwrap_or((name, ""))
}

/// Graph of named, grouped nodes
#[derive(Debug, Clone, Default)]
pub struct GraphIndex {
    nodes: Vec<Node>,
    ids: HashMap<String, NodeId>,
    groups: BTreeMap<String, BTreeSet<NodeId>>,
    edges: BTreeMap<NodeId, BTreeSet<NodeId>>,
    edge_count: usize,
}

impl GraphIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the id for a qualified name, creating it if unseen
    pub fn resolve(&mut self, name: &str) -> NodeId {
        if let Some(&id) = self.ids.get(name) {
            return id;
        }

        let id = NodeId(self.nodes.len());
        let (group, _) = split_qualified(name);
        let split = name.find(GROUP_SEPARATOR);
        debug!("New node {} in group '{}': {}", id, group, name);

        self.groups.entry(group.to_string()).or_default().insert(id);
        self.ids.insert(name.to_string(), id);
        self.nodes.push(Node {
            id,
            name: name.to_string(),
            split,
            content: None,
        });
        id
    }

    /// Look up an id without creating it
    pub fn lookup(&self, name: &str) -> Option<NodeId> {
        self.ids.get(name).copied()
    }

    /// Attach content to a node
    ///
    /// # Errors
    /// * `GraphError::Redefinition` - the node already has content
    pub fn define_content(&mut self, name: &str, content: &str) -> Result<NodeId, GraphError> {
        let id = self.resolve(name);
        let node = &mut self.nodes[id.0];
        if let Some(existing) = &node.content {
            return Err(GraphError::Redefinition {
                name: name.to_string(),
                existing: existing.clone(),
                attempted: content.to_string(),
            });
        }
        node.content = Some(content.to_string());
        Ok(id)
    }

    /// Add a directed edge, resolving both endpoints
    ///
    /// Returns false if the edge was already present.
    pub fn add_edge(&mut self, src: &str, dst: &str) -> bool {
        let src = self.resolve(src);
        let dst = self.resolve(dst);
        let inserted = self.edges.entry(src).or_default().insert(dst);
        if inserted {
            self.edge_count += 1;
        }
        inserted
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    pub fn name_of(&self, id: NodeId) -> Option<&str> {
        self.node(id).map(|node| node.name.as_str())
    }

    pub fn content_of(&self, id: NodeId) -> Option<&str> {
        self.node(id).and_then(|node| node.content.as_deref())
    }

    /// Group of a node; empty for an unknown id
    pub fn group_of(&self, id: NodeId) -> &str {
        self.node(id).map(Node::group).unwrap_or("")
    }

    /// All groups that own at least one node, in sorted order
    pub fn groups(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    /// Ids of every node in `group`, ascending
    pub fn active_node_ids(&self, group: &str) -> Vec<NodeId> {
        self.groups
            .get(group)
            .map(|ids| ids.iter().copied().collect())
            .unwrap_or_default()
    }

    /// Edges whose source belongs to `group`, ordered by (src, dst)
    pub fn active_edges(&self, group: &str) -> Vec<(NodeId, NodeId)> {
        let Some(ids) = self.groups.get(group) else {
            return Vec::new();
        };
        ids.iter()
            .filter_map(|src| self.edges.get(src).map(|dsts| (*src, dsts)))
            .flat_map(|(src, dsts)| dsts.iter().map(move |dst| (src, *dst)))
            .collect()
    }

    /// Every edge in the graph, ordered by (src, dst)
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.edges
            .iter()
            .flat_map(|(src, dsts)| dsts.iter().map(move |dst| (*src, *dst)))
    }

    pub fn successors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.edges.get(&id).into_iter().flatten().copied()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }
}
