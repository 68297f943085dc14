//! Graph of grouped nodes and directed edges.
//!
//! Groups are namespaces for node names (for example one function's
//! control-flow graph). Renderers query one group at a time.

pub mod index;

pub use index::{split_qualified, GraphIndex, Node, NodeId};
