//! Sail Trace
//!
//! Loads dataflow analysis traces into a graph of grouped nodes and a
//! timeline of annotations, and answers the navigation queries a trace
//! viewer needs.
//!
//! ```
//! use sail_trace::loader::TraceLoader;
//!
//! let trace = TraceLoader::load_str(">>node f:a\nx = 1\n>>nodeinfo f:a\nx: [1,1]\n").unwrap();
//! assert_eq!(trace.graph().node_count(), 1);
//! assert_eq!(trace.timeline().current_payload(), Some("x: [1,1]"));
//! assert_eq!(trace.active_group(), "f");
//! ```

pub mod commands;
pub mod graph;
pub mod loader;
pub mod output;
pub mod parser;
pub mod timeline;
pub mod utils;
pub mod writer;
