//! Trace loading.
//!
//! Drives the instruction parser and populates the graph index and the
//! event log in one pass.

pub mod trace;
pub mod trace_loader;

pub use trace::{GroupStats, Trace, TraceStats};
pub use trace_loader::TraceLoader;
