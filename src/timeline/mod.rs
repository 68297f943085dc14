//! Annotation timeline.
//!
//! This module provides:
//! - The append-only payload table
//! - Typed events and their keys
//! - The event log with its per-key position index
//! - Cursor navigation and nearest-event queries

pub mod cursor;
pub mod event;
pub mod event_log;
pub mod payload;
pub mod search;

// Re-export main types
pub use cursor::Cursor;
pub use event::{Event, EventKind};
pub use event_log::EventLog;
pub use payload::{PayloadRef, PayloadTable};
pub use search::{find_at_or_before, find_next_in_key, find_prev_in_key};
