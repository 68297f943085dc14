//! Configuration and constants for the trace format and CLI.

/// Prefix marking the first line of every instruction
pub const INSTRUCTION_MARKER: &str = ">>";

/// Separates the group from the local part of a qualified node name
pub const GROUP_SEPARATOR: char = ':';

/// Characters that split header fields
pub const HEADER_SEPARATORS: &[char] = &[' ', '\t'];

/// Current snapshot schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Source label used for traces loaded from memory
pub const IN_MEMORY_SOURCE: &str = "<memory>";

/// Number of rows printed in text summaries
pub const DEFAULT_SUMMARY_ROWS: usize = 10;

// Writer conventions for group selection
// Each selected group gets an anchor node so the viewer can switch to it
pub const GROUP_ANCHOR_PREFIX: &str = "GroupAnchor_";
pub const GROUP_ANCHOR_TAG: &str = "entry";
