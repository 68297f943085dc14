//! Append-only payload storage.
//!
//! Events refer to payloads by index so a back-referenced annotation
//! shares the string of the event it copies.

use serde::{Deserialize, Serialize};

/// Index into a `PayloadTable`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PayloadRef(pub usize);

#[derive(Debug, Clone, Default)]
pub struct PayloadTable {
    entries: Vec<String>,
}

impl PayloadTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a payload and return its reference
    pub fn push(&mut self, payload: String) -> PayloadRef {
        self.entries.push(payload);
        PayloadRef(self.entries.len() - 1)
    }

    pub fn get(&self, payload: PayloadRef) -> Option<&str> {
        self.entries.get(payload.0).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Total stored payload size in bytes
    pub fn total_bytes(&self) -> usize {
        self.entries.iter().map(String::len).sum()
    }
}
