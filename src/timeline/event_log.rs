//! The event log: ordered annotations, payload table and per-key index.

use super::cursor::Cursor;
use super::event::{Event, EventKind};
use super::payload::{PayloadRef, PayloadTable};
use super::search::{find_at_or_before, find_prev_in_key};
use crate::graph::GraphIndex;
use crate::utils::error::TimelineError;
use std::collections::HashMap;

/// Append-only timeline of annotation events
///
/// Besides the events themselves the log keeps, for every key, the
/// ascending list of positions where that key occurs. Positions are only
/// ever appended, so each list stays sorted without extra work.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<Event>,
    payloads: PayloadTable,
    index: HashMap<EventKind, Vec<usize>>,
    back_references: usize,
    cursor: Cursor,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event carrying a new payload
    ///
    /// Returns the position of the new event.
    pub fn append_with_value(
        &mut self,
        kind: EventKind,
        tag: impl Into<String>,
        payload: impl Into<String>,
    ) -> usize {
        let payload = self.payloads.push(payload.into());
        self.push_event(kind, tag.into(), payload)
    }

    /// Append an event reusing the payload of the latest event with the same key
    ///
    /// # Errors
    /// * `TimelineError::DanglingBackReference` - the key has no earlier event
    pub fn append_with_back_reference(
        &mut self,
        kind: EventKind,
        tag: impl Into<String>,
    ) -> Result<usize, TimelineError> {
        let position = self.events.len();
        let previous = find_prev_in_key(self.positions_of(kind), position)
            .ok_or(TimelineError::DanglingBackReference { key: kind })?;
        let payload = self.events[previous].payload;
        self.back_references += 1;
        Ok(self.push_event(kind, tag.into(), payload))
    }

    fn push_event(&mut self, kind: EventKind, tag: String, payload: PayloadRef) -> usize {
        let position = self.events.len();
        self.events.push(Event { kind, tag, payload });
        self.index.entry(kind).or_default().push(position);
        position
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn event(&self, position: usize) -> Option<&Event> {
        self.events.get(position)
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn payload_table(&self) -> &PayloadTable {
        &self.payloads
    }

    pub fn payload(&self, payload: PayloadRef) -> Option<&str> {
        self.payloads.get(payload)
    }

    /// Payload string of an event from this log
    pub fn payload_of(&self, event: &Event) -> &str {
        self.payloads.get(event.payload).unwrap_or_default()
    }

    /// Ascending positions where `key` occurs
    pub fn positions_of(&self, key: EventKind) -> &[usize] {
        self.index.get(&key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of events appended through a back-reference
    pub fn back_reference_count(&self) -> usize {
        self.back_references
    }

    /// Payload of the nearest event with `key` at or before `position`
    pub fn value_at_or_before(&self, key: EventKind, position: usize) -> Option<&str> {
        let found = find_at_or_before(self.positions_of(key), position)?;
        self.event(found).map(|event| self.payload_of(event))
    }

    // Navigation through the embedded cursor

    pub fn cursor(&self) -> usize {
        self.cursor.position()
    }

    /// A detached copy of the embedded cursor for independent navigation
    pub fn detached_cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn current(&self) -> Option<&Event> {
        self.cursor.current(self)
    }

    pub fn current_payload(&self) -> Option<&str> {
        self.current().map(|event| self.payload_of(event))
    }

    pub fn set_cursor(&mut self, position: usize) {
        self.navigate(|cursor, log| cursor.set_position(log, position));
    }

    pub fn move_to_next(&mut self) -> bool {
        self.navigate(|cursor, log| cursor.move_to_next(log))
    }

    pub fn move_to_prev(&mut self) -> bool {
        self.navigate(|cursor, _| cursor.move_to_prev())
    }

    pub fn set_float_position(&mut self, p: f64) {
        self.navigate(|cursor, log| cursor.set_float_position(log, p));
    }

    pub fn float_position(&self) -> f64 {
        self.cursor.float_position(self)
    }

    pub fn jump_to_next_same_key(&mut self) -> bool {
        self.navigate(|cursor, log| cursor.jump_to_next_same_key(log))
    }

    pub fn jump_to_prev_same_key(&mut self) -> bool {
        self.navigate(|cursor, log| cursor.jump_to_prev_same_key(log))
    }

    pub fn active_group<'g>(&self, graph: &'g GraphIndex) -> &'g str {
        self.cursor.active_group(self, graph)
    }

    fn navigate<R>(&mut self, step: impl FnOnce(&mut Cursor, &EventLog) -> R) -> R {
        let mut cursor = self.cursor;
        let result = step(&mut cursor, self);
        self.cursor = cursor;
        result
    }
}
