//! Playback position over an event log.
//!
//! A `Cursor` is a plain position, so any number of readers can navigate
//! one shared log independently. `EventLog` embeds one for the main view.

use super::event::Event;
use super::event_log::EventLog;
use super::search::{find_next_in_key, find_prev_in_key};
use crate::graph::GraphIndex;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    position: usize,
}

impl Cursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cursor at `position`, clamped to the log
    pub fn at(log: &EventLog, position: usize) -> Self {
        let mut cursor = Self::new();
        cursor.set_position(log, position);
        cursor
    }

    /// Current position; 0 on an empty log
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn set_position(&mut self, log: &EventLog, position: usize) {
        self.position = position.min(log.len().saturating_sub(1));
    }

    /// Event under the cursor, `None` on an empty log
    pub fn current<'a>(&self, log: &'a EventLog) -> Option<&'a Event> {
        log.event(self.position)
    }

    /// Step forward; returns false at the last event
    pub fn move_to_next(&mut self, log: &EventLog) -> bool {
        if self.position + 1 < log.len() {
            self.position += 1;
            true
        } else {
            false
        }
    }

    /// Step back; returns false at the first event
    pub fn move_to_prev(&mut self) -> bool {
        if self.position > 0 {
            self.position -= 1;
            true
        } else {
            false
        }
    }

    /// Scrubber position in `[0, 1]`: `floor(p * len)`, clamped
    pub fn set_float_position(&mut self, log: &EventLog, p: f64) {
        let len = log.len();
        if len == 0 {
            self.position = 0;
            return;
        }
        let p = if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) };
        let mut position = (p * len as f64).floor() as usize;
        // The product can round either way; settle on the largest
        // position whose float view does not exceed `p`
        if position > 0 && position as f64 / len as f64 > p {
            position -= 1;
        } else if (position + 1) as f64 / len as f64 <= p {
            position += 1;
        }
        self.position = position.min(len - 1);
    }

    /// `position / len`, 0.0 on an empty log
    pub fn float_position(&self, log: &EventLog) -> f64 {
        match log.len() {
            0 => 0.0,
            len => self.position as f64 / len as f64,
        }
    }

    /// Move to the next event sharing the current event's key
    ///
    /// Returns false, leaving the cursor unchanged, if there is none.
    pub fn jump_to_next_same_key(&mut self, log: &EventLog) -> bool {
        let Some(event) = self.current(log) else {
            return false;
        };
        match find_next_in_key(log.positions_of(event.key()), self.position) {
            Some(position) => {
                self.position = position;
                true
            }
            None => false,
        }
    }

    /// Move to the previous event sharing the current event's key
    pub fn jump_to_prev_same_key(&mut self, log: &EventLog) -> bool {
        let Some(event) = self.current(log) else {
            return false;
        };
        match find_prev_in_key(log.positions_of(event.key()), self.position) {
            Some(position) => {
                self.position = position;
                true
            }
            None => false,
        }
    }

    /// Group of the latest node or edge event at or before the cursor
    ///
    /// Global events are skipped. Empty if there is no such event.
    pub fn active_group<'g>(&self, log: &EventLog, graph: &'g GraphIndex) -> &'g str {
        let end = match log.len() {
            0 => return "",
            len => self.position.min(len - 1),
        };
        log.events()[..=end]
            .iter()
            .rev()
            .find_map(|event| event.kind.primary_node())
            .map(|node| graph.group_of(node))
            .unwrap_or("")
    }
}
