//! Selection ranges built from two positions.

use std::cmp::Ordering;

use super::buffer::{Buffer, BufferId};
use super::cursor::{Position, Resolved};
use super::ordering::Ordered;
use crate::error::EditError;
use crate::events::{EventChannel, ListenerId};

/// Emitted when a range's extent changes; listeners re-read `start`/`end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeChange;

/// A text range with an anchor (fixed end) and a head (moving end).
///
/// While not selecting there is no separate anchor: the head is the anchor.
/// [`Range::start_selecting`] forks a copy of the head to serve as anchor.
#[derive(Debug)]
pub struct Range {
    head: Position,
    anchor: Option<Position>,
    changes: EventChannel<RangeChange>,
}

impl Range {
    pub fn new(head: Position) -> Self {
        Self {
            head,
            anchor: None,
            changes: EventChannel::new(),
        }
    }

    pub fn buffer_id(&self) -> BufferId {
        self.head.buffer_id()
    }

    pub fn head(&self) -> &Position {
        &self.head
    }

    /// The anchor, which is the head itself while not selecting
    pub fn anchor(&self) -> &Position {
        self.anchor.as_ref().unwrap_or(&self.head)
    }

    pub fn is_selecting(&self) -> bool {
        self.anchor.is_some()
    }

    /// True when anchor and head sit at the same coordinates
    pub fn is_empty(&self) -> bool {
        self.anchor().coords() == self.head.coords()
    }

    /// Start and end as they land in `buffer` now. Head and anchor are
    /// clamped first and only then ordered, so a range kept across an edit
    /// that shrank the buffer still yields `start <= end`.
    pub fn resolved_bounds(&self, buffer: &Buffer) -> Result<(Resolved, Resolved), EditError> {
        let head = self.head.resolved(buffer)?;
        let anchor = self.anchor().resolved(buffer)?;
        Ok((*head.min(&anchor)?, *head.max(&anchor)?))
    }

    /// Lower of head and anchor by stored coordinates
    pub fn start(&self) -> &Position {
        let anchor = self.anchor();
        if self.head.coords() < anchor.coords() {
            &self.head
        } else {
            anchor
        }
    }

    /// Higher of head and anchor by stored coordinates
    pub fn end(&self) -> &Position {
        let anchor = self.anchor();
        if self.head.coords() > anchor.coords() {
            &self.head
        } else {
            anchor
        }
    }

    /// Number of rows spanned, inclusive
    pub fn rows(&self) -> usize {
        self.end().row() - self.start().row() + 1
    }

    /// Whether `pos` lies in `[start, end)`
    pub fn contains(&self, pos: &Position) -> Result<bool, EditError> {
        EditError::check_same_buffer(self.buffer_id(), pos.buffer_id())?;
        Ok(pos.coords() >= self.start().coords() && pos.coords() < self.end().coords())
    }

    /// Whether two ranges overlap or share a boundary position
    pub fn touches(&self, other: &Range) -> Result<bool, EditError> {
        EditError::check_same_buffer(self.buffer_id(), other.buffer_id())?;
        let disjoint = self.end().is_lower(other.start())? || self.start().is_greater(other.end())?;
        Ok(!disjoint)
    }

    /// Fork the anchor off the head. No-op while already selecting.
    pub fn start_selecting(&mut self) {
        if self.anchor.is_none() {
            self.anchor = Some(self.head.copy());
        }
    }

    /// Collapse onto the head, notifying only if the anchor actually moved
    pub fn stop_selecting(&mut self) {
        if let Some(old_anchor) = self.anchor.take() {
            if old_anchor.coords() != self.head.coords() {
                self.changes.emit(&RangeChange);
            }
        }
    }

    /// Begin a fresh selection at the current head
    pub fn restart_selecting(&mut self) {
        self.stop_selecting();
        self.start_selecting();
    }

    /// Apply a head movement. While selecting, a head that moved also
    /// changes the range and is re-published as a [`RangeChange`].
    pub fn move_head<F>(&mut self, movement: F) -> bool
    where
        F: FnOnce(&mut Position) -> bool,
    {
        let moved = movement(&mut self.head);
        if moved && self.is_selecting() {
            self.changes.emit(&RangeChange);
        }
        moved
    }

    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&RangeChange) + 'static,
    {
        self.changes.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.changes.unsubscribe(id)
    }
}

impl Ordered for Range {
    /// Heads first, anchors as tie-break
    fn compare(&self, other: &Self) -> Result<Ordering, EditError> {
        EditError::check_same_buffer(self.buffer_id(), other.buffer_id())?;
        Ok(self
            .head
            .compare(&other.head)?
            .then(self.anchor().compare(other.anchor())?))
    }
}
