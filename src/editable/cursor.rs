//! Cursor positions bound to a buffer.
//!
//! A [`Position`] is a `(row, offset)` pair that is clamped against its buffer
//! on every write. Every movement goes through [`Position::set`], so a move
//! produces at most one [`PositionChange`] notification.

use std::cmp::Ordering;

use super::buffer::{Buffer, BufferId};
use super::column;
use super::ordering::Ordered;
use crate::error::EditError;
use crate::events::{EventChannel, ListenerId};
use crate::syntax::Tokenizer;

/// Rows moved by [`Position::page_up`] and [`Position::page_down`] by default
pub const PAGE_ROWS: usize = 50;

/// Old and new coordinates of a position that moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionChange {
    pub old_row: usize,
    pub old_offset: usize,
    pub new_row: usize,
    pub new_offset: usize,
}

/// A position's coordinates clamped against the buffer at one point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved {
    buffer: BufferId,
    pub row: usize,
    pub offset: usize,
}

impl Resolved {
    pub fn coords(&self) -> (usize, usize) {
        (self.row, self.offset)
    }
}

impl Ordered for Resolved {
    fn compare(&self, other: &Self) -> Result<Ordering, EditError> {
        EditError::check_same_buffer(self.buffer, other.buffer)?;
        Ok(self.coords().cmp(&other.coords()))
    }
}

#[derive(Debug)]
pub struct Position {
    row: usize,
    offset: usize,
    buffer: BufferId,
    tab_width: usize,
    changes: EventChannel<PositionChange>,
}

impl Position {
    /// A position at the start of `buffer`
    pub fn new(buffer: &Buffer, tab_width: usize) -> Self {
        Self {
            row: 0,
            offset: 0,
            buffer: buffer.id(),
            tab_width: tab_width.max(1),
            changes: EventChannel::new(),
        }
    }

    /// An independent copy: same coordinates, no listeners
    pub fn copy(&self) -> Self {
        Self {
            row: self.row,
            offset: self.offset,
            buffer: self.buffer,
            tab_width: self.tab_width,
            changes: EventChannel::new(),
        }
    }

    pub fn buffer_id(&self) -> BufferId {
        self.buffer
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn coords(&self) -> (usize, usize) {
        (self.row, self.offset)
    }

    pub fn tab_width(&self) -> usize {
        self.tab_width
    }

    pub fn set_tab_width(&mut self, tab_width: usize) {
        self.tab_width = tab_width.max(1);
    }

    /// Coordinates clamped against the buffer as it is now
    pub fn resolve(&self, buffer: &Buffer) -> (usize, usize) {
        let row = buffer.clamp_row(self.row);
        (row, buffer.clamp_offset(row, self.offset))
    }

    /// [`Position::resolve`] carrying the buffer identity, so the result can
    /// be ordered
    pub fn resolved(&self, buffer: &Buffer) -> Result<Resolved, EditError> {
        EditError::check_same_buffer(self.buffer, buffer.id())?;
        let (row, offset) = self.resolve(buffer);
        Ok(Resolved {
            buffer: self.buffer,
            row,
            offset,
        })
    }

    /// Order two positions by where they land in `buffer` now, rather than by
    /// their stored coordinates
    pub fn compare_in(&self, other: &Self, buffer: &Buffer) -> Result<Ordering, EditError> {
        self.resolved(buffer)?.compare(&other.resolved(buffer)?)
    }

    /// Visual column of this position
    pub fn col(&self, buffer: &Buffer) -> usize {
        column::offset_to_col(buffer.line(self.row), self.offset, self.tab_width)
    }

    pub fn is_at_line_start(&self) -> bool {
        self.offset == 0
    }

    pub fn is_at_line_end(&self, buffer: &Buffer) -> bool {
        self.offset == buffer.line_len(self.row)
    }

    /// Move to `(row, offset)`, clamped. Returns whether the position changed.
    pub fn set(&mut self, buffer: &Buffer, row: usize, offset: usize) -> bool {
        debug_assert_eq!(self.buffer, buffer.id(), "position used with a foreign buffer");

        let (old_row, old_offset) = (self.row, self.offset);
        self.row = buffer.clamp_row(row);
        self.offset = buffer.clamp_offset(self.row, offset);

        if (self.row, self.offset) == (old_row, old_offset) {
            return false;
        }

        self.changes.emit(&PositionChange {
            old_row,
            old_offset,
            new_row: self.row,
            new_offset: self.offset,
        });
        true
    }

    /// Move to the offset of `row` whose visual column is closest to `col`
    pub fn goto_row_col(&mut self, buffer: &Buffer, row: usize, col: usize) -> bool {
        let offset = column::col_to_offset(buffer.line(row), col, self.tab_width);
        self.set(buffer, row, offset)
    }

    pub fn goto_start(&mut self, buffer: &Buffer) -> bool {
        self.set(buffer, 0, 0)
    }

    pub fn goto_end(&mut self, buffer: &Buffer) -> bool {
        self.set(buffer, buffer.line_count() - 1, buffer.last_line_len())
    }

    pub fn goto_line_start(&mut self, buffer: &Buffer) -> bool {
        self.set(buffer, self.row, 0)
    }

    pub fn goto_line_end(&mut self, buffer: &Buffer) -> bool {
        self.set(buffer, self.row, buffer.line_len(self.row))
    }

    /// Snap to the start of the token under the cursor
    pub fn goto_token_start(&mut self, buffer: &Buffer, tokenizer: &Tokenizer) -> bool {
        match tokenizer.token_at(buffer, self.row, self.offset) {
            Some(token) => {
                let offset = token.offset;
                self.set(buffer, self.row, offset)
            }
            None => false,
        }
    }

    /// Snap to the end of the token under the cursor
    pub fn goto_token_end(&mut self, buffer: &Buffer, tokenizer: &Tokenizer) -> bool {
        match tokenizer.token_at(buffer, self.row, self.offset) {
            Some(token) => {
                let offset = token.end();
                self.set(buffer, self.row, offset)
            }
            None => false,
        }
    }

    /// One character left, wrapping to the end of the previous line
    pub fn left(&mut self, buffer: &Buffer) -> bool {
        if self.offset > 0 {
            self.set(buffer, self.row, self.offset - 1)
        } else if self.row > 0 {
            self.set(buffer, self.row - 1, buffer.line_len(self.row - 1))
        } else {
            false
        }
    }

    /// One character right, wrapping to the start of the next line
    pub fn right(&mut self, buffer: &Buffer) -> bool {
        if self.offset < buffer.line_len(self.row) {
            self.set(buffer, self.row, self.offset + 1)
        } else if self.row + 1 < buffer.line_count() {
            self.set(buffer, self.row + 1, 0)
        } else {
            false
        }
    }

    /// One row up at the same visual column; line start on the first row
    pub fn up(&mut self, buffer: &Buffer) -> bool {
        if self.row == 0 {
            self.set(buffer, 0, 0)
        } else {
            let col = self.col(buffer);
            self.goto_row_col(buffer, self.row - 1, col)
        }
    }

    /// One row down at the same visual column; line end on the last row
    pub fn down(&mut self, buffer: &Buffer) -> bool {
        if self.row + 1 >= buffer.line_count() {
            self.set(buffer, self.row, buffer.line_len(self.row))
        } else {
            let col = self.col(buffer);
            self.goto_row_col(buffer, self.row + 1, col)
        }
    }

    pub fn page_up(&mut self, buffer: &Buffer, rows: usize) -> bool {
        let col = self.col(buffer);
        self.goto_row_col(buffer, self.row.saturating_sub(rows), col)
    }

    pub fn page_down(&mut self, buffer: &Buffer, rows: usize) -> bool {
        let col = self.col(buffer);
        self.goto_row_col(buffer, self.row.saturating_add(rows), col)
    }

    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&PositionChange) + 'static,
    {
        self.changes.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.changes.unsubscribe(id)
    }
}

impl Ordered for Position {
    fn compare(&self, other: &Self) -> Result<Ordering, EditError> {
        EditError::check_same_buffer(self.buffer, other.buffer)?;
        Ok(self.coords().cmp(&other.coords()))
    }
}
