//! Line-oriented text buffer.
//!
//! The document is stored as a vector of lines without terminators. The only
//! mutator is [`Buffer::replace_range_text`], which splices a range and emits a
//! [`BufferChange`] describing which rows were replaced.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

use super::selection::Range;
use crate::error::EditError;
use crate::events::{EventChannel, ListenerId};

/// Process-unique identity of a buffer, carried by every position bound to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BufferId(u64);

impl BufferId {
    pub fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, AtomicOrdering::Relaxed))
    }
}

impl fmt::Display for BufferId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Which rows an edit replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BufferChange {
    /// First row touched by the edit
    pub first_row: usize,
    /// Number of rows removed, starting at `first_row`
    pub del_rows: usize,
    /// Number of rows inserted in their place
    pub new_rows: usize,
    /// Content of the removed rows, captured before the splice
    pub del_lines: Vec<String>,
}

impl BufferChange {
    /// Rows after the edited block shift by this amount
    pub fn row_delta(&self) -> isize {
        self.new_rows as isize - self.del_rows as isize
    }
}

/// A committed splice whose notification and caret placement are still due.
#[derive(Debug)]
pub(crate) struct Splice {
    pub change: BufferChange,
    caret: (usize, usize),
}

/// Byte index of the `offset`-th char, or the string length past the end
pub(crate) fn char_to_byte(text: &str, offset: usize) -> usize {
    text.char_indices()
        .nth(offset)
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}

/// Chars `[start, end)` of `text`
pub(crate) fn char_slice(text: &str, start: usize, end: usize) -> &str {
    let start_byte = char_to_byte(text, start);
    let end_byte = char_to_byte(text, end.max(start));
    &text[start_byte..end_byte]
}

#[derive(Debug)]
pub struct Buffer {
    id: BufferId,
    lines: Vec<String>,
    delimiter: String,
    changes: EventChannel<BufferChange>,
}

impl Buffer {
    /// An empty buffer: one empty line, `\n` delimiter
    pub fn new() -> Self {
        Self::with_delimiter("\n")
    }

    pub fn with_delimiter(delimiter: &str) -> Self {
        Self {
            id: BufferId::next(),
            lines: vec![String::new()],
            delimiter: delimiter.to_string(),
            changes: EventChannel::new(),
        }
    }

    /// Create a buffer holding `text`, without emitting a change
    pub fn from_text(text: &str) -> Self {
        let mut buffer = Self::new();
        buffer.lines = Self::split_text(text);
        buffer
    }

    pub fn id(&self) -> BufferId {
        self.id
    }

    /// Number of lines (always >= 1)
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn clamp_row(&self, row: usize) -> usize {
        row.min(self.lines.len() - 1)
    }

    /// Clamp `offset` against the length of the (clamped) row
    pub fn clamp_offset(&self, row: usize, offset: usize) -> usize {
        offset.min(self.line_len(row))
    }

    /// Line content without terminator; out-of-range rows are clamped
    pub fn line(&self, row: usize) -> &str {
        &self.lines[self.clamp_row(row)]
    }

    /// Length of a line in characters
    pub fn line_len(&self, row: usize) -> usize {
        self.line(row).chars().count()
    }

    pub fn last_line_len(&self) -> usize {
        self.line_len(self.lines.len() - 1)
    }

    /// Up to `count` lines starting at `first`
    pub fn lines(&self, first: usize, count: usize) -> &[String] {
        let first = first.min(self.lines.len());
        let last = first.saturating_add(count).min(self.lines.len());
        &self.lines[first..last]
    }

    /// Whole document joined with the delimiter
    pub fn text(&self) -> String {
        self.lines.join(&self.delimiter)
    }

    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    pub fn set_delimiter(&mut self, delimiter: &str) {
        self.delimiter = delimiter.to_string();
    }

    /// The full rows a range touches
    pub fn range_lines(&self, range: &Range) -> Result<&[String], EditError> {
        let (start, end) = range.resolved_bounds(self)?;
        Ok(&self.lines[start.row..=end.row])
    }

    /// Text covered by a range, rows joined with the delimiter
    pub fn range_text(&self, range: &Range) -> Result<String, EditError> {
        let (start, end) = range.resolved_bounds(self)?;
        let (start_row, start_offset) = start.coords();
        let (end_row, end_offset) = end.coords();

        if start_row == end_row {
            return Ok(char_slice(&self.lines[start_row], start_offset, end_offset).to_string());
        }

        let first = &self.lines[start_row];
        let last = &self.lines[end_row];
        let mut parts = Vec::with_capacity(end_row - start_row + 1);
        parts.push(char_slice(first, start_offset, usize::MAX));
        parts.extend(self.lines[start_row + 1..end_row].iter().map(String::as_str));
        parts.push(char_slice(last, 0, end_offset));
        Ok(parts.join(&self.delimiter))
    }

    /// Split text on `\r\n`, `\r` or `\n`. Always yields at least one line.
    pub fn split_text(text: &str) -> Vec<String> {
        let mut lines = Vec::new();
        let mut current = String::new();
        let mut chars = text.chars().peekable();

        while let Some(ch) = chars.next() {
            match ch {
                '\r' => {
                    if chars.peek() == Some(&'\n') {
                        chars.next();
                    }
                    lines.push(std::mem::take(&mut current));
                }
                '\n' => lines.push(std::mem::take(&mut current)),
                _ => current.push(ch),
            }
        }
        lines.push(current);
        lines
    }

    /// Replace the text covered by `range` with `text`.
    ///
    /// Listeners receive the change after the splice is committed. Afterwards
    /// the range is collapsed and its head sits right after the inserted text.
    pub fn replace_range_text(
        &mut self,
        range: &mut Range,
        text: &str,
    ) -> Result<BufferChange, EditError> {
        let splice = self.splice(range, text)?;
        self.finish_splice(range, &splice);
        Ok(splice.change)
    }

    /// Commit the line splice for an edit without notifying anyone yet
    pub(crate) fn splice(&mut self, range: &Range, text: &str) -> Result<Splice, EditError> {
        let (start, end) = range.resolved_bounds(self)?;
        let (start_row, start_offset) = start.coords();
        let (end_row, end_offset) = end.coords();

        let mut new_lines = Self::split_text(text);
        let del_rows = end_row - start_row + 1;
        let new_rows = new_lines.len();
        let del_lines = self.lines[start_row..=end_row].to_vec();

        let prefix = char_slice(&self.lines[start_row], 0, start_offset).to_string();
        let suffix = char_slice(&self.lines[end_row], end_offset, usize::MAX).to_string();

        new_lines[0].insert_str(0, &prefix);
        let caret_row = start_row + new_rows - 1;
        let last = &mut new_lines[new_rows - 1];
        let caret_offset = last.chars().count();
        last.push_str(&suffix);

        self.lines.splice(start_row..=end_row, new_lines);

        tracing::debug!(
            buffer = %self.id,
            first_row = start_row,
            del_rows,
            new_rows,
            "replaced range text"
        );

        Ok(Splice {
            change: BufferChange {
                first_row: start_row,
                del_rows,
                new_rows,
                del_lines,
            },
            caret: (caret_row, caret_offset),
        })
    }

    /// Notify listeners of a committed splice and place the caret
    pub(crate) fn finish_splice(&mut self, range: &mut Range, splice: &Splice) {
        self.changes.emit(&splice.change);
        range.stop_selecting();
        let (row, offset) = splice.caret;
        range.move_head(|head| head.set(self, row, offset));
    }

    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&BufferChange) + 'static,
    {
        self.changes.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.changes.unsubscribe(id)
    }
}

impl Default for Buffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editable::Position;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn range_at(buffer: &Buffer, row: usize, offset: usize) -> Range {
        let mut head = Position::new(buffer, 4);
        head.set(buffer, row, offset);
        Range::new(head)
    }

    fn select(buffer: &Buffer, from: (usize, usize), to: (usize, usize)) -> Range {
        let mut range = range_at(buffer, from.0, from.1);
        range.start_selecting();
        range.move_head(|head| head.set(buffer, to.0, to.1));
        range
    }

    #[test]
    fn test_new_buffer_has_one_empty_line() {
        let buf = Buffer::new();
        assert_eq!(buf.line_count(), 1);
        assert_eq!(buf.line(0), "");
        assert_eq!(buf.text(), "");
    }

    #[test]
    fn test_split_text_line_terminators() {
        assert_eq!(Buffer::split_text("a\r\nb\rc\nd"), vec!["a", "b", "c", "d"]);
        assert_eq!(Buffer::split_text(""), vec![""]);
        assert_eq!(Buffer::split_text("\n"), vec!["", ""]);
        assert_eq!(Buffer::split_text("x\r"), vec!["x", ""]);
    }

    #[test]
    fn test_clamping() {
        let buf = Buffer::from_text("hello\nhi");
        assert_eq!(buf.clamp_row(9), 1);
        assert_eq!(buf.clamp_offset(1, 9), 2);
        assert_eq!(buf.clamp_offset(9, 9), 2);
        assert_eq!(buf.line(9), "hi");
        assert_eq!(buf.last_line_len(), 2);
    }

    #[test]
    fn test_lines_window_is_clamped() {
        let buf = Buffer::from_text("a\nb\nc");
        assert_eq!(buf.lines(1, 5), ["b", "c"]);
        assert!(buf.lines(7, 2).is_empty());
    }

    #[test]
    fn test_range_text_single_and_multi_line() {
        let buf = Buffer::from_text("héllo\nbig\nworld");
        let single = select(&buf, (0, 1), (0, 4));
        assert_eq!(buf.range_text(&single).unwrap(), "éll");

        let multi = select(&buf, (2, 2), (0, 3));
        assert_eq!(buf.range_text(&multi).unwrap(), "lo\nbig\nwo");
    }

    #[test]
    fn test_range_text_cross_buffer() {
        let buf = Buffer::from_text("abc");
        let other = Buffer::from_text("abc");
        let range = range_at(&other, 0, 1);
        assert!(matches!(
            buf.range_text(&range),
            Err(EditError::CrossBuffer { .. })
        ));
    }

    #[test]
    fn test_insert_in_middle_of_line() {
        let mut buf = Buffer::from_text("hello world");
        let mut range = range_at(&buf, 0, 5);
        let change = buf.replace_range_text(&mut range, ",").unwrap();

        assert_eq!(buf.text(), "hello, world");
        assert_eq!(change.first_row, 0);
        assert_eq!(change.del_rows, 1);
        assert_eq!(change.new_rows, 1);
        assert_eq!(change.del_lines, vec!["hello world"]);
        assert_eq!((range.head().row(), range.head().offset()), (0, 6));
    }

    #[test]
    fn test_replace_selection_with_multiple_lines() {
        let mut buf = Buffer::from_text("one\ntwo\nthree");
        let mut range = select(&buf, (0, 1), (2, 2));
        let change = buf.replace_range_text(&mut range, "X\nY").unwrap();

        assert_eq!(buf.text(), "oX\nYree");
        assert_eq!(change.del_rows, 3);
        assert_eq!(change.new_rows, 2);
        assert_eq!(change.row_delta(), -1);
        assert_eq!(change.del_lines, vec!["one", "two", "three"]);
        assert!(!range.is_selecting());
        assert_eq!((range.head().row(), range.head().offset()), (1, 1));
    }

    #[test]
    fn test_delete_line_break() {
        let mut buf = Buffer::from_text("ab\ncd");
        let mut range = select(&buf, (0, 2), (1, 0));
        buf.replace_range_text(&mut range, "").unwrap();
        assert_eq!(buf.text(), "abcd");
        assert_eq!((range.head().row(), range.head().offset()), (0, 2));
    }

    #[test]
    fn test_listener_sees_committed_buffer_change() {
        let mut buf = Buffer::from_text("abc");
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        buf.subscribe(move |change| sink.borrow_mut().push(change.clone()));

        let mut range = range_at(&buf, 0, 3);
        buf.replace_range_text(&mut range, "\n").unwrap();

        let seen = seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].new_rows, 2);
        assert_eq!(seen[0].del_lines, vec!["abc"]);
    }

    #[test]
    fn test_kept_range_after_buffer_shrinks() {
        let mut buf = Buffer::from_text("abc\ndef");
        let mut kept = select(&buf, (0, 3), (1, 0));
        assert_eq!(buf.range_text(&kept).unwrap(), "\n");

        let mut all = select(&buf, (0, 0), (1, 3));
        buf.replace_range_text(&mut all, "x").unwrap();

        // Both ends clamp onto the end of the only row
        assert_eq!(buf.range_text(&kept).unwrap(), "");
        assert_eq!(buf.range_lines(&kept).unwrap(), ["x"]);
        buf.replace_range_text(&mut kept, "Z").unwrap();
        assert_eq!(buf.text(), "xZ");
        assert_eq!(kept.head().coords(), (0, 2));
    }

    #[test]
    fn test_crlf_delimiter_only_affects_serialization() {
        let mut buf = Buffer::with_delimiter("\r\n");
        let mut range = range_at(&buf, 0, 0);
        buf.replace_range_text(&mut range, "a\nb\r\nc").unwrap();
        assert_eq!(buf.line_count(), 3);
        assert_eq!(buf.text(), "a\r\nb\r\nc");
    }
}
