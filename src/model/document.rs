//! Document model - the text buffer and its token cache, kept row-aligned

use crate::editable::{Buffer, BufferChange, Range};
use crate::error::EditError;
use crate::events::ListenerId;
use crate::syntax::{Grammar, RowChange, Tokenizer};

/// Result of an edit applied through [`Document::replace_range_text`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentEdit {
    pub change: BufferChange,
    /// A propagation job must be scheduled to drive [`Document::propagate_step`]
    pub needs_propagation: bool,
}

/// Buffer and tokenizer updated together.
///
/// Every edit splices the buffer, brings the token cache in line and only
/// then notifies buffer listeners, so no observer ever sees the two with a
/// different number of rows.
#[derive(Debug)]
pub struct Document {
    buffer: Buffer,
    tokenizer: Tokenizer,
}

impl Document {
    /// An empty document lexed with `grammar`
    pub fn new(grammar: Box<dyn Grammar>) -> Self {
        Self::from_buffer(Buffer::new(), grammar)
    }

    /// Wrap an existing buffer and lex all of it
    pub fn from_buffer(buffer: Buffer, grammar: Box<dyn Grammar>) -> Self {
        let mut tokenizer = Tokenizer::new(grammar);
        tokenizer.rebuild(&buffer);
        Self { buffer, tokenizer }
    }

    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    pub fn set_delimiter(&mut self, delimiter: &str) {
        self.buffer.set_delimiter(delimiter);
    }

    pub fn range_text(&self, range: &Range) -> Result<String, EditError> {
        self.buffer.range_text(range)
    }

    /// Replace the text covered by `range` and re-lex the edited rows
    pub fn replace_range_text(
        &mut self,
        range: &mut Range,
        text: &str,
    ) -> Result<DocumentEdit, EditError> {
        let splice = self.buffer.splice(range, text)?;
        let needs_propagation = self.tokenizer.apply_change(&self.buffer, &splice.change);
        self.buffer.finish_splice(range, &splice);

        Ok(DocumentEdit {
            change: splice.change,
            needs_propagation,
        })
    }

    /// Re-lex at most one row of pending forward propagation
    pub fn propagate_step(&mut self) -> bool {
        self.tokenizer.propagate_step(&self.buffer)
    }

    pub fn on_buffer_change<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&BufferChange) + 'static,
    {
        self.buffer.subscribe(listener)
    }

    pub fn on_row_change<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&RowChange) + 'static,
    {
        self.tokenizer.subscribe(listener)
    }

    /// Remove a listener registered with either `on_*` method
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.buffer.unsubscribe(id) || self.tokenizer.unsubscribe(id)
    }
}
