//! View - a document bound to one cursor, one selection and a tab width
//!
//! The view owns the job queue that paces forward propagation: an edit that
//! leaves lexer state inconsistent queues one propagation job, and every tick
//! re-lexes at most one row.

use std::time::Instant;

use crate::config::EditorConfig;
use crate::editable::{column, Buffer, BufferChange, Position, Range};
use crate::error::{EditError, GrammarError};
use crate::events::ListenerId;
use crate::runtime::JobQueue;
use crate::syntax::{load_grammar, Grammar, RowChange, Tokenizer};

use super::document::Document;

/// Re-lex one pending row, then requeue while work remains
fn propagate(document: &mut Document, jobs: &mut JobQueue<Document>) {
    if document.propagate_step() {
        jobs.push(propagate);
    }
}

#[derive(Debug)]
pub struct View {
    config: EditorConfig,
    document: Document,
    range: Range,
    jobs: JobQueue<Document>,
}

impl View {
    /// An empty view
    pub fn new(config: EditorConfig, grammar: Box<dyn Grammar>) -> Self {
        Self::with_text(config, grammar, "")
    }

    /// A view over `text`, fully lexed, cursor at the start
    pub fn with_text(config: EditorConfig, grammar: Box<dyn Grammar>, text: &str) -> Self {
        let mut buffer = Buffer::from_text(text);
        buffer.set_delimiter(config.line_delimiter.as_str());

        let document = Document::from_buffer(buffer, grammar);
        let range = Range::new(Position::new(document.buffer(), config.tab_width));
        let jobs = JobQueue::new(config.tick_interval());

        Self {
            config,
            document,
            range,
            jobs,
        }
    }

    /// A view over `text` using the grammar named in `config`
    pub fn from_config(config: EditorConfig, text: &str) -> Result<Self, GrammarError> {
        let grammar = load_grammar(&config.grammar)?;
        Ok(Self::with_text(config, grammar, text))
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn on_buffer_change<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&BufferChange) + 'static,
    {
        self.document.on_buffer_change(listener)
    }

    /// Listen for rows re-lexed by forward propagation
    pub fn on_row_change<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&RowChange) + 'static,
    {
        self.document.on_row_change(listener)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.document.unsubscribe(id)
    }

    pub fn buffer(&self) -> &Buffer {
        self.document.buffer()
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        self.document.tokenizer()
    }

    /// The cursor is the head of the range
    pub fn cursor(&self) -> &Position {
        self.range.head()
    }

    pub fn range(&self) -> &Range {
        &self.range
    }

    pub fn range_mut(&mut self) -> &mut Range {
        &mut self.range
    }

    // === Tab/column arithmetic ===

    pub fn tab_width(&self) -> usize {
        self.config.tab_width
    }

    pub fn next_tab_col(&self, col: usize) -> usize {
        column::next_tab_col(col, self.tab_width())
    }

    pub fn round_tab_col(&self, col: usize) -> usize {
        column::round_tab_col(col, self.tab_width())
    }

    pub fn offset_to_col(&self, row: usize, offset: usize) -> usize {
        column::offset_to_col(self.buffer().line(row), offset, self.tab_width())
    }

    pub fn col_to_offset(&self, row: usize, col: usize) -> usize {
        column::col_to_offset(self.buffer().line(row), col, self.tab_width())
    }

    // === Text ===

    pub fn range_text(&self) -> Result<String, EditError> {
        self.document.range_text(&self.range)
    }

    /// Replace the selected text, re-lex the edited rows and schedule
    /// propagation if the lexer state of later rows went stale
    pub fn replace_range_text(&mut self, text: &str) -> Result<BufferChange, EditError> {
        let edit = self.document.replace_range_text(&mut self.range, text)?;
        if edit.needs_propagation {
            self.jobs.push(propagate);
        }
        Ok(edit.change)
    }

    // === Cursor movement ===

    /// Apply a movement to the cursor through the range
    pub fn move_cursor<F>(&mut self, movement: F) -> bool
    where
        F: FnOnce(&mut Position, &Buffer, &Tokenizer) -> bool,
    {
        let buffer = self.document.buffer();
        let tokenizer = self.document.tokenizer();
        self.range.move_head(|head| movement(head, buffer, tokenizer))
    }

    pub fn goto(&mut self, row: usize, offset: usize) -> bool {
        self.move_cursor(|head, buffer, _| head.set(buffer, row, offset))
    }

    pub fn goto_row_col(&mut self, row: usize, col: usize) -> bool {
        self.move_cursor(|head, buffer, _| head.goto_row_col(buffer, row, col))
    }

    pub fn goto_start(&mut self) -> bool {
        self.move_cursor(|head, buffer, _| head.goto_start(buffer))
    }

    pub fn goto_end(&mut self) -> bool {
        self.move_cursor(|head, buffer, _| head.goto_end(buffer))
    }

    pub fn goto_line_start(&mut self) -> bool {
        self.move_cursor(|head, buffer, _| head.goto_line_start(buffer))
    }

    pub fn goto_line_end(&mut self) -> bool {
        self.move_cursor(|head, buffer, _| head.goto_line_end(buffer))
    }

    pub fn goto_token_start(&mut self) -> bool {
        self.move_cursor(|head, buffer, tokenizer| head.goto_token_start(buffer, tokenizer))
    }

    pub fn goto_token_end(&mut self) -> bool {
        self.move_cursor(|head, buffer, tokenizer| head.goto_token_end(buffer, tokenizer))
    }

    pub fn move_left(&mut self) -> bool {
        self.move_cursor(|head, buffer, _| head.left(buffer))
    }

    pub fn move_right(&mut self) -> bool {
        self.move_cursor(|head, buffer, _| head.right(buffer))
    }

    pub fn move_up(&mut self) -> bool {
        self.move_cursor(|head, buffer, _| head.up(buffer))
    }

    pub fn move_down(&mut self) -> bool {
        self.move_cursor(|head, buffer, _| head.down(buffer))
    }

    pub fn page_up(&mut self) -> bool {
        let rows = self.config.page_rows;
        self.move_cursor(|head, buffer, _| head.page_up(buffer, rows))
    }

    pub fn page_down(&mut self) -> bool {
        let rows = self.config.page_rows;
        self.move_cursor(|head, buffer, _| head.page_down(buffer, rows))
    }

    // === Background lexing ===

    /// Run one queued job regardless of the ticker
    pub fn tick(&mut self) -> bool {
        self.jobs.tick(&mut self.document)
    }

    /// Run one queued job if the ticker is due at `now`
    pub fn poll(&mut self, now: Instant) -> bool {
        self.jobs.poll(&mut self.document, now)
    }

    pub fn run_until_idle(&mut self) -> usize {
        self.jobs.run_until_idle(&mut self.document)
    }

    /// Whether forward propagation is still in progress
    pub fn is_lexing(&self) -> bool {
        !self.jobs.is_empty()
    }

    pub fn jobs(&self) -> &JobQueue<Document> {
        &self.jobs
    }
}
