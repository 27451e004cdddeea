//! Incremental, table-driven tokenizer.
//!
//! The tokenizer keeps one [`LineLex`] per buffer row. After an edit only the
//! replaced rows are lexed synchronously; the rows below are revisited by
//! [`Tokenizer::propagate_step`], one per call, until a row's cached entry
//! state matches the exit state of the row above it again.
//!
//! Rows whose boundary may be inconsistent are kept in a pending set. Every
//! edit shifts that set along with the rows, so a propagation interrupted by a
//! newer edit resumes where it left off instead of being lost.

use std::collections::BTreeSet;
use std::sync::Arc;

use super::grammar::{Grammar, TokenClass};
use super::rules::{RuleTable, StateId};
use crate::editable::{Buffer, BufferChange};
use crate::events::{EventChannel, ListenerId};

/// Token type given to text no rule matched
pub const UNCLASSIFIED: &str = "unclassified";

/// A lexed span of one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    /// Length in characters
    pub length: usize,
    /// Token type from the matching rule, or [`UNCLASSIFIED`]
    pub kind: Arc<str>,
    /// Lexer state before the match
    pub before: StateId,
    /// Lexer state after the match
    pub after: StateId,
    /// Start offset in characters
    pub offset: usize,
}

impl Token {
    /// Offset just past the token
    pub fn end(&self) -> usize {
        self.offset + self.length
    }

    pub fn contains(&self, offset: usize) -> bool {
        offset >= self.offset && offset < self.end()
    }
}

/// Cached lexing result for one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineLex {
    pub before: StateId,
    pub after: StateId,
    pub tokens: Vec<Token>,
}

impl LineLex {
    fn placeholder(state: StateId) -> Self {
        Self {
            before: state,
            after: state,
            tokens: Vec::new(),
        }
    }
}

/// A row re-lexed by forward propagation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowChange {
    pub row: usize,
}

pub struct Tokenizer {
    grammar: Box<dyn Grammar>,
    lines: Vec<LineLex>,
    pending: BTreeSet<usize>,
    scheduled: bool,
    unclassified: Arc<str>,
    changes: EventChannel<RowChange>,
}

impl Tokenizer {
    /// A tokenizer for an empty buffer
    pub fn new(grammar: Box<dyn Grammar>) -> Self {
        let start = grammar.rules().start();
        Self {
            grammar,
            lines: vec![LineLex::placeholder(start)],
            pending: BTreeSet::new(),
            scheduled: false,
            unclassified: Arc::from(UNCLASSIFIED),
            changes: EventChannel::new(),
        }
    }

    pub fn grammar(&self) -> &dyn Grammar {
        self.grammar.as_ref()
    }

    pub fn rules(&self) -> &RuleTable {
        self.grammar.rules()
    }

    pub fn state_name(&self, state: StateId) -> &str {
        self.rules().state_name(state)
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn lines(&self) -> &[LineLex] {
        &self.lines
    }

    pub fn line(&self, row: usize) -> Option<&LineLex> {
        self.lines.get(row)
    }

    pub fn tokens(&self, row: usize) -> &[Token] {
        self.lines
            .get(row)
            .map(|line| line.tokens.as_slice())
            .unwrap_or(&[])
    }

    /// Discard the cache and lex every row of `buffer` synchronously
    pub fn rebuild(&mut self, buffer: &Buffer) {
        let start = self.rules().start();
        self.lines = vec![LineLex::placeholder(start); buffer.line_count()];
        self.pending.clear();
        for row in 0..buffer.line_count() {
            self.tokenize_line(buffer, row);
        }
        tracing::debug!(rows = buffer.line_count(), "rebuilt token cache");
    }

    /// Lex one row from the exit state of the row above. Rows past the
    /// cache are ignored.
    fn tokenize_line(&mut self, buffer: &Buffer, row: usize) {
        if row >= self.lines.len() {
            return;
        }
        let table = self.grammar.rules();
        let before = match row {
            0 => table.start(),
            _ => self.lines[row - 1].after,
        };
        let line = buffer.line(row);

        let mut state = before;
        let mut tokens = Vec::new();
        let mut byte = 0;
        let mut offset = 0;
        // Start of the current run of unmatched characters
        let mut run_byte = 0;
        let mut run_offset = 0;

        while byte < line.len() {
            let Some((rule, text)) = table.next_match(state, &line[byte..]) else {
                byte += line[byte..].chars().next().map_or(1, char::len_utf8);
                offset += 1;
                continue;
            };

            if run_offset < offset {
                tokens.push(self.unclassified_token(&line[run_byte..byte], run_offset, state));
            }

            let length = text.chars().count();
            let after = rule.next().unwrap_or(state);
            tokens.push(Token {
                text: text.to_string(),
                length,
                kind: Arc::clone(rule.kind()),
                before: state,
                after,
                offset,
            });

            state = after;
            byte += text.len();
            offset += length;
            run_byte = byte;
            run_offset = offset;
        }

        if run_offset < offset {
            tokens.push(self.unclassified_token(&line[run_byte..], run_offset, state));
        }

        if let Some(rule) = table.end_of_line_match(state) {
            state = rule.next().unwrap_or(state);
        }

        self.lines[row] = LineLex {
            before,
            after: state,
            tokens,
        };
    }

    fn unclassified_token(&self, text: &str, offset: usize, state: StateId) -> Token {
        Token {
            text: text.to_string(),
            length: text.chars().count(),
            kind: Arc::clone(&self.unclassified),
            before: state,
            after: state,
            offset,
        }
    }

    /// Splice the cache to follow a buffer change and lex the new rows.
    ///
    /// Returns true when forward propagation is needed and no propagation
    /// job is scheduled yet; the caller must then schedule one that drives
    /// [`Tokenizer::propagate_step`].
    pub fn apply_change(&mut self, buffer: &Buffer, change: &BufferChange) -> bool {
        let first = change.first_row;
        let deleted_end = first + change.del_rows;
        let inserted_end = first + change.new_rows;

        self.pending = self
            .pending
            .iter()
            .map(|&row| {
                if row < first {
                    row
                } else if row < deleted_end {
                    inserted_end
                } else {
                    row - change.del_rows + change.new_rows
                }
            })
            .collect();

        let start = self.rules().start();
        self.lines.splice(
            first..deleted_end,
            std::iter::repeat_with(|| LineLex::placeholder(start)).take(change.new_rows),
        );
        debug_assert_eq!(self.lines.len(), buffer.line_count());

        for row in first..inserted_end {
            self.tokenize_line(buffer, row);
        }

        if inserted_end < self.lines.len() {
            self.pending.insert(inserted_end);
        }

        tracing::debug!(
            first_row = first,
            del_rows = change.del_rows,
            new_rows = change.new_rows,
            pending = self.pending.len(),
            "relexed edited rows"
        );

        let needs_job = !self.pending.is_empty() && !self.scheduled;
        if needs_job {
            self.scheduled = true;
        }
        needs_job
    }

    /// Advance forward propagation by at most one re-lexed row.
    ///
    /// Returns whether more work remains.
    pub fn propagate_step(&mut self, buffer: &Buffer) -> bool {
        while let Some(row) = self.pending.pop_first() {
            if row == 0 || row >= self.lines.len() {
                continue;
            }
            if self.lines[row - 1].after == self.lines[row].before {
                tracing::trace!(row, "lexical state converged");
                continue;
            }

            self.tokenize_line(buffer, row);
            tracing::trace!(row, "propagated lexical state");
            self.changes.emit(&RowChange { row });

            if row + 1 < self.lines.len() {
                self.pending.insert(row + 1);
            }
            if !self.pending.is_empty() {
                return true;
            }
            break;
        }

        self.scheduled = false;
        false
    }

    /// Whether rows still wait for forward propagation
    pub fn is_propagating(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Lowest row waiting for forward propagation
    pub fn next_pending_row(&self) -> Option<usize> {
        self.pending.first().copied()
    }

    /// Whether every row's entry state equals the exit state of the row above
    pub fn is_consistent(&self) -> bool {
        self.lines
            .windows(2)
            .all(|pair| pair[0].after == pair[1].before)
            && self
                .lines
                .first()
                .is_some_and(|line| line.before == self.rules().start())
    }

    /// Token covering `offset` of `row`; `None` on an empty line
    pub fn token_at(&self, buffer: &Buffer, row: usize, offset: usize) -> Option<&Token> {
        let row = buffer.clamp_row(row);
        let offset = buffer.clamp_offset(row, offset);
        let tokens = &self.lines.get(row)?.tokens;
        let first = tokens.first()?;

        if offset == 0 {
            return Some(first);
        }
        if offset == buffer.line_len(row) {
            return tokens.last();
        }

        tokens
            .binary_search_by(|token| {
                if offset < token.offset {
                    std::cmp::Ordering::Greater
                } else if offset >= token.end() {
                    std::cmp::Ordering::Less
                } else {
                    std::cmp::Ordering::Equal
                }
            })
            .ok()
            .map(|index| &tokens[index])
    }

    pub fn classify(&self, token: &Token) -> TokenClass {
        self.grammar.classify(
            &token.kind,
            self.state_name(token.before),
            self.state_name(token.after),
            &token.text,
        )
    }

    pub fn classify_at(&self, buffer: &Buffer, row: usize, offset: usize) -> Option<TokenClass> {
        self.token_at(buffer, row, offset)
            .map(|token| self.classify(token))
    }

    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&RowChange) + 'static,
    {
        self.changes.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.changes.unsubscribe(id)
    }
}

impl std::fmt::Debug for Tokenizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tokenizer")
            .field("grammar", &self.grammar.name())
            .field("lines", &self.lines.len())
            .field("pending", &self.pending)
            .field("scheduled", &self.scheduled)
            .finish()
    }
}
