//! Syntax highlighting module
//!
//! Provides table-driven incremental tokenizing with:
//! - Pluggable grammars (rule table + classification)
//! - Synchronous re-lex of edited rows
//! - Forward propagation of lexer state, one row per scheduler tick
//!
//! ## Architecture
//!
//! ```text
//! Buffer edit → BufferChange → Tokenizer::apply_change (edited rows)
//!             → JobQueue → Tokenizer::propagate_step (one row per tick)
//!             → RowChange → renderer
//! ```

mod declarative;
mod grammar;
mod javascript;
mod rules;
mod tokenizer;

pub use declarative::{ClassMap, DeclarativeGrammar};
pub use grammar::{grammar_by_name, load_grammar, Grammar, PlainText, TokenClass, BUILTIN_GRAMMARS};
pub use javascript::JavaScript;
pub use rules::{Rule, RuleSpec, RuleTable, RuleTableBuilder, StateId};
pub use tokenizer::{LineLex, RowChange, Token, Tokenizer, UNCLASSIFIED};
