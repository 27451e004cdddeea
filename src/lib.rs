//! lexedit - text-editing core
//!
//! A line-oriented text buffer, an incremental tokenizer that re-lexes only
//! the rows an edit affects, and a position/range algebra for addressing and
//! mutating the buffer. An Elm-style command layer (`messages`, `update`,
//! `commands`) drives it from decoded input.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod editable;
pub mod error;
pub mod events;
pub mod messages;
pub mod model;
pub mod runtime;
pub mod syntax;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::EditorConfig;
pub use error::{ConfigError, EditError, GrammarError};
pub use messages::EditorMsg;
pub use model::{Document, Editor, View};
