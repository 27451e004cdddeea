//! Error types for the editing core
//!
//! Only programmer errors and grammar or config loading failures are surfaced.
//! Out-of-range coordinates are clamped and unmatched input is lexed as
//! unclassified text, so neither shows up here.

use std::path::PathBuf;

use thiserror::Error;

use crate::editable::BufferId;

/// Errors raised by buffer, position and range operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EditError {
    /// Two positions or ranges bound to different buffers were combined.
    #[error("cannot combine positions of buffer {left} with buffer {right}")]
    CrossBuffer { left: BufferId, right: BufferId },
}

impl EditError {
    /// Fail with [`EditError::CrossBuffer`] unless both ids match
    pub fn check_same_buffer(left: BufferId, right: BufferId) -> Result<(), EditError> {
        if left == right {
            Ok(())
        } else {
            Err(EditError::CrossBuffer { left, right })
        }
    }
}

/// Errors raised while building a rule table or loading a grammar file.
#[derive(Debug, Error)]
pub enum GrammarError {
    /// A rule pattern failed to compile.
    #[error("invalid pattern {pattern:?} in state '{state}': {source}")]
    Pattern {
        state: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A rule or the start state names a state that was never defined.
    #[error("unknown lexer state '{0}'")]
    UnknownState(String),

    /// The same state was defined twice.
    #[error("lexer state '{0}' is defined more than once")]
    DuplicateState(String),

    /// No grammar is registered under the requested name.
    #[error("unknown grammar '{0}'")]
    UnknownGrammar(String),

    /// A grammar file could not be read.
    #[error("failed to read grammar file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A grammar file is not valid YAML for a rule table.
    #[error("failed to parse grammar file: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Errors raised while reading or writing the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no config directory available")]
    NoConfigDir,

    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write config {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("failed to serialize config: {0}")]
    Serialize(#[source] serde_yaml::Error),
}
