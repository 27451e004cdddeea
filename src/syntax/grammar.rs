//! Grammar plug-in interface.
//!
//! A grammar supplies a [`RuleTable`] and a pure classification function.
//! The tokenizer itself knows nothing about any language.

use std::path::Path;

use serde::Deserialize;

use super::declarative::DeclarativeGrammar;
use super::javascript::JavaScript;
use super::rules::RuleTable;
use crate::error::GrammarError;

/// Highlight class assigned to a token.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenClass {
    #[default]
    Normal,
    Keyword,
    Comment,
    String,
    Number,
}

impl TokenClass {
    pub fn as_str(self) -> &'static str {
        match self {
            TokenClass::Normal => "normal",
            TokenClass::Keyword => "keyword",
            TokenClass::Comment => "comment",
            TokenClass::String => "string",
            TokenClass::Number => "number",
        }
    }
}

pub trait Grammar {
    fn name(&self) -> &str;

    fn rules(&self) -> &RuleTable;

    /// Classify a token from its type, surrounding lexer states and text
    fn classify(&self, _kind: &str, _before: &str, _after: &str, _text: &str) -> TokenClass {
        TokenClass::Normal
    }
}

/// A grammar without rules. Every line lexes to one unclassified token.
#[derive(Debug, Clone)]
pub struct PlainText {
    table: RuleTable,
}

impl PlainText {
    pub fn new() -> Self {
        Self {
            table: RuleTable::empty("text"),
        }
    }
}

impl Default for PlainText {
    fn default() -> Self {
        Self::new()
    }
}

impl Grammar for PlainText {
    fn name(&self) -> &str {
        "plain"
    }

    fn rules(&self) -> &RuleTable {
        &self.table
    }
}

/// Names accepted by [`grammar_by_name`]
pub const BUILTIN_GRAMMARS: &[&str] = &["plain", "javascript"];

/// Look up a built-in grammar
pub fn grammar_by_name(name: &str) -> Result<Box<dyn Grammar>, GrammarError> {
    match name.to_ascii_lowercase().as_str() {
        "plain" | "text" => Ok(Box::new(PlainText::new())),
        "javascript" | "js" => Ok(Box::new(JavaScript::new()?)),
        _ => Err(GrammarError::UnknownGrammar(name.to_string())),
    }
}

/// Resolve a grammar argument: a path to a YAML grammar file, a built-in name,
/// or the name of a file in the user grammars directory
pub fn load_grammar(name_or_path: &str) -> Result<Box<dyn Grammar>, GrammarError> {
    let path = Path::new(name_or_path);
    let is_file = path
        .extension()
        .is_some_and(|ext| ext == "yaml" || ext == "yml");

    if is_file {
        return Ok(Box::new(DeclarativeGrammar::from_file(path)?));
    }

    match grammar_by_name(name_or_path) {
        Err(GrammarError::UnknownGrammar(name)) => {
            match crate::config_paths::find_user_grammar(&name) {
                Some(path) => {
                    tracing::debug!("Using user grammar {}", path.display());
                    Ok(Box::new(DeclarativeGrammar::from_file(&path)?))
                }
                None => Err(GrammarError::UnknownGrammar(name)),
            }
        }
        result => result,
    }
}
