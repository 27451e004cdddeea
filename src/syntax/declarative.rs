//! Grammars loaded from YAML files.
//!
//! ```yaml
//! name: ini
//! start: open
//! states:
//!   - name: open
//!     rules:
//!       - { pattern: ";", kind: comment, next: comment }
//!       - { pattern: "[0-9]+", kind: num }
//!       - { pattern: "\\w+", kind: word }
//!   - name: comment
//!     rules:
//!       - { pattern: "$", kind: comment, next: open }
//! classes:
//!   kinds: { comment: comment, num: number }
//!   states: { comment: comment }
//!   keywords: [true, false]
//! ```

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use super::grammar::{Grammar, TokenClass};
use super::rules::{RuleSpec, RuleTable};
use crate::error::GrammarError;

#[derive(Debug, Clone, Deserialize)]
struct GrammarFile {
    name: String,
    start: String,
    states: Vec<StateSpec>,
    #[serde(default)]
    classes: ClassMap,
}

#[derive(Debug, Clone, Deserialize)]
struct StateSpec {
    name: String,
    #[serde(default)]
    rules: Vec<RuleSpec>,
}

/// How tokens map onto highlight classes.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClassMap {
    /// Class by token type
    #[serde(default)]
    pub kinds: HashMap<String, TokenClass>,
    /// Class for tokens lexed entirely inside a state
    #[serde(default)]
    pub states: HashMap<String, TokenClass>,
    /// Token texts classified as keywords
    #[serde(default)]
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct DeclarativeGrammar {
    name: String,
    table: RuleTable,
    classes: ClassMap,
}

impl DeclarativeGrammar {
    pub fn from_yaml(source: &str) -> Result<Self, GrammarError> {
        let file: GrammarFile = serde_yaml::from_str(source)?;

        let table = file
            .states
            .into_iter()
            .fold(RuleTable::builder(&file.start), |builder, state| {
                builder.state(&state.name, state.rules)
            })
            .build()?;

        tracing::debug!(
            grammar = %file.name,
            states = table.state_count(),
            "loaded declarative grammar"
        );

        Ok(Self {
            name: file.name,
            table,
            classes: file.classes,
        })
    }

    pub fn from_file(path: &Path) -> Result<Self, GrammarError> {
        let source = std::fs::read_to_string(path).map_err(|source| GrammarError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&source)
    }
}

impl Grammar for DeclarativeGrammar {
    fn name(&self) -> &str {
        &self.name
    }

    fn rules(&self) -> &RuleTable {
        &self.table
    }

    fn classify(&self, kind: &str, before: &str, after: &str, text: &str) -> TokenClass {
        if let Some(class) = self.classes.kinds.get(kind) {
            return *class;
        }
        if before == after {
            if let Some(class) = self.classes.states.get(before) {
                return *class;
            }
        }
        if self.classes.keywords.iter().any(|k| k == text) {
            return TokenClass::Keyword;
        }
        TokenClass::Normal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INI: &str = r#"
name: ini
start: open
states:
  - name: open
    rules:
      - { pattern: ";", kind: comment, next: comment }
      - { pattern: "[0-9]+", kind: num }
      - { pattern: "\\w+", kind: word }
  - name: comment
    rules:
      - { pattern: "$", kind: comment, next: open }
      - { pattern: "\\w+", kind: word }
classes:
  kinds: { comment: comment, num: number }
  states: { comment: comment }
  keywords: ["true", "false"]
"#;

    #[test]
    fn test_load_yaml_grammar() {
        let grammar = DeclarativeGrammar::from_yaml(INI).unwrap();
        assert_eq!(grammar.name(), "ini");
        let table = grammar.rules();
        assert_eq!(table.state_count(), 2);
        assert_eq!(table.state_name(table.start()), "open");
    }

    #[test]
    fn test_classify_from_maps() {
        let grammar = DeclarativeGrammar::from_yaml(INI).unwrap();
        assert_eq!(grammar.classify("num", "open", "open", "42"), TokenClass::Number);
        assert_eq!(
            grammar.classify("word", "comment", "comment", "note"),
            TokenClass::Comment
        );
        assert_eq!(grammar.classify("word", "open", "open", "true"), TokenClass::Keyword);
        assert_eq!(grammar.classify("word", "open", "open", "name"), TokenClass::Normal);
    }

    #[test]
    fn test_invalid_yaml() {
        assert!(matches!(
            DeclarativeGrammar::from_yaml("states: 3"),
            Err(GrammarError::Yaml(_))
        ));
    }

    #[test]
    fn test_unknown_next_state() {
        let source = r#"
name: broken
start: open
states:
  - name: open
    rules:
      - { pattern: "x", kind: x, next: elsewhere }
"#;
        assert!(matches!(
            DeclarativeGrammar::from_yaml(source),
            Err(GrammarError::UnknownState(_))
        ));
    }
}
