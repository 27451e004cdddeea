//! Command-line interface: tokenize a file and print what the lexer saw
//!
//! Supports:
//! - Built-in grammars or YAML grammar files
//! - Overriding the configured tab width
//! - Token, class, line-state and JSON output

use std::fmt::Write as _;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::Serialize;

use crate::config::EditorConfig;
use crate::error::ConfigError;
use crate::model::View;

/// Tokenize source text with an incremental lexer
#[derive(Parser, Debug)]
#[command(name = "lexedit", version, about = "Tokenize source text with an incremental lexer")]
pub struct CliArgs {
    /// File to tokenize (reads stdin when omitted)
    #[arg(value_name = "FILE")]
    pub path: Option<PathBuf>,

    /// Built-in grammar name or path to a YAML grammar file
    #[arg(short = 'g', long, value_name = "NAME|FILE")]
    pub grammar: Option<String>,

    /// Columns per tab stop
    #[arg(short = 't', long, value_name = "N")]
    pub tab_width: Option<usize>,

    /// What to print
    #[arg(short = 'o', long, value_enum, default_value_t = OutputMode::Tokens)]
    pub output: OutputMode,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// List built-in grammars and exit
    #[arg(long)]
    pub list_grammars: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    /// One line per token: position, type and text
    Tokens,
    /// One line per token: position, highlight class and text
    Classes,
    /// One line per row: lexer state before and after
    States,
    /// Every row with its states and tokens, as JSON
    Json,
}

impl CliArgs {
    /// Load the config file and apply command-line overrides
    pub fn resolve_config(&self) -> Result<EditorConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => EditorConfig::load_from(path)?,
            None => EditorConfig::load(),
        };

        if let Some(grammar) = &self.grammar {
            config.grammar = grammar.clone();
        }
        if let Some(tab_width) = self.tab_width {
            config.tab_width = tab_width.max(1);
        }
        Ok(config)
    }
}

#[derive(Debug, Serialize)]
struct RowReport<'a> {
    row: usize,
    before: &'a str,
    after: &'a str,
    tokens: Vec<TokenReport<'a>>,
}

#[derive(Debug, Serialize)]
struct TokenReport<'a> {
    offset: usize,
    col: usize,
    length: usize,
    kind: &'a str,
    class: &'static str,
    text: &'a str,
}

/// Render the token cache of `view` in the requested format
pub fn render(view: &View, mode: OutputMode) -> Result<String, serde_json::Error> {
    let tokenizer = view.tokenizer();
    let mut out = String::new();

    match mode {
        OutputMode::Tokens | OutputMode::Classes => {
            for (row, line) in tokenizer.lines().iter().enumerate() {
                for token in &line.tokens {
                    let label = match mode {
                        OutputMode::Tokens => &*token.kind,
                        _ => tokenizer.classify(token).as_str(),
                    };
                    let col = view.offset_to_col(row, token.offset);
                    let _ = writeln!(out, "{}:{}\t{}\t{:?}", row + 1, col + 1, label, token.text);
                }
            }
        }
        OutputMode::States => {
            for (row, line) in tokenizer.lines().iter().enumerate() {
                let _ = writeln!(
                    out,
                    "{}\t{} -> {}",
                    row + 1,
                    tokenizer.state_name(line.before),
                    tokenizer.state_name(line.after)
                );
            }
        }
        OutputMode::Json => {
            let rows: Vec<RowReport> = tokenizer
                .lines()
                .iter()
                .enumerate()
                .map(|(row, line)| RowReport {
                    row,
                    before: tokenizer.state_name(line.before),
                    after: tokenizer.state_name(line.after),
                    tokens: line
                        .tokens
                        .iter()
                        .map(|token| TokenReport {
                            offset: token.offset,
                            col: view.offset_to_col(row, token.offset),
                            length: token.length,
                            kind: &token.kind,
                            class: tokenizer.classify(token).as_str(),
                            text: &token.text,
                        })
                        .collect(),
                })
                .collect();
            out = serde_json::to_string_pretty(&rows)?;
            out.push('\n');
        }
    }

    Ok(out)
}
