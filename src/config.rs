//! Editor configuration persistence
//!
//! Stores user preferences in `~/.config/lexedit/config.yaml`

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Line terminator used when the buffer is serialized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    #[default]
    Lf,
    Crlf,
    Cr,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::Crlf => "\r\n",
            LineEnding::Cr => "\r",
        }
    }
}

/// Editor configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Columns per tab stop
    #[serde(default = "default_tab_width")]
    pub tab_width: usize,

    /// Rows moved by page up / page down
    #[serde(default = "default_page_rows")]
    pub page_rows: usize,

    /// Milliseconds between background lexing steps
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,

    #[serde(default)]
    pub line_delimiter: LineEnding,

    /// Built-in grammar name or path to a grammar file
    #[serde(default = "default_grammar")]
    pub grammar: String,
}

fn default_tab_width() -> usize {
    4
}

fn default_page_rows() -> usize {
    crate::editable::PAGE_ROWS
}

fn default_tick_interval_ms() -> u64 {
    10
}

fn default_grammar() -> String {
    "javascript".to_string()
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            tab_width: default_tab_width(),
            page_rows: default_page_rows(),
            tick_interval_ms: default_tick_interval_ms(),
            line_delimiter: LineEnding::default(),
            grammar: default_grammar(),
        }
    }
}

impl EditorConfig {
    /// Load config from disk, or return defaults if not found or invalid
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("{}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Load config from an explicit path
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(config.sanitized())
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = crate::config_paths::config_file().ok_or(ConfigError::NoConfigDir)?;
        self.save_to(&path)
    }

    /// Save config to `path`, creating parent directories as needed
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let write_err = |source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }

        let content = serde_yaml::to_string(self).map_err(ConfigError::Serialize)?;
        std::fs::write(path, content).map_err(write_err)?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Replace zero tab width or page size with the defaults
    fn sanitized(mut self) -> Self {
        if self.tab_width == 0 {
            tracing::warn!("tab_width must be positive, using {}", default_tab_width());
            self.tab_width = default_tab_width();
        }
        if self.page_rows == 0 {
            tracing::warn!("page_rows must be positive, using {}", default_page_rows());
            self.page_rows = default_page_rows();
        }
        self
    }
}
