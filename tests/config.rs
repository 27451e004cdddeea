//! Configuration system tests
//!
//! Tests for config paths and editor config loading/saving.

use lexedit::config::{EditorConfig, LineEnding};
use lexedit::config_paths;
use lexedit::error::ConfigError;
use lexedit::model::View;

// ========================================================================
// Config Paths Tests
// ========================================================================

#[test]
fn test_config_dir_contains_app_name() {
    if let Some(dir) = config_paths::config_dir() {
        assert!(dir.to_string_lossy().contains("lexedit"));
    }
}

#[test]
fn test_config_file_ends_with_yaml() {
    if let Some(path) = config_paths::config_file() {
        assert!(path.to_string_lossy().ends_with("config.yaml"));
    }
}

#[test]
fn test_grammars_and_logs_are_subdirs_of_config() {
    if let Some(config) = config_paths::config_dir() {
        assert!(config_paths::grammars_dir().unwrap().starts_with(&config));
        assert!(config_paths::logs_dir().unwrap().starts_with(&config));
    }
}

#[test]
fn test_unknown_user_grammar_is_not_found() {
    assert!(config_paths::find_user_grammar("no-such-grammar-here").is_none());
}

// ========================================================================
// Editor Config Tests
// ========================================================================

#[test]
fn test_save_then_load_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.yaml");

    let config = EditorConfig {
        tab_width: 2,
        page_rows: 20,
        tick_interval_ms: 5,
        line_delimiter: LineEnding::Crlf,
        grammar: "plain".to_string(),
    };
    config.save_to(&path).unwrap();

    assert_eq!(EditorConfig::load_from(&path).unwrap(), config);
}

#[test]
fn test_partial_file_fills_in_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "tab_width: 8\n").unwrap();

    let config = EditorConfig::load_from(&path).unwrap();
    assert_eq!(config.tab_width, 8);
    assert_eq!(config.grammar, EditorConfig::default().grammar);
}

#[test]
fn test_zero_values_are_replaced() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "tab_width: 0\npage_rows: 0\n").unwrap();

    let config = EditorConfig::load_from(&path).unwrap();
    assert_eq!(config.tab_width, EditorConfig::default().tab_width);
    assert_eq!(config.page_rows, EditorConfig::default().page_rows);
}

#[test]
fn test_malformed_file_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "tab_width: [not, a, number]\n").unwrap();

    let err = EditorConfig::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("config.yaml"));
}

#[test]
fn test_missing_file_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = EditorConfig::load_from(&dir.path().join("absent.yaml")).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
}

#[test]
fn test_config_drives_view() {
    let config = EditorConfig {
        tab_width: 8,
        line_delimiter: LineEnding::Crlf,
        grammar: "plain".to_string(),
        ..EditorConfig::default()
    };
    let view = View::from_config(config, "\tx\ny").unwrap();

    assert_eq!(view.offset_to_col(0, 1), 8);
    assert_eq!(view.buffer().text(), "\tx\r\ny");
    assert_eq!(view.tokenizer().grammar().name(), "plain");
}

#[test]
fn test_unknown_grammar_name_is_rejected() {
    let config = EditorConfig {
        grammar: "no-such-grammar-here".to_string(),
        ..EditorConfig::default()
    };
    assert!(View::from_config(config, "").is_err());
}
