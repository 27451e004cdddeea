//! Centralized configuration paths for lexedit
//!
//! All config files live under:
//! - Unix/macOS: `~/.config/lexedit/`
//! - Windows: `%APPDATA%\lexedit\`

use std::{
    env, fs,
    path::{Path, PathBuf},
};

const APP_DIR: &str = "lexedit";

/// File name prefix of the daily rolling log
pub const LOG_FILE_PREFIX: &str = "lexedit.log";

/// Base config directory for lexedit
///
/// Unix/macOS:
///   - If XDG_CONFIG_HOME is set: `$XDG_CONFIG_HOME/lexedit`
///   - Else: `~/.config/lexedit`
///
/// Windows:
///   - `%APPDATA%\lexedit`
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join(APP_DIR))
    }

    #[cfg(not(target_os = "windows"))]
    {
        env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .map(|config| config.join(APP_DIR))
    }
}

/// `~/.config/lexedit/config.yaml`
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

/// `~/.config/lexedit/grammars/`
pub fn grammars_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("grammars"))
}

/// `~/.config/lexedit/logs/`
pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

fn ensure_dir(path: &Path) -> std::io::Result<()> {
    fs::create_dir_all(path)
}

/// Ensure logs dir exists, returning it
pub fn ensure_logs_dir() -> std::io::Result<PathBuf> {
    let logs = logs_dir().ok_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::NotFound, "no config directory available")
    })?;
    ensure_dir(&logs)?;
    Ok(logs)
}

/// Look up a grammar file by name in the user grammars directory
///
/// `name` matches `<name>.yaml` or `<name>.yml`.
pub fn find_user_grammar(name: &str) -> Option<PathBuf> {
    let dir = grammars_dir()?;
    ["yaml", "yml"]
        .iter()
        .map(|ext| dir.join(format!("{name}.{ext}")))
        .find(|path| path.is_file())
}
