//! Command types for the Elm-style command layer
//!
//! Commands represent side effects the host performs after an update.

use std::time::Duration;

/// Side effects returned by [`crate::update::update`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Request a redraw of the editor
    Redraw,
    /// Put text on the system clipboard
    SetClipboard(String),
    /// Background lexing is pending; call `View::poll` again after `delay`
    ScheduleTick { delay: Duration },
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Create a batch of commands, flattening trivial cases
    pub fn batch(mut cmds: Vec<Cmd>) -> Self {
        cmds.retain(|cmd| *cmd != Cmd::None);
        match cmds.len() {
            0 => Cmd::None,
            1 => cmds.remove(0),
            _ => Cmd::Batch(cmds),
        }
    }

    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Redraw => true,
            Cmd::SetClipboard(_) => false,
            Cmd::ScheduleTick { .. } => false,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
        }
    }

    /// Text to place on the clipboard, if any
    pub fn clipboard_text(&self) -> Option<&str> {
        match self {
            Cmd::SetClipboard(text) => Some(text),
            Cmd::Batch(cmds) => cmds.iter().find_map(|c| c.clipboard_text()),
            _ => None,
        }
    }

    /// Delay before the next background lexing step, if one is pending
    pub fn tick_delay(&self) -> Option<Duration> {
        match self {
            Cmd::ScheduleTick { delay } => Some(*delay),
            Cmd::Batch(cmds) => cmds.iter().find_map(|c| c.tick_delay()),
            _ => None,
        }
    }
}
