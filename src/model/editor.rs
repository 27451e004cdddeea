//! Editor state - a view plus the input state the command layer tracks

use std::time::Instant;

use super::view::View;
use crate::commands::Cmd;
use crate::config::EditorConfig;
use crate::error::GrammarError;

#[derive(Debug)]
pub struct Editor {
    pub view: View,
    /// Primary mouse button is held; drags extend the selection
    pub mouse_down: bool,
}

impl Editor {
    pub fn new(view: View) -> Self {
        Self {
            view,
            mouse_down: false,
        }
    }

    /// An editor over `text` using the grammar named in `config`
    pub fn from_config(config: EditorConfig, text: &str) -> Result<Self, GrammarError> {
        Ok(Self::new(View::from_config(config, text)?))
    }

    /// Drive background lexing from the host loop.
    ///
    /// Returns a redraw when a row was re-lexed, followed by another tick
    /// request while work remains.
    pub fn poll(&mut self, now: Instant) -> Option<Cmd> {
        if !self.view.poll(now) {
            return None;
        }
        Some(self.redraw_and_schedule())
    }

    /// Redraw, plus a tick request while background lexing is pending
    pub(crate) fn redraw_and_schedule(&self) -> Cmd {
        if self.view.is_lexing() {
            Cmd::batch(vec![
                Cmd::Redraw,
                Cmd::ScheduleTick {
                    delay: self.view.config().tick_interval(),
                },
            ])
        } else {
            Cmd::Redraw
        }
    }
}
