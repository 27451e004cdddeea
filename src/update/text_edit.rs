//! Text editing and clipboard handling

use crate::commands::Cmd;
use crate::model::Editor;

/// Replace the selection with `text`
pub(super) fn replace_text(editor: &mut Editor, text: &str) -> Option<Cmd> {
    match editor.view.replace_range_text(text) {
        Ok(_) => Some(editor.redraw_and_schedule()),
        Err(e) => {
            tracing::error!("Edit rejected: {}", e);
            None
        }
    }
}

/// Delete the selection, or the character before the cursor
pub(super) fn backspace(editor: &mut Editor) -> Option<Cmd> {
    let view = &mut editor.view;
    if view.range().is_empty() {
        if !view.move_left() {
            return None;
        }
        view.range_mut().start_selecting();
        view.move_right();
    }
    replace_text(editor, "")
}

/// Delete the selection, or the character after the cursor
pub(super) fn delete(editor: &mut Editor) -> Option<Cmd> {
    let view = &mut editor.view;
    if view.range().is_empty() {
        view.range_mut().start_selecting();
        if !view.move_right() {
            view.range_mut().stop_selecting();
            return None;
        }
    }
    replace_text(editor, "")
}

pub(super) fn copy(editor: &mut Editor) -> Option<Cmd> {
    match editor.view.range_text() {
        Ok(text) => Some(Cmd::SetClipboard(text)),
        Err(e) => {
            tracing::error!("Copy failed: {}", e);
            None
        }
    }
}

pub(super) fn cut(editor: &mut Editor) -> Option<Cmd> {
    let clipboard = copy(editor)?;
    let edit = replace_text(editor, "").unwrap_or_default();
    Some(Cmd::batch(vec![clipboard, edit]))
}
