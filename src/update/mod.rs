//! Update functions for the Elm-style command layer
//!
//! All editor state transformations flow through [`update`].

mod editor;
mod text_edit;

use crate::commands::Cmd;
use crate::messages::EditorMsg;
use crate::model::Editor;

use self::editor::{
    double_click, mouse_drag, mouse_press, move_cursor, move_with, next_token, prev_token,
    select_all, step,
};
use self::text_edit::{backspace, copy, cut, delete, replace_text};

/// Main update function - applies one message to the editor
pub fn update(editor: &mut Editor, msg: EditorMsg) -> Option<Cmd> {
    tracing::trace!(?msg, "update");

    match msg {
        // === Basic Movement ===
        EditorMsg::MoveCursor(direction) => move_cursor(editor, direction),
        EditorMsg::MoveCursorPrevToken => move_with(editor, false, prev_token),
        EditorMsg::MoveCursorNextToken => move_with(editor, false, next_token),
        EditorMsg::MoveCursorLineStart => move_with(editor, false, |v| v.goto_line_start()),
        EditorMsg::MoveCursorLineEnd => move_with(editor, false, |v| v.goto_line_end()),
        EditorMsg::PageUp => move_with(editor, false, |v| v.page_up()),
        EditorMsg::PageDown => move_with(editor, false, |v| v.page_down()),

        // === Selection Movement ===
        EditorMsg::MoveCursorWithSelection(direction) => {
            move_with(editor, true, |v| step(v, direction))
        }
        EditorMsg::MoveCursorPrevTokenWithSelection => move_with(editor, true, prev_token),
        EditorMsg::MoveCursorNextTokenWithSelection => move_with(editor, true, next_token),
        EditorMsg::MoveCursorLineStartWithSelection => {
            move_with(editor, true, |v| v.goto_line_start())
        }
        EditorMsg::MoveCursorLineEndWithSelection => move_with(editor, true, |v| v.goto_line_end()),
        EditorMsg::PageUpWithSelection => move_with(editor, true, |v| v.page_up()),
        EditorMsg::PageDownWithSelection => move_with(editor, true, |v| v.page_down()),

        // === Selection Commands ===
        EditorMsg::SelectAll => select_all(editor),

        // === Editing ===
        EditorMsg::InsertText(text) => replace_text(editor, &text),
        EditorMsg::BreakLine => replace_text(editor, "\n"),
        EditorMsg::Backspace => backspace(editor),
        EditorMsg::Delete => delete(editor),
        EditorMsg::Indent => replace_text(editor, "\t"),

        // === Clipboard ===
        EditorMsg::Copy => copy(editor),
        EditorMsg::Cut => cut(editor),
        EditorMsg::Paste(text) => replace_text(editor, &text),

        // === Mouse ===
        EditorMsg::MousePress { row, col, extend } => mouse_press(editor, row, col, extend),
        EditorMsg::MouseDrag { row, col } => mouse_drag(editor, row, col),
        EditorMsg::MouseRelease => {
            editor.mouse_down = false;
            None
        }
        EditorMsg::DoubleClick => double_click(editor),
    }
}
