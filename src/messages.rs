//! Message types for the Elm-style command layer
//!
//! Input decoding happens outside the core: key bindings map to these
//! messages and mouse input arrives already converted to `(row, col)`.

/// Direction for cursor movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Editor messages (movement, selection, editing, clipboard, mouse)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorMsg {
    // === Basic Movement ===
    /// Move cursor in a direction, collapsing any selection (Arrow keys)
    MoveCursor(Direction),
    /// Move to the start of the previous token (Ctrl+Left)
    MoveCursorPrevToken,
    /// Move to the end of the next token (Ctrl+Right)
    MoveCursorNextToken,
    /// Home
    MoveCursorLineStart,
    /// End
    MoveCursorLineEnd,
    PageUp,
    PageDown,

    // === Selection Movement (Shift+key) ===
    MoveCursorWithSelection(Direction),
    MoveCursorPrevTokenWithSelection,
    MoveCursorNextTokenWithSelection,
    MoveCursorLineStartWithSelection,
    MoveCursorLineEndWithSelection,
    PageUpWithSelection,
    PageDownWithSelection,

    // === Selection Commands ===
    /// Select all text (Ctrl+A)
    SelectAll,

    // === Editing ===
    /// Replace the selection with typed text
    InsertText(String),
    /// Enter
    BreakLine,
    Backspace,
    Delete,
    /// Tab
    Indent,

    // === Clipboard ===
    /// Copy the selection; answered with [`crate::commands::Cmd::SetClipboard`]
    Copy,
    /// Copy the selection and delete it
    Cut,
    /// Replace the selection with clipboard text
    Paste(String),

    // === Mouse ===
    /// Primary button pressed at a cell; `extend` keeps the current selection (Shift)
    MousePress { row: usize, col: usize, extend: bool },
    /// Pointer moved to a cell
    MouseDrag { row: usize, col: usize },
    MouseRelease,
    /// Select the token under the cursor
    DoubleClick,
}
