//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use lexedit::config::EditorConfig;
use lexedit::model::{Editor, View};
use lexedit::syntax::{JavaScript, PlainText};

/// Create a JavaScript view with given text and cursor position
pub fn test_view(text: &str, row: usize, offset: usize) -> View {
    let mut view = View::with_text(
        EditorConfig::default(),
        Box::new(JavaScript::new().unwrap()),
        text,
    );
    view.goto(row, offset);
    view
}

/// Create a plain-text view with given text and cursor position
pub fn plain_view(text: &str, row: usize, offset: usize) -> View {
    let mut view = View::with_text(EditorConfig::default(), Box::new(PlainText::new()), text);
    view.goto(row, offset);
    view
}

/// Create an editor over a JavaScript view
pub fn test_editor(text: &str, row: usize, offset: usize) -> Editor {
    Editor::new(test_view(text, row, offset))
}

/// Select from `(row, offset)` to `(to_row, to_offset)`, head at the second position
pub fn select(view: &mut View, from: (usize, usize), to: (usize, usize)) {
    view.range_mut().stop_selecting();
    view.goto(from.0, from.1);
    view.range_mut().start_selecting();
    view.goto(to.0, to.1);
}

/// Shared event log for listener closures
pub fn event_log<T>() -> Rc<RefCell<Vec<T>>> {
    Rc::new(RefCell::new(Vec::new()))
}

/// Head and anchor coordinates of the view's range
pub fn range_coords(view: &View) -> ((usize, usize), (usize, usize)) {
    (view.range().anchor().coords(), view.range().head().coords())
}

/// Lexer state names `(before, after)` of every row
pub fn row_states(view: &View) -> Vec<(String, String)> {
    let tokenizer = view.tokenizer();
    tokenizer
        .lines()
        .iter()
        .map(|line| {
            (
                tokenizer.state_name(line.before).to_string(),
                tokenizer.state_name(line.after).to_string(),
            )
        })
        .collect()
}
