//! Cursor movement, selection and mouse handling

use crate::commands::Cmd;
use crate::messages::Direction;
use crate::model::{Editor, View};

/// Run `movement`, keeping or collapsing the selection.
///
/// With `selecting` the anchor is forked first so the move extends the
/// selection; without it the range collapses onto the cursor afterwards.
pub(super) fn move_with<F>(editor: &mut Editor, selecting: bool, movement: F) -> Option<Cmd>
where
    F: FnOnce(&mut View) -> bool,
{
    let view = &mut editor.view;
    if selecting {
        view.range_mut().start_selecting();
    }
    movement(view);
    if !selecting {
        view.range_mut().stop_selecting();
    }
    Some(Cmd::Redraw)
}

pub(super) fn step(view: &mut View, direction: Direction) -> bool {
    match direction {
        Direction::Up => view.move_up(),
        Direction::Down => view.move_down(),
        Direction::Left => view.move_left(),
        Direction::Right => view.move_right(),
    }
}

/// Arrow key without shift. A horizontal move over a selection collapses it
/// to the side it points at instead of stepping.
pub(super) fn move_cursor(editor: &mut Editor, direction: Direction) -> Option<Cmd> {
    move_with(editor, false, |view| {
        let collapse_to = match direction {
            Direction::Left if !view.range().is_empty() => Some(view.range().start().coords()),
            Direction::Right if !view.range().is_empty() => Some(view.range().end().coords()),
            _ => None,
        };
        match collapse_to {
            Some((row, offset)) => view.goto(row, offset),
            None => step(view, direction),
        }
    })
}

/// One token back: a line start wraps to the previous line end, anything
/// else lands on the start of the token left of the cursor
pub(super) fn prev_token(view: &mut View) -> bool {
    if view.cursor().is_at_line_start() {
        view.move_left()
    } else {
        let moved = view.move_left();
        view.goto_token_start() || moved
    }
}

/// One token forward: a line end wraps to the next line start, anything
/// else lands on the end of the token under the cursor
pub(super) fn next_token(view: &mut View) -> bool {
    if view.cursor().is_at_line_end(view.buffer()) {
        view.move_right()
    } else {
        view.goto_token_end()
    }
}

pub(super) fn select_all(editor: &mut Editor) -> Option<Cmd> {
    let view = &mut editor.view;
    view.goto_start();
    view.range_mut().restart_selecting();
    view.goto_end();
    Some(Cmd::Redraw)
}

pub(super) fn mouse_press(editor: &mut Editor, row: usize, col: usize, extend: bool) -> Option<Cmd> {
    editor.mouse_down = true;
    let view = &mut editor.view;
    if extend {
        view.range_mut().start_selecting();
    } else {
        view.range_mut().stop_selecting();
    }
    view.goto_row_col(row, col);
    Some(Cmd::Redraw)
}

pub(super) fn mouse_drag(editor: &mut Editor, row: usize, col: usize) -> Option<Cmd> {
    if !editor.mouse_down {
        return None;
    }
    let view = &mut editor.view;
    view.range_mut().start_selecting();
    view.goto_row_col(row, col).then_some(Cmd::Redraw)
}

pub(super) fn double_click(editor: &mut Editor) -> Option<Cmd> {
    let view = &mut editor.view;
    view.goto_token_start();
    view.range_mut().restart_selecting();
    view.goto_token_end();
    Some(Cmd::Redraw)
}
