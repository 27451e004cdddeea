//! Selection tests - anchor/head semantics, ordering, containment, overlap

mod common;

use common::{event_log, plain_view, range_coords, select};
use lexedit::editable::{Buffer, Ordered, Position, Range};

fn range_at(buffer: &Buffer, from: (usize, usize), to: (usize, usize)) -> Range {
    let mut head = Position::new(buffer, 4);
    head.set(buffer, from.0, from.1);
    let mut range = Range::new(head);
    range.start_selecting();
    range.move_head(|head| head.set(buffer, to.0, to.1));
    range
}

// ========================================================================
// Selecting state
// ========================================================================

#[test]
fn test_not_selecting_anchor_is_head() {
    let mut view = plain_view("hello", 0, 2);
    assert!(!view.range().is_selecting());
    view.move_right();
    assert_eq!(range_coords(&view), ((0, 3), (0, 3)));
    assert!(view.range().is_empty());
}

#[test]
fn test_start_selecting_forks_anchor() {
    let mut view = plain_view("hello", 0, 1);
    view.range_mut().start_selecting();
    view.move_right();
    view.move_right();
    assert_eq!(range_coords(&view), ((0, 1), (0, 3)));
    assert_eq!(view.range_text().unwrap(), "el");
}

#[test]
fn test_start_selecting_is_idempotent() {
    let mut view = plain_view("hello", 0, 1);
    view.range_mut().start_selecting();
    view.move_right();
    view.range_mut().start_selecting();
    view.move_right();
    assert_eq!(view.range().anchor().coords(), (0, 1));
}

#[test]
fn test_restart_selecting_begins_at_head() {
    let mut view = plain_view("hello", 0, 0);
    select(&mut view, (0, 0), (0, 2));
    view.range_mut().restart_selecting();
    view.move_right();
    assert_eq!(range_coords(&view), ((0, 2), (0, 3)));
}

#[test]
fn test_stop_selecting_notifies_only_when_extent_collapses() {
    let mut view = plain_view("hello", 0, 0);
    let log = event_log();
    let sink = log.clone();
    view.range_mut().subscribe(move |_| sink.borrow_mut().push(()));

    // empty selection: collapse changes nothing
    view.range_mut().start_selecting();
    view.range_mut().stop_selecting();
    assert_eq!(log.borrow().len(), 0);

    // head movement while selecting is re-published
    view.range_mut().start_selecting();
    view.move_right();
    assert_eq!(log.borrow().len(), 1);

    view.range_mut().stop_selecting();
    assert_eq!(log.borrow().len(), 2);

    // head movement without a selection is not a range change
    view.move_right();
    assert_eq!(log.borrow().len(), 2);
}

// ========================================================================
// Ordering
// ========================================================================

#[test]
fn test_start_and_end_ignore_direction() {
    let buffer = Buffer::from_text("abc\ndef\nghi");
    let forward = range_at(&buffer, (0, 1), (2, 2));
    let backward = range_at(&buffer, (2, 2), (0, 1));

    for range in [&forward, &backward] {
        assert_eq!(range.start().coords(), (0, 1));
        assert_eq!(range.end().coords(), (2, 2));
        assert_eq!(range.rows(), 3);
        assert!(range.start().compare(range.end()).unwrap().is_le());
    }
}

#[test]
fn test_ranges_compare_heads_then_anchors() {
    let buffer = Buffer::from_text("abcdef");
    let a = range_at(&buffer, (0, 0), (0, 3));
    let b = range_at(&buffer, (0, 1), (0, 3));
    let c = range_at(&buffer, (0, 0), (0, 4));

    assert!(a.is_lower(&b).unwrap());
    assert!(b.is_lower(&c).unwrap());
    assert!(a.is_equal(&range_at(&buffer, (0, 0), (0, 3))).unwrap());
}

// ========================================================================
// Containment and overlap
// ========================================================================

#[test]
fn test_contains_is_half_open() {
    let buffer = Buffer::from_text("abcdef");
    let range = range_at(&buffer, (0, 1), (0, 4));
    let mut pos = Position::new(&buffer, 4);

    pos.set(&buffer, 0, 1);
    assert!(range.contains(&pos).unwrap());
    pos.set(&buffer, 0, 3);
    assert!(range.contains(&pos).unwrap());
    pos.set(&buffer, 0, 4);
    assert!(!range.contains(&pos).unwrap());
    pos.set(&buffer, 0, 0);
    assert!(!range.contains(&pos).unwrap());
}

#[test]
fn test_touching_ranges_share_a_boundary() {
    let buffer = Buffer::from_text("abcdef");
    let left = range_at(&buffer, (0, 0), (0, 3));
    let right = range_at(&buffer, (0, 3), (0, 6));
    assert!(left.touches(&right).unwrap());
    assert!(right.touches(&left).unwrap());
}

#[test]
fn test_separated_ranges_do_not_touch() {
    let buffer = Buffer::from_text("abcdef");
    let left = range_at(&buffer, (0, 0), (0, 2));
    let right = range_at(&buffer, (0, 3), (0, 6));
    assert!(!left.touches(&right).unwrap());
    assert!(!right.touches(&left).unwrap());
}

#[test]
fn test_overlapping_ranges_touch() {
    let buffer = Buffer::from_text("abc\ndef");
    let outer = range_at(&buffer, (1, 3), (0, 0));
    let inner = range_at(&buffer, (0, 2), (1, 1));
    assert!(outer.touches(&inner).unwrap());
}

#[test]
fn test_ranges_of_different_buffers_are_rejected() {
    let a = Buffer::from_text("abc");
    let b = Buffer::from_text("abc");
    let left = range_at(&a, (0, 0), (0, 1));
    let right = range_at(&b, (0, 0), (0, 1));
    assert!(left.touches(&right).is_err());
    assert!(left.compare(&right).is_err());
}
