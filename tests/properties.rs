//! Property tests - cache consistency under arbitrary edits, clamping, ordering

mod common;

use common::{select, test_view};
use lexedit::editable::{Buffer, Ordered, Position};
use proptest::prelude::*;

fn arb_text() -> impl Strategy<Value = String> {
    "[ab /*\"'\n\t]{0,40}"
}

/// `(from, to, replacement, ticks after the edit)`
type Edit = ((usize, usize), (usize, usize), String, usize);

fn arb_edit() -> impl Strategy<Value = Edit> {
    (
        (0usize..8, 0usize..12),
        (0usize..8, 0usize..12),
        arb_text(),
        0usize..3,
    )
}

proptest! {
    /// After any edit sequence, with propagation cut short in between, the
    /// token cache matches a full re-lex of the final text.
    #[test]
    fn prop_incremental_lex_matches_rebuild(
        text in arb_text(),
        edits in prop::collection::vec(arb_edit(), 1..8),
    ) {
        let mut view = test_view(&text, 0, 0);
        for (from, to, replacement, ticks) in &edits {
            select(&mut view, *from, *to);
            view.replace_range_text(replacement).unwrap();
            prop_assert_eq!(view.tokenizer().line_count(), view.buffer().line_count());
            for _ in 0..*ticks {
                view.tick();
            }
        }
        view.run_until_idle();

        let fresh = test_view(&view.buffer().text(), 0, 0);
        prop_assert!(view.tokenizer().is_consistent());
        prop_assert_eq!(view.tokenizer().lines(), fresh.tokenizer().lines());
    }

    /// Selecting everything yields the document text.
    #[test]
    fn prop_full_range_is_document_text(text in arb_text()) {
        let mut view = test_view(&text, 0, 0);
        select(&mut view, (0, 0), (usize::MAX, usize::MAX));
        prop_assert_eq!(view.range_text().unwrap(), view.buffer().text());
    }

    /// Set clamps into the buffer, and setting the clamped coordinates again
    /// is a no-op.
    #[test]
    fn prop_set_clamps_idempotently(text in arb_text(), row in 0usize..20, offset in 0usize..60) {
        let buffer = Buffer::from_text(&text);
        let mut pos = Position::new(&buffer, 4);
        pos.set(&buffer, row, offset);

        let (r, o) = pos.coords();
        prop_assert!(r < buffer.line_count());
        prop_assert!(o <= buffer.line_len(r));
        prop_assert!(!pos.set(&buffer, r, o));
    }

    /// Range start never lies after its end, whichever way it was selected.
    #[test]
    fn prop_range_start_not_after_end(
        text in arb_text(),
        from in (0usize..8, 0usize..12),
        to in (0usize..8, 0usize..12),
    ) {
        let mut view = test_view(&text, 0, 0);
        select(&mut view, from, to);
        let range = view.range();
        prop_assert!(!range.start().is_greater(range.end()).unwrap());
        prop_assert_eq!(range.rows(), range.end().row() - range.start().row() + 1);
    }
}
