//! Property-based tests for the pagination window.
//!
//! These verify the windowing invariants hold across randomly generated
//! sequences, cursors, limits, and directions.

use proptest::prelude::*;

use gantry_query::{apply_page_window, PageWindow};

/// Short alphabetic strings, duplicates allowed so cursor ties occur.
fn item() -> impl Strategy<Value = String> {
    "[a-e]{1,2}"
}

/// Limits cluster near the sequence length but include the extremes.
fn limit() -> impl Strategy<Value = usize> {
    prop_oneof![
        4 => 0usize..12,
        1 => Just(usize::MAX),
        1 => Just(usize::MAX - 1),
    ]
}

fn page_window() -> impl Strategy<Value = PageWindow> {
    (
        prop::option::of(item()),
        prop::option::of(limit()),
        any::<bool>(),
    )
        .prop_map(|(cursor, limit, reverse)| PageWindow::new(cursor, limit, reverse))
}

proptest! {
    #[test]
    fn window_is_contiguous_in_bounds_subsequence(
        items in prop::collection::vec(item(), 0..20),
        window in page_window(),
    ) {
        let page = apply_page_window(&items, &window);

        prop_assert!(page.len() <= items.len());

        // The page must equal some contiguous run of the input, in the
        // input's element order.
        let found = (0..=items.len() - page.len())
            .any(|start| items[start..start + page.len()] == *page);
        prop_assert!(found, "page {page:?} is not a contiguous run of {items:?}");
    }

    #[test]
    fn window_obeys_limit(
        items in prop::collection::vec(item(), 0..20),
        cursor in prop::option::of(item()),
        limit in limit(),
        reverse in any::<bool>(),
    ) {
        let window = PageWindow::new(cursor, Some(limit), reverse);
        let page = apply_page_window(&items, &window);
        prop_assert!(page.len() <= limit);
    }

    #[test]
    fn absent_cursor_and_limit_is_identity(
        items in prop::collection::vec(item(), 0..20),
        reverse in any::<bool>(),
    ) {
        let window = PageWindow::new(None, None, reverse);
        let page = apply_page_window(&items, &window);
        prop_assert_eq!(page, &items[..]);
    }

    #[test]
    fn forward_page_starts_after_matched_cursor(
        items in prop::collection::vec(item(), 1..20),
        index in 0usize..19,
        limit in prop::option::of(1usize..12),
    ) {
        prop_assume!(index < items.len());
        let cursor = items[index].clone();
        let first_match = items.iter().position(|i| *i == cursor).unwrap();

        let window = PageWindow::new(Some(cursor), limit, false);
        let page = apply_page_window(&items, &window);

        let expected_start = first_match + 1;
        let expected_end = match limit {
            Some(limit) => (expected_start + limit).min(items.len()),
            None => items.len(),
        };
        prop_assert_eq!(page, &items[expected_start..expected_end]);
    }
}
