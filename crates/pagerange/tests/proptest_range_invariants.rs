//! Property-based invariant tests for page-range computation.
//!
//! 1. Page numbers are strictly increasing (so never duplicated)
//! 2. At most two ellipsis markers, never adjacent, never at either end
//! 3. Boundary pages are always listed
//! 4. Every ellipsis hides at least one page
//! 5. The sibling window around the current page is fully listed
//! 6. `total_pages` is exactly `ceil(total_items / items_per_page)`
//! 7. Navigation flags agree with their optional pages
//! 8. Item windows tile the collection without gaps or overlap
//! 9. The controller never leaves `1..=total_pages` under random navigation

use std::cell::Cell;
use std::rc::Rc;

use pagerange::{
    PageToken, PaginationConfig, PaginationController, compute, item_window, total_pages,
};
use proptest::prelude::*;

// ── Helpers ──────────────────────────────────────────────────────────

/// `(total_items, items_per_page, current_page, sibling_count)` with the
/// current page inside the valid range.
fn valid_position() -> impl Strategy<Value = (usize, usize, usize, usize)> {
    (0usize..5_000, 1usize..120, 0usize..6).prop_flat_map(|(items, per_page, siblings)| {
        let pages = total_pages(items, per_page).max(1);
        (Just(items), Just(per_page), 1..=pages, Just(siblings))
    })
}

#[derive(Debug, Clone, Copy)]
enum Nav {
    GoTo(usize),
    Next,
    Previous,
    First,
    Last,
}

fn nav_op() -> impl Strategy<Value = Nav> {
    prop_oneof![
        (0usize..40).prop_map(Nav::GoTo),
        Just(Nav::Next),
        Just(Nav::Previous),
        Just(Nav::First),
        Just(Nav::Last),
    ]
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Strictly increasing page numbers
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn page_numbers_strictly_increase((items, per_page, current, siblings) in valid_position()) {
        let state = compute(items, per_page, current, siblings);
        let numbers: Vec<usize> = state.page_numbers().collect();
        for pair in numbers.windows(2) {
            prop_assert!(pair[0] < pair[1], "not increasing: {:?}", state.pages);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Ellipsis placement
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn ellipsis_count_and_placement((items, per_page, current, siblings) in valid_position()) {
        let state = compute(items, per_page, current, siblings);
        prop_assert!(state.ellipsis_count() <= 2);
        if let Some(first) = state.pages.first() {
            prop_assert!(!first.is_ellipsis());
        }
        if let Some(last) = state.pages.last() {
            prop_assert!(!last.is_ellipsis());
        }
        for pair in state.pages.windows(2) {
            prop_assert!(
                !(pair[0].is_ellipsis() && pair[1].is_ellipsis()),
                "adjacent ellipsis markers: {:?}",
                state.pages
            );
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Boundary pages
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn boundary_pages_listed((items, per_page, current, siblings) in valid_position()) {
        let state = compute(items, per_page, current, siblings);
        if state.total_pages == 0 {
            prop_assert!(state.pages.is_empty());
        } else {
            prop_assert_eq!(state.pages.first(), Some(&PageToken::Page(1)));
            prop_assert_eq!(state.pages.last(), Some(&PageToken::Page(state.total_pages)));
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Every ellipsis hides at least one page
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn ellipsis_marks_real_gap((items, per_page, current, siblings) in valid_position()) {
        let state = compute(items, per_page, current, siblings);
        for (idx, token) in state.pages.iter().enumerate() {
            if token.is_ellipsis() {
                let before = state.pages[idx - 1].page().unwrap_or(0);
                let after = state.pages[idx + 1].page().unwrap_or(0);
                prop_assert!(after > before + 1, "empty gap in {:?}", state.pages);
            }
        }
        // Without an ellipsis every page is listed.
        if state.ellipsis_count() == 0 {
            prop_assert_eq!(state.page_numbers().count(), state.total_pages);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Sibling window
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn sibling_window_listed((items, per_page, current, siblings) in valid_position()) {
        let state = compute(items, per_page, current, siblings);
        if state.total_pages > 0 {
            let lo = current.saturating_sub(siblings).max(1);
            let hi = (current + siblings).min(state.total_pages);
            for page in lo..=hi {
                prop_assert!(
                    state.contains_page(page),
                    "page {} missing from {:?}",
                    page,
                    state.pages
                );
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Page count
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn total_pages_is_ceiling(items in 0usize..1_000_000, per_page in 1usize..10_000) {
        let pages = total_pages(items, per_page);
        prop_assert!(pages * per_page >= items);
        if pages > 0 {
            prop_assert!((pages - 1) * per_page < items);
        } else {
            prop_assert_eq!(items, 0);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 7. Navigation flags
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn flags_agree_with_neighbours((items, per_page, current, siblings) in valid_position()) {
        let state = compute(items, per_page, current, siblings);
        prop_assert_eq!(state.has_next, state.next_page.is_some());
        prop_assert_eq!(state.has_next, current < state.total_pages);
        prop_assert_eq!(state.has_previous, state.previous_page.is_some());
        prop_assert_eq!(state.has_previous, current > 1);
        if let Some(next) = state.next_page {
            prop_assert_eq!(next, current + 1);
        }
        if let Some(previous) = state.previous_page {
            prop_assert_eq!(previous, current - 1);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 8. Item windows tile the collection
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn item_windows_tile(items in 0usize..2_000, per_page in 1usize..50) {
        let mut cursor = 0;
        for page in 1..=total_pages(items, per_page) {
            let window = item_window(items, per_page, page);
            prop_assert_eq!(window.start, cursor);
            prop_assert!(!window.is_empty());
            prop_assert!(window.len() <= per_page);
            cursor = window.end;
        }
        prop_assert_eq!(cursor, items);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 9. Controller stays in range
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn controller_stays_in_range(
        items in 0usize..400,
        per_page in 1usize..30,
        ops in proptest::collection::vec(nav_op(), 0..40),
    ) {
        let notified = Rc::new(Cell::new(0usize));
        let counter = Rc::clone(&notified);
        let mut controller = PaginationController::new(
            PaginationConfig::new(items, per_page),
            move |_| counter.set(counter.get() + 1),
        )
        .expect("valid config");

        let mut accepted = 0usize;
        for op in ops {
            let before = controller.current_page();
            let moved = match op {
                Nav::GoTo(page) => controller.go_to_page(page),
                Nav::Next => controller.next_page(),
                Nav::Previous => controller.previous_page(),
                Nav::First => controller.first_page(),
                Nav::Last => controller.last_page(),
            };
            if moved {
                accepted += 1;
                prop_assert_ne!(before, controller.current_page());
                prop_assert!((1..=controller.total_pages()).contains(&controller.current_page()));
            } else {
                prop_assert_eq!(before, controller.current_page());
            }
        }
        prop_assert_eq!(notified.get(), accepted);
    }
}
