#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use pagerange::{PaginationConfig, PaginationController};

#[derive(Debug, Arbitrary)]
enum Nav {
    GoTo(u16),
    Next,
    Previous,
    First,
    Last,
}

#[derive(Debug, Arbitrary)]
struct Input {
    total_items: u16,
    items_per_page: u8,
    initial_page: u16,
    sibling_count: u8,
    ops: Vec<Nav>,
}

fuzz_target!(|input: Input| {
    let config = PaginationConfig::new(
        usize::from(input.total_items),
        usize::from(input.items_per_page),
    )
    .initial_page(usize::from(input.initial_page))
    .sibling_count(usize::from(input.sibling_count));

    // Invalid configs are rejected, never panicking.
    let Ok(mut controller) = PaginationController::new(config, |state| {
        assert!(state.current_page >= 1 && state.current_page <= state.total_pages);
    }) else {
        return;
    };

    for op in input.ops.into_iter().take(256) {
        let before = controller.current_page();
        let moved = match op {
            Nav::GoTo(page) => controller.go_to_page(usize::from(page)),
            Nav::Next => controller.next_page(),
            Nav::Previous => controller.previous_page(),
            Nav::First => controller.first_page(),
            Nav::Last => controller.last_page(),
        };
        assert_eq!(moved, before != controller.current_page());
    }
});
