#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use pagerange::{compute, total_pages};

#[derive(Debug, Arbitrary)]
struct Input {
    total_items: usize,
    items_per_page: usize,
    current_page: usize,
    sibling_count: u8,
}

fuzz_target!(|input: Input| {
    let sibling_count = usize::from(input.sibling_count);
    let total = total_pages(input.total_items, input.items_per_page);

    // Any input, in range or not, must not panic.
    let state = compute(
        input.total_items,
        input.items_per_page,
        input.current_page,
        sibling_count,
    );
    assert_eq!(state.total_pages, total);
    assert!(state.ellipsis_count() <= 2, "too many ellipses: {:?}", state.pages);
    assert_eq!(state.has_next, state.next_page.is_some());
    assert_eq!(state.has_previous, state.previous_page.is_some());

    if (1..=total).contains(&input.current_page) {
        let numbers: Vec<usize> = state.page_numbers().collect();
        assert!(
            numbers.windows(2).all(|pair| pair[0] < pair[1]),
            "page numbers not increasing: {:?}",
            state.pages
        );
        assert_eq!(numbers.first(), Some(&1));
        assert_eq!(numbers.last(), Some(&total));
        assert!(state.contains_page(input.current_page));
    }
});
