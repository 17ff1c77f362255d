#![forbid(unsafe_code)]

//! Pure page-range math.
//!
//! [`compute`] derives the ellipsis-compressed page list for a position:
//! page 1, a window of `sibling_count` pages on each side of the current
//! page, and the last page, with an [`PageToken::Ellipsis`] standing in for
//! every gap of one or more unlisted pages.
//!
//! ```text
//! total=10, current=5, siblings=1:  1 … 4 5 6 … 10
//! total=10, current=1, siblings=2:  1 2 3 … 10
//! total=3,  current=2, siblings=2:  1 2 3
//! ```
//!
//! Nothing here validates `current_page`. An out-of-range page produces a
//! window derived by the same arithmetic, which is meaningless but harmless.
//! [`PaginationController`](crate::PaginationController) bounds the page
//! before calling in.

use std::ops::Range;

use crate::state::PaginationState;
use crate::token::PageToken;

/// Number of pages needed to show `total_items` at `items_per_page` per page.
///
/// A zero page size yields zero pages.
#[must_use]
pub fn total_pages(total_items: usize, items_per_page: usize) -> usize {
    if items_per_page == 0 {
        return 0;
    }
    total_items.div_ceil(items_per_page)
}

/// Half-open range of item indices shown on `page`.
///
/// Pages past the end yield an empty range at `total_items`.
#[must_use]
pub fn item_window(total_items: usize, items_per_page: usize, page: usize) -> Range<usize> {
    let start = page
        .saturating_sub(1)
        .saturating_mul(items_per_page)
        .min(total_items);
    let end = start.saturating_add(items_per_page).min(total_items);
    start..end
}

/// Compute the page list and navigation flags for `current_page`.
#[must_use]
pub fn compute(
    total_items: usize,
    items_per_page: usize,
    current_page: usize,
    sibling_count: usize,
) -> PaginationState {
    let total_pages = total_pages(total_items, items_per_page);
    let pages = page_list(total_pages, current_page, sibling_count);

    let has_next = current_page < total_pages;
    let has_previous = current_page > 1;

    PaginationState {
        pages,
        current_page,
        total_pages,
        has_next,
        has_previous,
        next_page: has_next.then(|| current_page + 1),
        previous_page: has_previous.then(|| current_page - 1),
    }
}

fn page_list(total_pages: usize, current_page: usize, sibling_count: usize) -> Vec<PageToken> {
    if total_pages == 0 {
        return Vec::new();
    }

    // `start >= 2` and `end <= total_pages - 1` keep the window off both
    // boundary pages, so nothing is emitted twice.
    let last_inner = total_pages - 1;
    let start = current_page.saturating_sub(sibling_count).max(2);
    let end = current_page.saturating_add(sibling_count).min(last_inner);

    let window_len = (end + 1).saturating_sub(start);
    let mut pages = Vec::with_capacity(window_len + 4);

    pages.push(PageToken::Page(1));
    if start > 2 {
        pages.push(PageToken::Ellipsis);
    }
    pages.extend((start..=end).map(PageToken::Page));
    if end < last_inner {
        pages.push(PageToken::Ellipsis);
    }
    if total_pages > 1 {
        pages.push(PageToken::Page(total_pages));
    }

    pages
}
