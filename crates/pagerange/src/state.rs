#![forbid(unsafe_code)]

//! Snapshot of a pagination position.

use crate::token::PageToken;

/// Page list plus navigation flags for one current page.
///
/// # Invariants
///
/// 1. `pages` contains page 1 when `total_pages >= 1`.
/// 2. `pages` contains `total_pages` when `total_pages > 1`.
/// 3. Integer entries are strictly increasing.
/// 4. An ellipsis only stands for a gap of at least one unlisted page.
/// 5. `has_next == next_page.is_some()` and
///    `has_previous == previous_page.is_some()`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct PaginationState {
    /// Ordered page list, including ellipsis markers.
    pub pages: Vec<PageToken>,
    /// The 1-based current page.
    pub current_page: usize,
    /// `ceil(total_items / items_per_page)`.
    pub total_pages: usize,
    /// Whether a page follows the current one.
    pub has_next: bool,
    /// Whether a page precedes the current one.
    pub has_previous: bool,
    /// The following page, if any.
    pub next_page: Option<usize>,
    /// The preceding page, if any.
    pub previous_page: Option<usize>,
}

impl PaginationState {
    /// Iterate over the page numbers in the list, skipping ellipsis markers.
    pub fn page_numbers(&self) -> impl Iterator<Item = usize> + '_ {
        self.pages.iter().filter_map(|token| token.page())
    }

    /// Number of ellipsis markers in the list.
    #[must_use]
    pub fn ellipsis_count(&self) -> usize {
        self.pages.iter().filter(|token| token.is_ellipsis()).count()
    }

    /// Whether `page` is listed explicitly.
    #[must_use]
    pub fn contains_page(&self, page: usize) -> bool {
        self.page_numbers().any(|listed| listed == page)
    }
}

/// Persistable state for a [`PaginationController`](crate::PaginationController).
///
/// Only the user-facing position survives; the page list is recomputed on
/// restore.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct PaginationPersistState {
    /// The 1-based page that was current when the state was saved.
    pub current_page: usize,
}
