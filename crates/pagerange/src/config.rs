#![forbid(unsafe_code)]

//! Construction options and their validation.

use std::fmt;

use crate::range;

/// Default radius of the sibling window.
pub const DEFAULT_SIBLING_COUNT: usize = 2;

/// Options for a [`PaginationController`](crate::PaginationController).
///
/// ```
/// use pagerange::PaginationConfig;
///
/// let config = PaginationConfig::new(250, 25).initial_page(3).sibling_count(1);
/// assert_eq!(config.total_pages(), 10);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct PaginationConfig {
    /// Number of items being paginated.
    pub total_items: usize,
    /// Items shown per page. Must be non-zero.
    pub items_per_page: usize,
    /// 1-based page to start on.
    pub initial_page: usize,
    /// Pages shown on each side of the current page.
    pub sibling_count: usize,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            total_items: 0,
            items_per_page: 10,
            initial_page: 1,
            sibling_count: DEFAULT_SIBLING_COUNT,
        }
    }
}

impl PaginationConfig {
    /// Create options for `total_items` shown `items_per_page` at a time.
    #[must_use]
    pub fn new(total_items: usize, items_per_page: usize) -> Self {
        Self {
            total_items,
            items_per_page,
            ..Self::default()
        }
    }

    /// Set the page to start on.
    #[must_use]
    pub fn initial_page(mut self, page: usize) -> Self {
        self.initial_page = page;
        self
    }

    /// Set the sibling window radius.
    #[must_use]
    pub fn sibling_count(mut self, count: usize) -> Self {
        self.sibling_count = count;
        self
    }

    /// Page count implied by these options.
    #[must_use]
    pub fn total_pages(&self) -> usize {
        range::total_pages(self.total_items, self.items_per_page)
    }

    /// Check the options before a controller is built from them.
    ///
    /// With zero items there are no pages, and page 1 is still accepted as
    /// the initial page.
    pub fn validate(&self) -> Result<()> {
        if self.items_per_page == 0 {
            return Err(PaginationError::ZeroItemsPerPage);
        }
        if self.initial_page == 0 {
            return Err(PaginationError::ZeroInitialPage);
        }
        let total_pages = self.total_pages();
        if self.initial_page > total_pages.max(1) {
            return Err(PaginationError::InitialPageOutOfRange {
                page: self.initial_page,
                total_pages,
            });
        }
        Ok(())
    }
}

/// Invalid [`PaginationConfig`].
///
/// This is the invalid-configuration error: every variant is raised at
/// construction time, never by navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginationError {
    /// `items_per_page` was zero.
    ZeroItemsPerPage,
    /// `initial_page` was zero; pages are 1-based.
    ZeroInitialPage,
    /// `initial_page` lies past the last page.
    InitialPageOutOfRange { page: usize, total_pages: usize },
}

impl fmt::Display for PaginationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroItemsPerPage => {
                f.write_str("invalid configuration: items_per_page must be positive")
            }
            Self::ZeroInitialPage => {
                f.write_str("invalid configuration: pages are 1-based, got initial page 0")
            }
            Self::InitialPageOutOfRange { page, total_pages } => write!(
                f,
                "invalid configuration: initial page {page} exceeds total pages {total_pages}"
            ),
        }
    }
}

impl std::error::Error for PaginationError {}

/// Standard result type for pagerange APIs.
pub type Result<T> = std::result::Result<T, PaginationError>;
