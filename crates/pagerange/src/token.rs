#![forbid(unsafe_code)]

//! Page list entries.

use std::fmt;

/// One entry of a computed page list.
///
/// A list may contain up to two [`PageToken::Ellipsis`] entries, one on each
/// side of the sibling window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum PageToken {
    /// A 1-based page number.
    Page(usize),
    /// Marker for one or more omitted pages.
    Ellipsis,
}

impl PageToken {
    /// The page number, or `None` for an ellipsis.
    #[must_use]
    pub const fn page(self) -> Option<usize> {
        match self {
            Self::Page(page) => Some(page),
            Self::Ellipsis => None,
        }
    }

    /// Whether this entry is an ellipsis marker.
    #[must_use]
    pub const fn is_ellipsis(self) -> bool {
        matches!(self, Self::Ellipsis)
    }
}

impl From<usize> for PageToken {
    fn from(page: usize) -> Self {
        Self::Page(page)
    }
}

impl fmt::Display for PageToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Page(page) => write!(f, "{page}"),
            Self::Ellipsis => f.write_str("…"),
        }
    }
}
