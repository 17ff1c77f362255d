#![forbid(unsafe_code)]

//! Current-page state with change notification.
//!
//! # Design
//!
//! [`PaginationController`] owns a single `current_page` and a validated
//! configuration. Every navigation method funnels into one gate that accepts
//! a target only when it lies in `1..=total_pages` and differs from the
//! current page. Accepted transitions recompute the [`PaginationState`] and
//! hand it to the registered callback before returning.
//!
//! # Failure Modes
//!
//! - **Rejected navigation**: out-of-range or same-page targets are ignored.
//!   Nothing is mutated and the callback does not fire. UI callers disable
//!   controls using `has_next`/`has_previous` instead of handling errors.
//! - **Re-entrant navigation**: the callback only sees a shared borrow of the
//!   state while the controller is mutably borrowed, so it cannot call back
//!   into the same controller.

use std::fmt;
use std::ops::Range;

use crate::config::{PaginationConfig, Result};
use crate::range;
use crate::state::{PaginationPersistState, PaginationState};

/// Handler invoked after every accepted page transition.
pub type StateChangeFn = Box<dyn FnMut(&PaginationState)>;

/// Stateful pagination over a fixed item count.
///
/// ```
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// use pagerange::{PaginationConfig, PaginationController};
///
/// let seen = Rc::new(RefCell::new(Vec::new()));
/// let sink = Rc::clone(&seen);
/// let mut pager = PaginationController::new(PaginationConfig::new(100, 10), move |state| {
///     sink.borrow_mut().push(state.current_page);
/// })?;
///
/// assert_eq!(pager.initial_state().current_page, 1);
/// assert!(pager.next_page());
/// assert!(pager.previous_page());
/// assert!(!pager.previous_page());
/// assert_eq!(*seen.borrow(), [2, 1]);
/// # Ok::<(), pagerange::PaginationError>(())
/// ```
pub struct PaginationController {
    config: PaginationConfig,
    total_pages: usize,
    current_page: usize,
    initial_state: PaginationState,
    on_state_change: StateChangeFn,
}

impl fmt::Debug for PaginationController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaginationController")
            .field("config", &self.config)
            .field("total_pages", &self.total_pages)
            .field("current_page", &self.current_page)
            .finish_non_exhaustive()
    }
}

impl PaginationController {
    /// Build a controller, validating `config` first.
    ///
    /// The initial state is computed here and is available through
    /// [`initial_state`](Self::initial_state); `on_state_change` is not
    /// called for it.
    pub fn new(
        config: PaginationConfig,
        on_state_change: impl FnMut(&PaginationState) + 'static,
    ) -> Result<Self> {
        config.validate()?;

        let total_pages = config.total_pages();
        let current_page = config.initial_page;
        let initial_state = range::compute(
            config.total_items,
            config.items_per_page,
            current_page,
            config.sibling_count,
        );

        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "pagination.init",
            total_items = config.total_items,
            items_per_page = config.items_per_page,
            current_page,
            total_pages
        );

        Ok(Self {
            config,
            total_pages,
            current_page,
            initial_state,
            on_state_change: Box::new(on_state_change),
        })
    }

    /// State computed at construction time.
    #[must_use]
    pub fn initial_state(&self) -> &PaginationState {
        &self.initial_state
    }

    /// Recompute the state for the current page without notifying.
    #[must_use]
    pub fn state(&self) -> PaginationState {
        self.compute(self.current_page)
    }

    /// The 1-based current page.
    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.current_page
    }

    /// Number of pages. Zero for an empty collection.
    #[must_use]
    pub const fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// The validated options this controller was built from.
    #[must_use]
    pub const fn config(&self) -> &PaginationConfig {
        &self.config
    }

    /// Item indices shown on the current page.
    #[must_use]
    pub fn item_window(&self) -> Range<usize> {
        range::item_window(
            self.config.total_items,
            self.config.items_per_page,
            self.current_page,
        )
    }

    /// Move to `page`.
    ///
    /// Returns `true` and notifies when the page changed. Targets outside
    /// `1..=total_pages` or equal to the current page are ignored.
    pub fn go_to_page(&mut self, page: usize) -> bool {
        self.navigate(page, "go_to")
    }

    /// Move one page forward.
    pub fn next_page(&mut self) -> bool {
        self.navigate(self.current_page.saturating_add(1), "next")
    }

    /// Move one page back.
    pub fn previous_page(&mut self) -> bool {
        self.navigate(self.current_page.saturating_sub(1), "previous")
    }

    /// Move to page 1.
    pub fn first_page(&mut self) -> bool {
        self.navigate(1, "first")
    }

    /// Move to the last page.
    pub fn last_page(&mut self) -> bool {
        self.navigate(self.total_pages, "last")
    }

    /// Snapshot the user-facing position.
    #[must_use]
    pub fn save_state(&self) -> PaginationPersistState {
        PaginationPersistState {
            current_page: self.current_page,
        }
    }

    /// Return to a saved position.
    ///
    /// Goes through the same gate as [`go_to_page`](Self::go_to_page), so a
    /// page that no longer exists is ignored.
    pub fn restore_state(&mut self, state: PaginationPersistState) -> bool {
        self.navigate(state.current_page, "restore")
    }

    fn navigate(&mut self, page: usize, reason: &str) -> bool {
        if page == 0 || page > self.total_pages || page == self.current_page {
            self.log_rejected(reason, page);
            return false;
        }

        let from = self.current_page;
        self.current_page = page;
        self.log_transition(reason, from);

        let state = self.compute(page);
        (self.on_state_change)(&state);
        true
    }

    fn compute(&self, page: usize) -> PaginationState {
        range::compute(
            self.config.total_items,
            self.config.items_per_page,
            page,
            self.config.sibling_count,
        )
    }

    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    fn log_transition(&self, reason: &str, from: usize) {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "pagination.transition",
            reason,
            from,
            to = self.current_page,
            total_pages = self.total_pages
        );
    }

    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    fn log_rejected(&self, reason: &str, page: usize) {
        #[cfg(feature = "tracing")]
        tracing::trace!(
            message = "pagination.rejected",
            reason,
            page,
            current_page = self.current_page,
            total_pages = self.total_pages
        );
    }
}
