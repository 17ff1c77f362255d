#![forbid(unsafe_code)]

//! Ellipsis-compressed page ranges for paginated UIs.
//!
//! Computes bounded page lists such as `1 … 4 5 6 … 10` and tracks the
//! current page with change notification.
//!
//! # Role
//! `pagerange` owns the arithmetic between "how many items, how many per
//! page, which page" and "which page buttons to show". Rendering, routing
//! and data fetching stay with the caller, which consumes
//! [`PaginationState`].
//!
//! # How it fits together
//! [`range::compute`] is a pure function with no state. A
//! [`PaginationController`] holds the current page, validates navigation
//! requests against the page count, and reports every accepted transition
//! through its callback.
//!
//! # Features
//! - `tracing`: debug events for construction and page transitions.
//! - `state-persistence`: serde derives for the config, token and state
//!   types.

pub mod config;
pub mod controller;
pub mod range;
pub mod state;
pub mod token;

pub use config::{DEFAULT_SIBLING_COUNT, PaginationConfig, PaginationError, Result};
pub use controller::{PaginationController, StateChangeFn};
pub use range::{compute, item_window, total_pages};
pub use state::{PaginationPersistState, PaginationState};
pub use token::PageToken;
