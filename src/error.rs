//! Dashboard Error Types
//!
//! Errors raised by view-state transitions and fixture validation.

use thiserror::Error;

/// Errors from dashboard state and model checks
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DashboardError {
    /// An index outside the bounds of its collection
    #[error("index {index} out of range for length {len}")]
    OutOfRange { index: usize, len: usize },

    /// A carousel was built without slides
    #[error("carousel '{0}' has no slides")]
    EmptyCarousel(String),

    /// Fixture data does not match the layout that renders it
    #[error("layout mismatch in {what}: expected {expected} items, found {actual}")]
    Layout {
        what: String,
        expected: usize,
        actual: usize,
    },
}

/// Result type for dashboard operations
pub type DashboardResult<T> = Result<T, DashboardError>;
