//! Errors raised while building core values.

use chrono::NaiveDate;

/// Result alias for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors that can occur when constructing core values.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CoreError {
    /// The tracking window ends before it starts.
    #[error("invalid tracking window: {end} is before {start}")]
    InvalidWindow {
        /// First day of the window
        start: NaiveDate,
        /// Last day of the window
        end: NaiveDate,
    },

    /// A goal target is negative or not a number.
    #[error("invalid target {target} for goal '{goal}'")]
    InvalidTarget {
        /// Goal name
        goal: String,
        /// Rejected target
        target: f64,
    },
}
