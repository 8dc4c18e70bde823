//! Progress Tracking
//!
//! Pace estimation against the tracking window, activity log queries, and
//! the add-progress action that ties them to storage.

#![warn(missing_docs)]

pub mod activity;
pub mod estimator;
pub mod snapshot;
pub mod tracker;

pub use activity::{append, compose_note, daily_mvp, recent, DailyMvp};
pub use estimator::{goal_status, pace_status, time_progress, window_progress, PaceStatus, TimeProgress};
pub use snapshot::{GoalProgress, ProgressSnapshot, UserProgress};
pub use tracker::{
    apply_update, BasicProgressTracker, ProgressError, ProgressTracker, ProgressUpdate, Result,
};
