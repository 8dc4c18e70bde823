//! Paceboard core data models.
//!
//! This crate defines the persisted tracker document (users, goals and the
//! activity history), the tracking window pace is measured against, and the
//! seed that bootstraps a fresh document. Nothing in here touches the disk.

#![warn(missing_docs)]

mod error;

// Tracked data
mod goal;
mod history;
mod state;

// Deployment configuration
mod seed;
mod theme;
mod window;

// Re-exports
pub use error::{CoreError, Result};

pub use goal::{Goal, User};
pub use history::{HistoryEntry, TIME_FORMAT};
pub use state::TrackerState;

pub use seed::{DefaultSeed, SeedProvider};
pub use theme::{default_themes, UserTheme};
pub use window::TrackingWindow;

/// Wall-clock timestamp attached to history entries.
pub type Time = chrono::NaiveDateTime;
