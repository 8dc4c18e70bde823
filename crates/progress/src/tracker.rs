//! Progress tracking service.
//!
//! Recording progress is the only mutation the dashboard performs: one
//! goal grows, one history entry is appended, and the whole document is
//! saved before the new state is handed back.

use async_trait::async_trait;
use paceboard_core::{TrackerState, Time};
use paceboard_storage::{Storage, StorageError};
use tracing::debug;

use crate::activity::{append, compose_note};

/// Error type for progress operations.
pub type Result<T> = std::result::Result<T, ProgressError>;

/// Errors that can occur while recording progress.
#[derive(Debug, thiserror::Error)]
pub enum ProgressError {
    /// Amount was zero, negative or not a number
    #[error("invalid increment {0}: amount must be greater than zero")]
    InvalidIncrement(f64),

    /// No such user
    #[error("unknown user '{0}'")]
    UnknownUser(String),

    /// The user has no such goal
    #[error("user '{user}' has no goal '{goal}'")]
    UnknownGoal {
        /// User name
        user: String,
        /// Goal name
        goal: String,
    },

    /// Loading or saving failed
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// A request to add to one goal.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressUpdate {
    /// User who made progress
    pub user: String,

    /// Goal to add to
    pub goal: String,

    /// Amount to add, must be positive
    pub amount: f64,

    /// Optional free-text note
    pub victory: Option<String>,
}

impl ProgressUpdate {
    /// Create an update without a note.
    pub fn new(user: impl Into<String>, goal: impl Into<String>, amount: f64) -> Self {
        Self {
            user: user.into(),
            goal: goal.into(),
            amount,
            victory: None,
        }
    }

    /// Attach a free-text note.
    pub fn with_victory(mut self, victory: impl Into<String>) -> Self {
        self.victory = Some(victory.into());
        self
    }
}

/// Progress tracking service.
#[async_trait]
pub trait ProgressTracker: Send + Sync {
    /// Load the current state.
    async fn load(&self) -> Result<TrackerState>;

    /// Apply `update` to `state`, persist the result and return it.
    ///
    /// On any error nothing is saved and `state` remains the latest
    /// persisted state.
    async fn record(
        &mut self,
        state: &TrackerState,
        update: &ProgressUpdate,
        now: Time,
    ) -> Result<TrackerState>;
}

/// Basic progress tracker implementation.
pub struct BasicProgressTracker<S: Storage> {
    storage: S,
}

impl<S: Storage> BasicProgressTracker<S> {
    /// Create a new progress tracker.
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Borrow the underlying storage.
    pub fn storage(&self) -> &S {
        &self.storage
    }
}

#[async_trait]
impl<S: Storage + 'static> ProgressTracker for BasicProgressTracker<S> {
    async fn load(&self) -> Result<TrackerState> {
        Ok(self.storage.load().await?)
    }

    async fn record(
        &mut self,
        state: &TrackerState,
        update: &ProgressUpdate,
        now: Time,
    ) -> Result<TrackerState> {
        let next = apply_update(state, update, now)?;
        self.storage.save(&next).await?;

        debug!(user = %update.user, goal = %update.goal, amount = update.amount, "recorded progress");
        Ok(next)
    }
}

/// Build the state that results from `update`, without persisting it.
///
/// The amount is validated before anything else, so a rejected update
/// never produces a history entry. An amount that would push the goal past
/// the largest representable value is rejected the same way.
pub fn apply_update(state: &TrackerState, update: &ProgressUpdate, now: Time) -> Result<TrackerState> {
    if !update.amount.is_finite() || update.amount <= 0.0 {
        return Err(ProgressError::InvalidIncrement(update.amount));
    }
    if state.user(&update.user).is_none() {
        return Err(ProgressError::UnknownUser(update.user.clone()));
    }

    let mut next = state.clone();
    let goal = next
        .goal_mut(&update.user, &update.goal)
        .ok_or_else(|| ProgressError::UnknownGoal {
            user: update.user.clone(),
            goal: update.goal.clone(),
        })?;
    if !(goal.current + update.amount).is_finite() {
        return Err(ProgressError::InvalidIncrement(update.amount));
    }
    goal.increment(update.amount);

    let note = compose_note(update.amount, &goal.unit, &update.goal, update.victory.as_deref());
    next.history = append(std::mem::take(&mut next.history), &update.user, note, now);
    Ok(next)
}
