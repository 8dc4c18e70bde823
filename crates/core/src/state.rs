//! Tracker state - the whole persisted document.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::goal::{Goal, User};
use crate::history::HistoryEntry;

/// Everything the dashboard persists: users with their goals, and the
/// activity history.
///
/// The document is loaded and saved as a whole. Operations take a state
/// value and hand back a new one; only the storage layer does I/O.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackerState {
    /// Users keyed by name, in seed/insertion order
    pub users: IndexMap<String, User>,

    /// Recorded increments, oldest first
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
}

impl TrackerState {
    /// Create an empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style variant of [`TrackerState::insert_user`].
    pub fn with_user(mut self, name: impl Into<String>, user: User) -> Self {
        self.insert_user(name, user);
        self
    }

    /// Add or replace a user.
    pub fn insert_user(&mut self, name: impl Into<String>, user: User) -> Option<User> {
        self.users.insert(name.into(), user)
    }

    /// Look up a user by name.
    pub fn user(&self, name: &str) -> Option<&User> {
        self.users.get(name)
    }

    /// Look up a goal owned by a user.
    pub fn goal(&self, user: &str, goal: &str) -> Option<&Goal> {
        self.user(user)?.goal(goal)
    }

    /// Mutable lookup of a goal owned by a user.
    pub fn goal_mut(&mut self, user: &str, goal: &str) -> Option<&mut Goal> {
        self.users.get_mut(user)?.goal_mut(goal)
    }

    /// User names in listing order.
    pub fn user_names(&self) -> impl Iterator<Item = &str> {
        self.users.keys().map(String::as_str)
    }
}
