//! Goal model - a numeric target a user works toward during the window.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// A named numeric target with the value reached so far.
///
/// Goals are identified by their name inside the owning [`User`]; the name
/// is the map key and is not repeated in the value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    /// Value to reach by the end of the window. Zero means trivially met.
    pub target: f64,

    /// Value reached so far. Never negative; only ever grows.
    pub current: f64,

    /// Display unit (e.g. "USD", "Books")
    pub unit: String,
}

impl Goal {
    /// Create a goal with nothing achieved yet.
    pub fn new(name: &str, target: f64, unit: impl Into<String>) -> Result<Self> {
        if !target.is_finite() || target < 0.0 {
            return Err(CoreError::InvalidTarget {
                goal: name.to_string(),
                target,
            });
        }
        Ok(Self {
            target,
            current: 0.0,
            unit: unit.into(),
        })
    }

    /// Fraction of the target reached, clamped to `[0, 1]`.
    ///
    /// A zero target reports `0.0` here even though its pace is always on
    /// track; this is the fill of a progress bar, not a status.
    pub fn completion(&self) -> f64 {
        if self.target > 0.0 {
            (self.current / self.target).min(1.0)
        } else {
            0.0
        }
    }

    /// Add to the current value. The amount must already be validated as
    /// positive by the caller.
    pub fn increment(&mut self, amount: f64) {
        self.current += amount;
    }
}

/// A participant and their goals, listed in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Goals keyed by name
    pub goals: IndexMap<String, Goal>,
}

impl User {
    /// Create a user without goals.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style variant of [`User::insert_goal`].
    pub fn with_goal(mut self, name: impl Into<String>, goal: Goal) -> Self {
        self.insert_goal(name, goal);
        self
    }

    /// Add or replace a goal. A new name goes to the end of the listing,
    /// a replaced one keeps its position.
    pub fn insert_goal(&mut self, name: impl Into<String>, goal: Goal) -> Option<Goal> {
        self.goals.insert(name.into(), goal)
    }

    /// Look up a goal by name.
    pub fn goal(&self, name: &str) -> Option<&Goal> {
        self.goals.get(name)
    }

    /// Mutable lookup of a goal by name.
    pub fn goal_mut(&mut self, name: &str) -> Option<&mut Goal> {
        self.goals.get_mut(name)
    }

    /// Goal names in listing order.
    pub fn goal_names(&self) -> impl Iterator<Item = &str> {
        self.goals.keys().map(String::as_str)
    }
}
