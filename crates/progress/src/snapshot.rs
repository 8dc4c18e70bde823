//! Board snapshot - everything a dashboard view shows, computed at once.

use chrono::NaiveDate;
use paceboard_core::{HistoryEntry, TrackerState, TrackingWindow};

use crate::activity::{daily_mvp, recent, DailyMvp};
use crate::estimator::{goal_status, window_progress, PaceStatus, TimeProgress};

/// A snapshot of progress on a given day.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressSnapshot {
    /// Day the snapshot describes
    pub today: NaiveDate,

    /// Progress through the tracking window
    pub time: TimeProgress,

    /// Most active user today
    pub mvp: DailyMvp,

    /// Users in listing order
    pub users: Vec<UserProgress>,

    /// Latest history entries, most recent first
    pub feed: Vec<HistoryEntry>,
}

/// One user's row on the board.
#[derive(Debug, Clone, PartialEq)]
pub struct UserProgress {
    /// User name
    pub name: String,

    /// Goals in listing order
    pub goals: Vec<GoalProgress>,
}

/// One goal's line on the board.
#[derive(Debug, Clone, PartialEq)]
pub struct GoalProgress {
    /// Goal name
    pub name: String,
    /// Value reached so far
    pub current: f64,
    /// Value to reach
    pub target: f64,
    /// Display unit
    pub unit: String,
    /// Bar fill in `[0, 1]`
    pub completion: f64,
    /// Pace against elapsed time
    pub status: PaceStatus,
}

impl ProgressSnapshot {
    /// Compute the board for `today`, with up to `feed_len` feed entries.
    pub fn build(
        state: &TrackerState,
        window: &TrackingWindow,
        today: NaiveDate,
        feed_len: usize,
    ) -> Self {
        let time = window_progress(window, today);

        let users = state
            .users
            .iter()
            .map(|(name, user)| UserProgress {
                name: name.clone(),
                goals: user
                    .goals
                    .iter()
                    .map(|(goal_name, goal)| GoalProgress {
                        name: goal_name.clone(),
                        current: goal.current,
                        target: goal.target,
                        unit: goal.unit.clone(),
                        completion: goal.completion(),
                        status: goal_status(goal, time.fraction),
                    })
                    .collect(),
            })
            .collect();

        Self {
            today,
            time,
            mvp: daily_mvp(&state.history, today),
            users,
            feed: recent(&state.history, feed_len).into_iter().cloned().collect(),
        }
    }

    /// Goals currently behind pace, as `(user, goal)` pairs.
    pub fn behind(&self) -> impl Iterator<Item = (&str, &GoalProgress)> {
        self.users.iter().flat_map(|u| {
            u.goals
                .iter()
                .filter(|g| g.status == PaceStatus::Behind)
                .map(move |g| (u.name.as_str(), g))
        })
    }
}
