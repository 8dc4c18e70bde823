//! Pace estimation.
//!
//! Two pure functions: how far through the tracking window a day is, and
//! whether a goal keeps up with that. Both are recomputed on every query;
//! nothing is remembered between calls.

use chrono::NaiveDate;
use paceboard_core::{Goal, TrackingWindow};

/// Calendar progress through the tracking window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeProgress {
    /// Elapsed share of the window, in `[0, 1]`
    pub fraction: f64,

    /// Calendar days until the last day of the window, never negative
    pub days_left: i64,
}

/// Whether a goal is keeping up with elapsed time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaceStatus {
    /// At or ahead of pace, or already complete
    OnTrack,
    /// Goal progress lags elapsed time
    Behind,
}

/// Progress of `today` through the window `[start, end]`.
///
/// Day counts are whole calendar-day differences. Before the window the
/// fraction is `0.0` with the full length left; after it, `1.0` with none
/// left. A zero-length window counts as fully elapsed from its first day.
pub fn time_progress(today: NaiveDate, start: NaiveDate, end: NaiveDate) -> TimeProgress {
    let total_days = (end - start).num_days().max(0);

    if today < start {
        return TimeProgress {
            fraction: 0.0,
            days_left: total_days,
        };
    }
    if today > end {
        return TimeProgress {
            fraction: 1.0,
            days_left: 0,
        };
    }

    let days_left = (end - today).num_days();
    if total_days == 0 {
        return TimeProgress {
            fraction: 1.0,
            days_left,
        };
    }

    let elapsed = (today - start).num_days();
    TimeProgress {
        fraction: elapsed as f64 / total_days as f64,
        days_left,
    }
}

/// [`time_progress`] over a [`TrackingWindow`].
pub fn window_progress(window: &TrackingWindow, today: NaiveDate) -> TimeProgress {
    time_progress(today, window.start, window.end)
}

/// Pace of a goal given the elapsed share of the window.
///
/// A reached target, including a zero one, is always on track. Otherwise
/// the goal is behind only while its own fraction is below both the time
/// fraction and `1.0`.
pub fn pace_status(current: f64, target: f64, time_fraction: f64) -> PaceStatus {
    if target == 0.0 || current >= target {
        return PaceStatus::OnTrack;
    }

    let goal_fraction = current / target;
    if goal_fraction < time_fraction && goal_fraction < 1.0 {
        PaceStatus::Behind
    } else {
        PaceStatus::OnTrack
    }
}

/// [`pace_status`] for a stored goal.
pub fn goal_status(goal: &Goal, time_fraction: f64) -> PaceStatus {
    pace_status(goal.current, goal.target, time_fraction)
}
