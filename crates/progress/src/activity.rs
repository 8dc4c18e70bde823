//! Activity log queries.
//!
//! The history is an append-only list kept in insertion order, which the
//! writers guarantee is also chronological.

use std::collections::HashMap;

use chrono::NaiveDate;
use paceboard_core::{HistoryEntry, Time};

/// The most active user on a given day.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DailyMvp {
    /// Most active user, `None` when nobody logged anything that day
    pub user: Option<String>,

    /// Number of entries the user logged that day
    pub count: usize,
}

/// Append an entry to the end of the history. Nothing is reordered or
/// deduplicated.
pub fn append(
    mut history: Vec<HistoryEntry>,
    user: impl Into<String>,
    note: impl Into<String>,
    time: Time,
) -> Vec<HistoryEntry> {
    history.push(HistoryEntry::new(time, user, note));
    history
}

/// Find the user with the most entries on `today`.
///
/// Ties go to the user who reached the winning count first while scanning
/// the history from oldest to newest.
pub fn daily_mvp(history: &[HistoryEntry], today: NaiveDate) -> DailyMvp {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut best: Option<(&str, usize)> = None;

    for entry in history.iter().filter(|e| e.is_on(today)) {
        let count = counts.entry(entry.user.as_str()).or_insert(0);
        *count += 1;

        if best.map_or(true, |(_, top)| *count > top) {
            best = Some((entry.user.as_str(), *count));
        }
    }

    match best {
        Some((user, count)) => DailyMvp {
            user: Some(user.to_string()),
            count,
        },
        None => DailyMvp::default(),
    }
}

/// The last `n` entries, most recent first.
pub fn recent(history: &[HistoryEntry], n: usize) -> Vec<&HistoryEntry> {
    history.iter().rev().take(n).collect()
}

/// Human-readable summary of an increment, with the optional free-text
/// note appended exactly as given. Blank notes are left out.
pub fn compose_note(amount: f64, unit: &str, goal: &str, victory: Option<&str>) -> String {
    let mut note = format!("Added {} {} to '{}'", amount, unit, goal);
    if let Some(victory) = victory.filter(|v| !v.trim().is_empty()) {
        note.push_str(" - Note: ");
        note.push_str(victory);
    }
    note
}
