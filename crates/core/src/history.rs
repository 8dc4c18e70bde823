//! History entry model - one line of the activity feed.

use chrono::{NaiveDate, Timelike};
use serde::{Deserialize, Serialize};

use crate::Time;

/// Timestamp layout used in the persisted document (local time, minutes).
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// A single recorded increment.
///
/// Entries are append-only: the history is kept in insertion order, which
/// is also chronological order because entries are stamped when written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// When the increment was recorded
    #[serde(with = "minute_time")]
    pub time: Time,

    /// Name of the user who recorded it
    pub user: String,

    /// Human-readable summary
    pub note: String,
}

impl HistoryEntry {
    /// Create an entry. Seconds and below are dropped so the value matches
    /// what the persisted document can hold.
    pub fn new(time: Time, user: impl Into<String>, note: impl Into<String>) -> Self {
        Self {
            time: truncate_to_minute(time),
            user: user.into(),
            note: note.into(),
        }
    }

    /// Whether the entry was recorded on the given calendar day.
    pub fn is_on(&self, day: NaiveDate) -> bool {
        self.time.date() == day
    }
}

fn truncate_to_minute(time: Time) -> Time {
    time.with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(time)
}

mod minute_time {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::TIME_FORMAT;
    use crate::Time;

    pub fn serialize<S: Serializer>(time: &Time, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&time.format(TIME_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Time, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Time::parse_from_str(&raw, TIME_FORMAT).map_err(serde::de::Error::custom)
    }
}
