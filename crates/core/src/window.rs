//! Tracking window - the calendar period pace is measured over.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Inclusive calendar range, e.g. a quarter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackingWindow {
    /// First day
    pub start: NaiveDate,

    /// Last day
    pub end: NaiveDate,
}

impl TrackingWindow {
    /// Create a window. `end` may equal `start` but not precede it.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if end < start {
            return Err(CoreError::InvalidWindow { start, end });
        }
        Ok(Self { start, end })
    }

    /// Length as a calendar-day difference (`end - start`).
    pub fn total_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }
}

impl Default for TrackingWindow {
    /// First quarter of 2026.
    fn default() -> Self {
        Self {
            start: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap_or(NaiveDate::MIN),
            end: NaiveDate::from_ymd_opt(2026, 3, 31).unwrap_or(NaiveDate::MIN),
        }
    }
}
