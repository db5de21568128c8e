use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// In-memory watcher state; lost on restart
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonitorState {
    /// Most recent observed product count, `None` before the first observation
    pub last_count: Option<i64>,
    /// Local date on which the reminder marker was last advanced
    pub last_reminder_date: Option<NaiveDate>,
}

impl MonitorState {
    /// State at process start: nothing observed yet
    pub fn unset() -> Self {
        Self::default()
    }

    pub fn is_initialized(&self) -> bool {
        self.last_count.is_some()
    }

    /// Whether the reminder marker already points at `today`
    pub fn reminded_on(&self, today: NaiveDate) -> bool {
        self.last_reminder_date == Some(today)
    }

    /// Record an observation, advancing the reminder marker to `today`
    pub fn observed(count: i64, today: NaiveDate) -> Self {
        Self {
            last_count: Some(count),
            last_reminder_date: Some(today),
        }
    }
}
