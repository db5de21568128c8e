use chrono::{Duration, NaiveTime};

use crate::constants::{DAILY_REMINDER_HOUR, DAILY_REMINDER_WINDOW};

/// Half-open local time interval `[start, start + width)` in which the daily
/// reminder may fire. A momentary predicate, not a timer: a cycle that misses
/// the interval skips that day's reminder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReminderWindow {
    start: NaiveTime,
    width: Duration,
}

impl ReminderWindow {
    pub fn new(start: NaiveTime, width: Duration) -> Self {
        Self { start, width }
    }

    /// 11:00 local, five minutes wide
    pub fn daily_default() -> Self {
        let start = NaiveTime::from_hms_opt(DAILY_REMINDER_HOUR, 0, 0).unwrap_or_default();
        let width = Duration::seconds(DAILY_REMINDER_WINDOW.as_secs() as i64);
        Self::new(start, width)
    }

    pub fn start(&self) -> NaiveTime {
        self.start
    }

    pub fn width(&self) -> Duration {
        self.width
    }

    /// Whether `local` falls inside the window; windows may span midnight
    pub fn contains(&self, local: NaiveTime) -> bool {
        let mut elapsed = local.signed_duration_since(self.start);
        if elapsed < Duration::zero() {
            elapsed = elapsed + Duration::days(1);
        }
        elapsed < self.width
    }
}

impl Default for ReminderWindow {
    fn default() -> Self {
        Self::daily_default()
    }
}
