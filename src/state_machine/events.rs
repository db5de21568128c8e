use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{CATALOG_NAME, SEARCH_TERM};

/// Direction of a product count change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Increased,
    Decreased,
}

impl Direction {
    /// Direction from `previous` to `current`; equal counts never reach here
    pub fn between(previous: i64, current: i64) -> Self {
        if current > previous {
            Self::Increased
        } else {
            Self::Decreased
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Increased => write!(f, "📈 increased"),
            Self::Decreased => write!(f, "📉 decreased"),
        }
    }
}

/// Messages the watcher can send through the notification sink
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Notification {
    /// Products found on the very first observation
    FirstSighting { count: i64 },
    /// Product count differs from the previous observation
    CountChanged { count: i64, direction: Direction },
    /// Once-a-day status inside the reminder window
    DailyUpdate { count: i64 },
    /// A poll cycle failed; carries the error description
    CheckFailed { reason: String },
}

impl Notification {
    /// Short name of the notification kind for logging
    pub fn kind(&self) -> &'static str {
        match self {
            Self::FirstSighting { .. } => "first_sighting",
            Self::CountChanged { .. } => "count_changed",
            Self::DailyUpdate { .. } => "daily_update",
            Self::CheckFailed { .. } => "check_failed",
        }
    }

    /// Product count carried by the notification, if any
    pub fn count(&self) -> Option<i64> {
        match self {
            Self::FirstSighting { count }
            | Self::CountChanged { count, .. }
            | Self::DailyUpdate { count } => Some(*count),
            Self::CheckFailed { .. } => None,
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FirstSighting { count } => write!(
                f,
                "🔥 Found {count} products for '{SEARCH_TERM}' on first check!"
            ),
            Self::CountChanged { count, direction } => write!(
                f,
                "⚡ Products total {direction} to {count} for '{SEARCH_TERM}'."
            ),
            Self::DailyUpdate { count } => write!(
                f,
                "🕒 Daily update: {count} products currently for '{SEARCH_TERM}'."
            ),
            Self::CheckFailed { reason } => {
                write!(f, "❌ Error checking {CATALOG_NAME}: {reason}")
            }
        }
    }
}
