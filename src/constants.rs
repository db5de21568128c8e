//! # Operating Constants
//!
//! Fixed parameters of the watcher: what is searched, where, how often, and when
//! the daily reminder may fire. None of these are configurable at runtime; the
//! config layer copies them onto [`crate::config::WatchConfig`] so tests can
//! substitute local endpoints and short intervals.

use std::time::Duration;

/// Search term monitored on the catalog
pub const SEARCH_TERM: &str = "Phantasmal Flames";

/// Display name of the catalog used in failure reports
pub const CATALOG_NAME: &str = "KSP";

/// Category search endpoint, search term already percent-encoded
pub const CATALOG_SEARCH_URL: &str =
    "https://ksp.co.il/m_action/api/category/?search=Phantasmal%20Flames";

/// The catalog rejects requests that do not look like a desktop browser
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) \
     Chrome/117.0.0.0 Safari/537.36";

/// Base URL of the Telegram Bot API
pub const TELEGRAM_API_BASE: &str = "https://api.telegram.org";

/// Delay between two poll cycles
pub const POLL_INTERVAL: Duration = Duration::from_secs(300);

/// Per-request timeout for both the catalog and the webhook
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Local offset from UTC in seconds (UTC+3, no DST rules)
pub const LOCAL_UTC_OFFSET_SECS: i32 = 3 * 3600;

/// Hour of the day (local) at which the reminder window opens
pub const DAILY_REMINDER_HOUR: u32 = 11;

/// Width of the reminder window
pub const DAILY_REMINDER_WINDOW: Duration = Duration::from_secs(5 * 60);

/// Liveness port used when `PORT` is not set
pub const DEFAULT_PORT: u16 = 10000;

/// Body returned by the liveness endpoint
pub const LIVENESS_BODY: &str = "KSP monitor is running";

/// Environment variable names read at startup
pub mod env {
    pub const BOT_TOKEN: &str = "BOT_TOKEN";
    pub const CHAT_ID: &str = "CHAT_ID";
    pub const PORT: &str = "PORT";
    pub const APP_ENV: &str = "APP_ENV";
    pub const LOG_FORMAT: &str = "LOG_FORMAT";
}
