#![allow(dead_code)]

pub mod fakes;
pub mod stub_server;

pub use fakes::*;
pub use stub_server::*;

use std::time::Duration;

use catalog_watch::WatchConfig;
use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone};

pub const TEST_TOKEN: &str = "test-token";
pub const TEST_CHAT_ID: &str = "4242";

/// Config with test credentials, an ephemeral port and a short poll interval
pub fn test_config() -> WatchConfig {
    let mut config = WatchConfig::new(TEST_TOKEN, TEST_CHAT_ID).expect("valid test config");
    config.port = 0;
    config.poll_interval = Duration::from_millis(20);
    config.request_timeout = Duration::from_secs(2);
    config
}

/// Wall-clock time in the watcher's UTC+3 offset
pub fn local(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<FixedOffset> {
    FixedOffset::east_opt(3 * 3600)
        .unwrap()
        .with_ymd_and_hms(year, month, day, hour, minute, 0)
        .unwrap()
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}
