//! In-memory collaborators for driving the monitor without network access.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use catalog_watch::{CatalogSource, Clock, Notifier, Result, WatchError};
use chrono::{DateTime, FixedOffset, Utc};

/// One scripted catalog response
#[derive(Debug, Clone)]
pub enum Scripted {
    Total(i64),
    Missing,
    Fail(&'static str),
}

/// Catalog that replays a script; once exhausted it repeats the last entry
pub struct FakeCatalog {
    script: Mutex<VecDeque<Scripted>>,
    last: Mutex<Scripted>,
    calls: Mutex<usize>,
}

impl FakeCatalog {
    pub fn new(script: Vec<Scripted>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            last: Mutex::new(Scripted::Missing),
            calls: Mutex::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl CatalogSource for FakeCatalog {
    async fn fetch_products_total(&self) -> Result<Option<i64>> {
        *self.calls.lock().unwrap() += 1;
        let next = {
            let mut script = self.script.lock().unwrap();
            let mut last = self.last.lock().unwrap();
            if let Some(entry) = script.pop_front() {
                *last = entry;
            }
            last.clone()
        };
        match next {
            Scripted::Total(n) => Ok(Some(n)),
            Scripted::Missing => Ok(None),
            Scripted::Fail(reason) => Err(WatchError::HttpError(reason.to_string())),
        }
    }
}

/// Notifier that records every message and can be told to fail
#[derive(Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
    failing: bool,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            messages: Mutex::new(Vec::new()),
            failing: true,
        }
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send(&self, text: &str) -> Result<()> {
        self.messages.lock().unwrap().push(text.to_string());
        if self.failing {
            return Err(WatchError::HttpError("chat unreachable".to_string()));
        }
        Ok(())
    }
}

/// Clock pinned to an instant that tests can move
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn at(local: DateTime<FixedOffset>) -> Self {
        Self {
            now: Mutex::new(local.with_timezone(&Utc)),
        }
    }

    pub fn set(&self, local: DateTime<FixedOffset>) {
        *self.now.lock().unwrap() = local.with_timezone(&Utc);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}
