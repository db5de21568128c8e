#![allow(clippy::doc_markdown)] // Allow technical terms like KSP, UTC in docs
#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # Catalog Watch
//!
//! Watches the KSP product catalog for a single search term and announces
//! changes in the number of matching products through a Telegram bot.
//!
//! ## Overview
//!
//! Every five minutes the monitor fetches the category search results, extracts
//! `result.products_total` and feeds it to a small state machine that decides
//! whether anything is worth saying:
//!
//! - the first observation announces any products found
//! - a change in the total announces the new total and its direction
//! - once a day, inside the 11:00 window (UTC+3), a status reminder goes out
//!   unless something was already announced that day
//!
//! Failures while polling are reported to the same chat and never stop the loop.
//!
//! ## Module Organization
//!
//! - [`state_machine`] - Monitor state and the pure decision function
//! - [`catalog`] - Catalog client and response parsing
//! - [`messaging`] - Notification sink (Telegram)
//! - [`monitor`] - Poll loop with an explicit stop signal
//! - [`web`] - Liveness endpoint for platform health checks
//! - [`bootstrap`] - Wires everything into a running system
//! - [`config`] - Environment-driven configuration
//! - [`error`] - Structured error handling
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use catalog_watch::{WatchConfig, WatchSystem};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = WatchConfig::from_env()?;
//! let handle = WatchSystem::bootstrap(config).await?;
//!
//! // ... wait for a shutdown signal ...
//! let final_state = handle.shutdown().await?;
//! println!("last count: {:?}", final_state.last_count);
//! # Ok(())
//! # }
//! ```

pub mod bootstrap;
pub mod catalog;
pub mod clock;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod messaging;
pub mod monitor;
pub mod state_machine;
pub mod web;

pub use bootstrap::{WatchSystem, WatchSystemHandle};
pub use catalog::{CatalogSource, KspCatalogClient};
pub use clock::{Clock, SystemClock};
pub use config::WatchConfig;
pub use error::{Result, WatchError};
pub use messaging::{Notifier, TelegramNotifier};
pub use monitor::{CatalogMonitor, CycleReport};
pub use state_machine::{
    decide, Decision, DecisionOutcome, Direction, MonitorState, Notification, ReminderWindow,
};
