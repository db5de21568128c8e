//! # Messaging Module
//!
//! Outbound notification sink. Delivery is best effort: callers log a failed
//! send and move on, nothing is queued or retried.

pub mod telegram;

use async_trait::async_trait;

use crate::error::Result;

pub use telegram::TelegramNotifier;

/// Delivers human-readable text to a chat
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, text: &str) -> Result<()>;
}
