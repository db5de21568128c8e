use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::{debug, warn};

use super::Notifier;
use crate::config::WatchConfig;
use crate::error::{Result, WatchError};

#[derive(Serialize)]
struct SendMessage<'a> {
    chat_id: &'a str,
    text: &'a str,
}

/// Posts messages through the Telegram Bot API `sendMessage` method
#[derive(Clone)]
pub struct TelegramNotifier {
    http: Client,
    endpoint: String,
    chat_id: String,
}

impl TelegramNotifier {
    pub fn new(config: &WatchConfig) -> Result<Self> {
        let http = Client::builder().timeout(config.request_timeout).build()?;
        Ok(Self {
            http,
            endpoint: config.send_message_url(),
            chat_id: config.chat_id.clone(),
        })
    }

    pub fn chat_id(&self) -> &str {
        &self.chat_id
    }
}

impl std::fmt::Debug for TelegramNotifier {
    // endpoint embeds the bot token
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramNotifier")
            .field("chat_id", &self.chat_id)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn send(&self, text: &str) -> Result<()> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(&SendMessage {
                chat_id: &self.chat_id,
                text,
            })
            .send()
            .await
            // reqwest errors carry the URL, which carries the token
            .map_err(|e| WatchError::from(e.without_url()))?;

        let status = response.status();
        if status.is_success() {
            debug!(chat_id = %self.chat_id, status = status.as_u16(), "Telegram message delivered");
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        warn!(
            chat_id = %self.chat_id,
            status = status.as_u16(),
            body = %body,
            "Telegram rejected message"
        );
        Err(WatchError::UnexpectedStatus {
            status: status.as_u16(),
            url: "telegram sendMessage".to_string(),
        })
    }
}
