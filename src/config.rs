//! # Watcher Configuration
//!
//! Credentials and the liveness port come from the process environment; every
//! other value is a fixed operating constant copied from [`crate::constants`].
//! Missing credentials are the only fatal error the process can hit.

use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

use chrono::FixedOffset;
use ::config::{Config, Environment};
use serde::Deserialize;
use tracing::debug;

use crate::constants::{self, env};
use crate::error::{Result, WatchError};
use crate::state_machine::ReminderWindow;

/// Raw view of the environment; keys are lowercased by the `config` source.
#[derive(Debug, Default, Deserialize)]
struct EnvSettings {
    bot_token: Option<String>,
    chat_id: Option<String>,
    port: Option<String>,
}

#[derive(Clone)]
pub struct WatchConfig {
    pub bot_token: String,
    pub chat_id: String,
    pub port: u16,
    pub catalog_url: String,
    pub telegram_api_base: String,
    pub user_agent: String,
    pub poll_interval: Duration,
    pub request_timeout: Duration,
    pub utc_offset: FixedOffset,
    pub reminder_window: ReminderWindow,
}

impl WatchConfig {
    /// Build a configuration from explicit credentials and the fixed constants.
    pub fn new(bot_token: impl Into<String>, chat_id: impl Into<String>) -> Result<Self> {
        let utc_offset = FixedOffset::east_opt(constants::LOCAL_UTC_OFFSET_SECS).ok_or_else(|| {
            WatchError::InvalidConfiguration {
                field: "utc_offset",
                details: format!("{} seconds is out of range", constants::LOCAL_UTC_OFFSET_SECS),
            }
        })?;

        Ok(Self {
            bot_token: bot_token.into(),
            chat_id: chat_id.into(),
            port: constants::DEFAULT_PORT,
            catalog_url: constants::CATALOG_SEARCH_URL.to_string(),
            telegram_api_base: constants::TELEGRAM_API_BASE.to_string(),
            user_agent: constants::BROWSER_USER_AGENT.to_string(),
            poll_interval: constants::POLL_INTERVAL,
            request_timeout: constants::REQUEST_TIMEOUT,
            utc_offset,
            reminder_window: ReminderWindow::daily_default(),
        })
    }

    /// Load from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_env_source(None)
    }

    /// Load from an explicit variable map instead of the process environment.
    ///
    /// Passing `None` reads the real environment.
    pub fn from_env_source(source: Option<HashMap<String, String>>) -> Result<Self> {
        let settings: EnvSettings = Config::builder()
            .add_source(Environment::default().source(source))
            .build()?
            .try_deserialize()?;

        let bot_token = required(settings.bot_token, env::BOT_TOKEN)?;
        let chat_id = required(settings.chat_id, env::CHAT_ID)?;

        let mut config = Self::new(bot_token, chat_id)?;
        if let Some(port) = settings.port.filter(|p| !p.trim().is_empty()) {
            config.port = port
                .trim()
                .parse()
                .map_err(|e| WatchError::InvalidConfiguration {
                    field: "port",
                    details: format!("'{port}': {e}"),
                })?;
        }

        debug!(config = ?config, "Configuration loaded from environment");
        Ok(config)
    }

    /// Webhook endpoint for the configured bot.
    pub fn send_message_url(&self) -> String {
        format!(
            "{}/bot{}/sendMessage",
            self.telegram_api_base.trim_end_matches('/'),
            self.bot_token
        )
    }
}

fn required(value: Option<String>, name: &'static str) -> Result<String> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or(WatchError::MissingCredential(name))
}

impl fmt::Debug for WatchConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WatchConfig")
            .field("bot_token", &"***")
            .field("chat_id", &self.chat_id)
            .field("port", &self.port)
            .field("catalog_url", &self.catalog_url)
            .field("telegram_api_base", &self.telegram_api_base)
            .field("poll_interval", &self.poll_interval)
            .field("request_timeout", &self.request_timeout)
            .field("utc_offset", &self.utc_offset)
            .field("reminder_window", &self.reminder_window)
            .finish()
    }
}
