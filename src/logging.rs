//! # Structured Logging Module
//!
//! Environment-aware console logging. `APP_ENV` picks the default level,
//! `RUST_LOG` overrides it, and `LOG_FORMAT=json` switches to one JSON object
//! per line for log collectors on the hosting platform.

use std::sync::OnceLock;

use chrono::Utc;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::constants::env;
use crate::state_machine::{DecisionOutcome, Notification};

static LOGGER_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Initialize structured logging with environment-specific configuration
pub fn init_structured_logging() {
    LOGGER_INITIALIZED.get_or_init(|| {
        let environment = get_environment();
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(get_log_level(&environment)));
        let json = use_json_format(std::env::var(env::LOG_FORMAT).ok().as_deref());

        let layer = if json {
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .json()
                .with_filter(filter)
                .boxed()
        } else {
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_ansi(true)
                .with_filter(filter)
                .boxed()
        };

        // Another subscriber may already be installed (tests)
        if tracing_subscriber::registry().with(layer).try_init().is_err() {
            tracing::debug!("Global tracing subscriber already initialized");
        }

        tracing::info!(
            pid = std::process::id(),
            environment = %environment,
            json = json,
            "🔧 STRUCTURED LOGGING: Initialized"
        );
    });
}

/// Get current environment from environment variables
fn get_environment() -> String {
    std::env::var(env::APP_ENV).unwrap_or_else(|_| "development".to_string())
}

/// Get log level based on environment
fn get_log_level(environment: &str) -> String {
    match environment {
        "production" => "info".to_string(),
        _ => "debug".to_string(),
    }
}

fn use_json_format(value: Option<&str>) -> bool {
    value.is_some_and(|v| v.eq_ignore_ascii_case("json"))
}

/// Log the outcome of one poll cycle
pub fn log_cycle_outcome(outcome: &DecisionOutcome, products_total: i64, notified: bool) {
    tracing::info!(
        outcome = outcome.as_str(),
        products_total = products_total,
        notified = notified,
        timestamp = %Utc::now().to_rfc3339(),
        "🔍 CYCLE"
    );
}

/// Log a notification delivery attempt
pub fn log_notification(notification: &Notification, status: &str, details: Option<&str>) {
    tracing::info!(
        kind = notification.kind(),
        products_total = notification.count(),
        status = %status,
        details = details,
        timestamp = %Utc::now().to_rfc3339(),
        "📨 NOTIFICATION"
    );
}

/// Log error with full context
pub fn log_error(component: &str, operation: &str, error: &str, context: Option<&str>) {
    tracing::error!(
        component = %component,
        operation = %operation,
        error = %error,
        context = context,
        timestamp = %Utc::now().to_rfc3339(),
        "❌ ERROR"
    );
}
