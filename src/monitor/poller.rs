use std::sync::Arc;
use std::time::Duration;

use chrono::FixedOffset;
use tokio::sync::oneshot;
use tracing::{info, warn};

use crate::catalog::CatalogSource;
use crate::clock::Clock;
use crate::config::WatchConfig;
use crate::constants::SEARCH_TERM;
use crate::logging;
use crate::messaging::Notifier;
use crate::state_machine::{decide, DecisionOutcome, MonitorState, Notification, ReminderWindow};

/// What a single poll cycle did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleReport {
    /// A product count was observed and fed to the state machine
    Observed {
        products_total: i64,
        outcome: DecisionOutcome,
        notification: Option<Notification>,
    },
    /// The response had no product total; state untouched
    NoObservation,
    /// Fetching or parsing failed; the failure was reported, state untouched
    Failed { reason: String },
}

/// Polls the catalog and drives the notification state machine
pub struct CatalogMonitor {
    source: Arc<dyn CatalogSource>,
    notifier: Arc<dyn Notifier>,
    clock: Arc<dyn Clock>,
    utc_offset: FixedOffset,
    window: ReminderWindow,
    interval: Duration,
    state: MonitorState,
}

impl CatalogMonitor {
    pub fn new(
        config: &WatchConfig,
        source: Arc<dyn CatalogSource>,
        notifier: Arc<dyn Notifier>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            source,
            notifier,
            clock,
            utc_offset: config.utc_offset,
            window: config.reminder_window,
            interval: config.poll_interval,
            state: MonitorState::unset(),
        }
    }

    /// Start from a known state instead of the unset one
    pub fn with_state(mut self, state: MonitorState) -> Self {
        self.state = state;
        self
    }

    pub fn state(&self) -> &MonitorState {
        &self.state
    }

    /// Run one fetch-and-decide cycle. Never fails; errors are reported
    /// through the notifier and leave the state unchanged.
    pub async fn run_cycle(&mut self) -> CycleReport {
        let products_total = match self.source.fetch_products_total().await {
            Ok(Some(total)) => total,
            Ok(None) => {
                info!(search_term = SEARCH_TERM, "Could not find {SEARCH_TERM} products");
                return CycleReport::NoObservation;
            }
            Err(e) => {
                let reason = e.to_string();
                logging::log_error("monitor", "fetch_products_total", &reason, None);
                self.deliver(&Notification::CheckFailed {
                    reason: reason.clone(),
                })
                .await;
                return CycleReport::Failed { reason };
            }
        };

        let now = self.clock.now_in(self.utc_offset);
        let decision = decide(&self.state, products_total, now, &self.window);

        match (&decision.outcome, &decision.notification) {
            (DecisionOutcome::Initialized, None) => {
                info!(products_total, "Initial check: no products");
            }
            (DecisionOutcome::Unchanged, _) => {
                info!(products_total, "No change (products_total={products_total})");
            }
            _ => {}
        }

        let notified = match &decision.notification {
            Some(notification) => self.deliver(notification).await,
            None => false,
        };
        if notified && decision.outcome == DecisionOutcome::DailyReminder {
            info!("✅ Daily update sent");
        }
        logging::log_cycle_outcome(&decision.outcome, products_total, notified);

        self.state = decision.state;
        CycleReport::Observed {
            products_total,
            outcome: decision.outcome,
            notification: decision.notification,
        }
    }

    /// Best-effort delivery; returns whether the sink accepted the message
    async fn deliver(&self, notification: &Notification) -> bool {
        match self.notifier.send(&notification.to_string()).await {
            Ok(()) => {
                logging::log_notification(notification, "delivered", None);
                true
            }
            Err(e) => {
                let details = e.to_string();
                warn!(kind = notification.kind(), error = %details, "⚠️ Failed to send notification");
                logging::log_notification(notification, "failed", Some(&details));
                false
            }
        }
    }

    /// Poll until `shutdown` fires or its sender is dropped. The first cycle
    /// runs immediately. Returns the final state.
    pub async fn run(mut self, mut shutdown: oneshot::Receiver<()>) -> MonitorState {
        info!(
            interval_secs = self.interval.as_secs(),
            search_term = SEARCH_TERM,
            "🔄 MONITOR: Poll loop started"
        );

        loop {
            tokio::select! {
                biased;
                _ = &mut shutdown => break,
                _ = self.run_cycle() => {}
            }

            tokio::select! {
                biased;
                _ = &mut shutdown => break,
                _ = tokio::time::sleep(self.interval) => {}
            }
        }

        info!("Poll loop shutting down");
        self.state
    }
}
