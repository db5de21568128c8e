use chrono::{DateTime, FixedOffset};
use serde::Serialize;

use super::events::{Direction, Notification};
use super::states::MonitorState;
use super::window::ReminderWindow;

/// Which branch of the decision list matched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "outcome")]
pub enum DecisionOutcome {
    /// First observation since process start
    Initialized,
    /// Count differs from the previous observation
    Changed { delta: i64 },
    /// Reminder window hit on a day without a prior notification marker
    DailyReminder,
    /// Nothing to report
    Unchanged,
}

impl DecisionOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Initialized => "initialized",
            Self::Changed { .. } => "changed",
            Self::DailyReminder => "daily_reminder",
            Self::Unchanged => "unchanged",
        }
    }
}

/// Result of feeding one observation to the state machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    pub notification: Option<Notification>,
    pub state: MonitorState,
    pub outcome: DecisionOutcome,
}

/// Decide whether an observation produces a notification.
///
/// Branches are evaluated in order and the first match wins:
///
/// 1. first observation: announce if `observed > 0`, then initialize
/// 2. count changed: announce the new total and its direction
/// 3. inside the reminder window and not yet marked today: daily update
/// 4. otherwise nothing changes
///
/// Branches 1 and 2 also advance the reminder marker to today, so a change
/// announced inside the window suppresses that day's reminder.
pub fn decide(
    state: &MonitorState,
    observed: i64,
    now: DateTime<FixedOffset>,
    window: &ReminderWindow,
) -> Decision {
    let today = now.date_naive();

    let Some(last) = state.last_count else {
        return Decision {
            notification: (observed > 0).then_some(Notification::FirstSighting { count: observed }),
            state: MonitorState::observed(observed, today),
            outcome: DecisionOutcome::Initialized,
        };
    };

    if observed != last {
        // saturates on extreme totals; the direction comes from the comparison
        let delta = observed.saturating_sub(last);
        return Decision {
            notification: Some(Notification::CountChanged {
                count: observed,
                direction: Direction::between(last, observed),
            }),
            state: MonitorState::observed(observed, today),
            outcome: DecisionOutcome::Changed { delta },
        };
    }

    if window.contains(now.time()) && !state.reminded_on(today) {
        return Decision {
            notification: Some(Notification::DailyUpdate { count: observed }),
            state: MonitorState {
                last_count: state.last_count,
                last_reminder_date: Some(today),
            },
            outcome: DecisionOutcome::DailyReminder,
        };
    }

    Decision {
        notification: None,
        state: *state,
        outcome: DecisionOutcome::Unchanged,
    }
}
