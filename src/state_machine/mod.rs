// Notification state machine for the catalog watcher
//
// The watcher remembers the last observed product count and the day the reminder
// marker was last advanced. `decide` maps (state, observation, local time) to an
// optional notification plus the next state; it never reads the clock or performs
// I/O, so the monitor task owns the only copy of the state.

pub mod decision;
pub mod events;
pub mod states;
pub mod window;

pub use decision::{decide, Decision, DecisionOutcome};
pub use events::{Direction, Notification};
pub use states::MonitorState;
pub use window::ReminderWindow;
