//! # Catalog Monitor
//!
//! The poll-decide-notify loop. One task owns the [`CatalogMonitor`] and with it
//! the only copy of [`crate::state_machine::MonitorState`]; nothing else reads or
//! writes that state, so no locking is involved.

pub mod poller;

pub use poller::{CatalogMonitor, CycleReport};
