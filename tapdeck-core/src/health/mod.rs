//! Link health monitoring
//!
//! Detects a reader bus that keeps failing so the presentation layer can
//! switch to a stable "no data" screen instead of freezing on the last
//! frame.

pub mod monitor;

pub use monitor::{LinkMonitor, LinkStatus};
