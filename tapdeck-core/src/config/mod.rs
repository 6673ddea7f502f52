//! Configuration types
//!
//! Board-agnostic settings for the panel and the reader. Boards build these
//! in code (or deserialize them with the `serde` feature) and hand them to
//! the drivers.

pub mod types;

pub use types::*;
