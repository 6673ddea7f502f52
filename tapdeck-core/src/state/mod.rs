//! Tag-presence state machine
//!
//! Turns a stream of decoded reads into de-duplicated scan events.
//! The state machine is explicit, finite, and deterministic.

pub mod debounce;
pub mod machine;

pub use debounce::TagDebouncer;
pub use machine::PollerState;
