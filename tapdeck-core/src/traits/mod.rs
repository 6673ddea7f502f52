//! Hardware abstraction traits
//!
//! These traits define the interface between the application logic
//! and the panel and reader drivers.

pub mod display;
pub mod reader;

pub use display::{FrameSink, TextExt};
pub use reader::TagSource;
