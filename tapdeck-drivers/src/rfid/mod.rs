//! Register-mapped RFID tag reader over I2C
//!
//! The reader queues scanned tags internally and exposes the oldest one
//! as a 10-byte block: 6 bytes of tag id followed by a big-endian 32-bit
//! timestamp. Writing the request byte and draining the queue clears it.
//!
//! [`RfidLink`] is the raw register transport; [`TagReader`] layers the
//! poll/decode/debounce/clear cycle and link health on top.

pub mod link;
pub mod reader;
pub mod scan;

pub use link::{RfidError, RfidLink};
pub use reader::{ReaderInfo, TagReader};
pub use scan::BusScan;

/// Reader register addresses
pub mod reg {
    /// Tag queue request / clear
    pub const TAG_REQUEST: u8 = 0x00;
    /// Status flags (bit 0: tag in field)
    pub const STATUS: u8 = 0x07;
    /// Firmware version
    pub const VERSION: u8 = 0x37;
}

/// Status register bit set while a tag is in the field
pub const STATUS_TAG_PRESENT: u8 = 0x01;
