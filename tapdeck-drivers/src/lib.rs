//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in tapdeck-core, written against the tapdeck-hal transport traits:
//!
//! - ILI9341 240x320 TFT panel (SPI, command/data framing)
//! - Register-mapped RFID tag reader (I2C, polled)

#![no_std]
#![deny(unsafe_code)]

#[macro_use]
mod fmt;

pub mod ili9341;
pub mod retry;
pub mod rfid;

pub use ili9341::{Ili9341, Ili9341Error};
pub use rfid::{BusScan, ReaderInfo, RfidError, RfidLink, TagReader};
