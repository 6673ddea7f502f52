//! Tapdeck Hardware Abstraction Layer
//!
//! This crate defines the transport traits the tapdeck drivers are written
//! against. Board crates implement them directly, or wrap an embedded-hal
//! 1.0 peripheral in [`compat::Compat`].
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Presentation / orchestration (board)   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  tapdeck-drivers (ILI9341, tag reader)  │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  tapdeck-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`] - Chip-select and data/command lines
//! - [`i2c::I2cBus`] - Register-mapped peripherals
//! - [`spi::SpiBus`] - Write-only serial stream to the panel
//! - [`delay::DelayMs`] - Blocking settle delays

#![no_std]
#![deny(unsafe_code)]

#[cfg(feature = "embedded-hal")]
pub mod compat;
pub mod delay;
pub mod gpio;
pub mod i2c;
pub mod spi;

// Re-export key traits at crate root for convenience
pub use delay::DelayMs;
pub use gpio::OutputPin;
pub use i2c::I2cBus;
pub use spi::SpiBus;
