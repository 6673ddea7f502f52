//! Board-agnostic core logic for the tapdeck tag viewer
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Panel addressing, colour and bring-up table parsing
//! - 8x8 bitmap font and glyph rasterisation
//! - Tag block decoding, catalog lookup and the poller state machine
//! - Link health monitoring
//! - Configuration type definitions
//! - Traits the drivers implement

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod display;
pub mod health;
pub mod state;
pub mod tag;
pub mod text;
pub mod traits;
