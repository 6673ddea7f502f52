//! Panel geometry, colour and bring-up table types
//!
//! Everything here is pure data; the ILI9341 driver turns it into bus
//! transactions.

pub mod color;
pub mod init_table;
pub mod window;

pub use color::Rgb;
pub use init_table::{InitTable, InitTableEntry, InitTableError};
pub use window::{AddressWindow, WindowError, PANEL_HEIGHT, PANEL_WIDTH};
