//! SPI bus abstractions
//!
//! The panel link is write-only: chip-select and data/command framing are
//! driven by the display driver around each [`SpiBus::write`].

/// SPI bus master
pub trait SpiBus {
    /// Error type for SPI operations
    type Error;

    /// Clock out `data` and block until the last byte has left the shifter
    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error>;
}

impl<T: SpiBus + ?Sized> SpiBus for &mut T {
    type Error = T::Error;

    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        T::write(self, data)
    }
}

/// SPI clock mode (combined polarity and phase)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Mode 0: CPOL=0, CPHA=0
    Mode0,
    /// Mode 1: CPOL=0, CPHA=1
    Mode1,
    /// Mode 2: CPOL=1, CPHA=0
    Mode2,
    /// Mode 3: CPOL=1, CPHA=1
    Mode3,
}

/// SPI configuration a board should apply before handing the bus over
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpiConfig {
    /// Clock frequency in Hz
    pub frequency: u32,
    /// Clock mode
    pub mode: Mode,
}

impl SpiConfig {
    /// ILI9341 panel link: 8 MHz, mode 0
    pub const ILI9341: Self = Self {
        frequency: 8_000_000,
        mode: Mode::Mode0,
    };
}

impl Default for SpiConfig {
    fn default() -> Self {
        Self::ILI9341
    }
}
