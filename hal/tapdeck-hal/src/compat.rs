//! Adapters from embedded-hal 1.0 peripherals to the tapdeck traits
//!
//! Board crates built on an embedded-hal 1.0 HAL wrap their peripherals
//! here instead of implementing the tapdeck traits by hand:
//!
//! ```ignore
//! let reader_bus = Compat::new(twim);
//! let panel_bus = Compat::new(spim);
//! let cs = CompatPin::new(cs_pin);
//! ```

use crate::{DelayMs, I2cBus, OutputPin, SpiBus};

/// Newtype lifting an embedded-hal bus or delay into the tapdeck traits
#[derive(Debug)]
pub struct Compat<T>(pub T);

impl<T> Compat<T> {
    /// Wrap an embedded-hal peripheral
    pub fn new(inner: T) -> Self {
        Self(inner)
    }

    /// Release the wrapped peripheral
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: embedded_hal::i2c::I2c> I2cBus for Compat<T> {
    type Error = T::Error;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        embedded_hal::i2c::I2c::write(&mut self.0, address, data)
    }

    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), Self::Error> {
        embedded_hal::i2c::I2c::read(&mut self.0, address, buf)
    }

    fn write_read(
        &mut self,
        address: u8,
        write_data: &[u8],
        read_buf: &mut [u8],
    ) -> Result<(), Self::Error> {
        embedded_hal::i2c::I2c::write_read(&mut self.0, address, write_data, read_buf)
    }
}

impl<T: embedded_hal::spi::SpiBus<u8>> SpiBus for Compat<T> {
    type Error = T::Error;

    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        embedded_hal::spi::SpiBus::write(&mut self.0, data)?;
        // CS must not rise before the last byte is on the wire
        embedded_hal::spi::SpiBus::flush(&mut self.0)
    }
}

impl<T: embedded_hal::delay::DelayNs> DelayMs for Compat<T> {
    fn delay_ms(&mut self, ms: u32) {
        embedded_hal::delay::DelayNs::delay_ms(&mut self.0, ms);
    }
}

/// Output pin adapter that caches the last driven level
///
/// embedded-hal pins are fallible and need `&mut self` to read back their
/// state; tapdeck pins are neither. Pin errors are dropped.
#[derive(Debug)]
pub struct CompatPin<P> {
    pin: P,
    high: bool,
}

impl<P: embedded_hal::digital::OutputPin> CompatPin<P> {
    /// Wrap a pin, driving it high (inactive for chip-select lines)
    pub fn new(mut pin: P) -> Self {
        let _ = pin.set_high();
        Self { pin, high: true }
    }

    /// Release the wrapped pin
    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P: embedded_hal::digital::OutputPin> OutputPin for CompatPin<P> {
    fn set_high(&mut self) {
        let _ = self.pin.set_high();
        self.high = true;
    }

    fn set_low(&mut self) {
        let _ = self.pin.set_low();
        self.high = false;
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}
