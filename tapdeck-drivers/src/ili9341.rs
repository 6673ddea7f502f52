//! ILI9341 240x320 TFT panel over SPI
//!
//! # Framing
//!
//! Every transaction asserts CS low for its duration. The DC line selects
//! what the controller does with the bytes:
//! - DC low: a single command opcode
//! - DC high: arguments for the previous command, or pixel data after
//!   RAMWR
//!
//! Pixels are 24-bit, sent as R, G, B.
//!
//! # Retries
//!
//! A failed write may already have clocked some bytes out, so data is
//! never resent on its own. Retries restart from a command: a single
//! opcode, a whole bring-up entry, a whole address window, or for pixel
//! streams the address window followed by the full stream. CS is raised
//! between attempts.
//!
//! # Bring-up
//!
//! SWRESET, a 150 ms settle, then the bring-up table. Each table entry is
//! `[cmd][len][args..]` with bit 7 of `len` requesting another 150 ms wait
//! after the entry; a command byte of 0 ends the table.

use tapdeck_core::config::{ConfigError, DisplayConfig, MAX_PIXELS_PER_TRANSFER};
use tapdeck_core::display::{AddressWindow, InitTable, InitTableError, Rgb, WindowError};
use tapdeck_core::text::TextStyle;
use tapdeck_core::traits::{FrameSink, TextExt};
use tapdeck_hal::spi::SpiConfig;
use tapdeck_hal::{DelayMs, OutputPin, SpiBus};

use crate::retry::Retry;

/// ILI9341 command opcodes
pub mod cmd {
    /// Software reset
    pub const SWRESET: u8 = 0x01;
    /// Sleep out
    pub const SLPOUT: u8 = 0x11;
    /// Gamma set
    pub const GAMMASET: u8 = 0x26;
    /// Display on
    pub const DISPON: u8 = 0x29;
    /// Column address set
    pub const CASET: u8 = 0x2A;
    /// Page address set
    pub const PASET: u8 = 0x2B;
    /// Memory write
    pub const RAMWR: u8 = 0x2C;
    /// Memory data access control
    pub const MADCTL: u8 = 0x36;
    /// Pixel format set
    pub const PIXFMT: u8 = 0x3A;
    /// Frame rate control (normal mode)
    pub const FRMCTR1: u8 = 0xB1;
    /// Display function control
    pub const DFUNCTR: u8 = 0xB6;
    /// Power control 1
    pub const PWCTR1: u8 = 0xC0;
    /// Power control 2
    pub const PWCTR2: u8 = 0xC1;
    /// VCOM control 1
    pub const VMCTR1: u8 = 0xC5;
    /// VCOM control 2
    pub const VMCTR2: u8 = 0xC7;
    /// Positive gamma correction
    pub const GMCTRP1: u8 = 0xE0;
    /// Negative gamma correction
    pub const GMCTRN1: u8 = 0xE1;
}

/// Settle time after SWRESET and after flagged table entries
pub const RESET_DELAY_MS: u32 = 150;

/// Stock bring-up table
///
/// MADCTL 0x48 sets MX (mirrored columns) and BGR.
#[rustfmt::skip]
pub const INIT_TABLE: &[u8] = &[
    0xEF, 3, 0x03, 0x80, 0x02,
    0xCF, 3, 0x00, 0xC1, 0x30,
    0xED, 4, 0x64, 0x03, 0x12, 0x81,
    0xE8, 3, 0x85, 0x00, 0x78,
    0xCB, 5, 0x39, 0x2C, 0x00, 0x34, 0x02,
    0xF7, 1, 0x20,
    0xEA, 2, 0x00, 0x00,
    cmd::PWCTR1, 1, 0x23,
    cmd::PWCTR2, 1, 0x10,
    cmd::VMCTR1, 2, 0x3E, 0x28,
    cmd::VMCTR2, 1, 0x86,
    cmd::MADCTL, 1, 0x48,
    cmd::PIXFMT, 1, 0x55,
    cmd::FRMCTR1, 2, 0x00, 0x18,
    cmd::DFUNCTR, 3, 0x08, 0x82, 0x27,
    0xF2, 1, 0x00,
    cmd::GAMMASET, 1, 0x01,
    cmd::GMCTRP1, 15, 0x0F, 0x31, 0x2B, 0x0C, 0x0E, 0x08, 0x4E, 0xF1, 0x37, 0x07, 0x10, 0x03, 0x0E, 0x09, 0x00,
    cmd::GMCTRN1, 15, 0x00, 0x0E, 0x14, 0x03, 0x11, 0x07, 0x31, 0xC1, 0x48, 0x08, 0x0F, 0x0C, 0x31, 0x36, 0x0F,
    cmd::SLPOUT, 0x80,
    cmd::DISPON, 0x80,
    0x00,
];

/// Panel driver error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Ili9341Error<E> {
    /// SPI transfer failed after retries
    Bus(E),
    /// Rectangle outside the panel or zero-sized
    Window(WindowError),
    /// Bring-up table ended mid-entry
    InitTable(InitTableError),
}

impl<E> From<WindowError> for Ili9341Error<E> {
    fn from(e: WindowError) -> Self {
        Self::Window(e)
    }
}

impl<E> From<InitTableError> for Ili9341Error<E> {
    fn from(e: InitTableError) -> Self {
        Self::InitTable(e)
    }
}

/// SPI bus plus the DC and CS lines, one attempt per call
struct PanelBus<SPI, DC, CS> {
    spi: SPI,
    dc: DC,
    cs: CS,
}

impl<SPI, DC, CS> PanelBus<SPI, DC, CS>
where
    SPI: SpiBus,
    DC: OutputPin,
    CS: OutputPin,
{
    fn transaction(&mut self, data: bool, bytes: &[u8]) -> Result<(), SPI::Error> {
        self.dc.set_state(data);
        self.cs.set_low();
        let result = self.spi.write(bytes);
        self.cs.set_high();
        result
    }

    fn command(&mut self, opcode: u8) -> Result<(), SPI::Error> {
        self.transaction(false, &[opcode])
    }

    fn data(&mut self, bytes: &[u8]) -> Result<(), SPI::Error> {
        self.transaction(true, bytes)
    }

    /// Opcode plus its arguments; no data transaction when `args` is empty
    fn entry(&mut self, opcode: u8, args: &[u8]) -> Result<(), SPI::Error> {
        self.command(opcode)?;
        if !args.is_empty() {
            self.data(args)?;
        }
        Ok(())
    }

    fn window(&mut self, window: AddressWindow) -> Result<(), SPI::Error> {
        self.entry(cmd::CASET, &window.column_args())?;
        self.entry(cmd::PASET, &window.page_args())?;
        self.command(cmd::RAMWR)
    }

    /// `pixels` pixels from `buf`, at most `batch` per transaction
    fn stream(&mut self, buf: &[u8], batch: u32, pixels: u32) -> Result<(), SPI::Error> {
        let mut remaining = pixels;
        while remaining > 0 {
            let n = remaining.min(batch);
            self.data(&buf[..n as usize * 3])?;
            remaining -= n;
        }
        Ok(())
    }
}

/// ILI9341 driver
///
/// Owns its SPI bus, the DC and CS lines and a delay. Pixel writes go to
/// the address window most recently selected; after reset that is the
/// whole panel.
pub struct Ili9341<SPI, DC, CS, D> {
    bus: PanelBus<SPI, DC, CS>,
    retry: Retry<D>,
    config: DisplayConfig,
    window: AddressWindow,
}

impl<SPI, DC, CS, D> Ili9341<SPI, DC, CS, D>
where
    SPI: SpiBus,
    DC: OutputPin,
    CS: OutputPin,
    D: DelayMs,
{
    /// Bus settings the board must apply before handing over `spi`
    pub const SPI_CONFIG: SpiConfig = SpiConfig::ILI9341;

    /// Create a driver with the panel deselected
    ///
    /// Rejects `config` before touching any line. Does not talk to the
    /// controller; call [`init`](Self::init) first.
    pub fn new(
        spi: SPI,
        dc: DC,
        mut cs: CS,
        delay: D,
        config: DisplayConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        cs.set_high();
        Ok(Self {
            bus: PanelBus { spi, dc, cs },
            retry: Retry::new(config.retry, delay),
            config,
            window: AddressWindow::FULL,
        })
    }

    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// Current address window
    pub fn window(&self) -> AddressWindow {
        self.window
    }

    /// Give back the bus, pins and delay
    pub fn release(self) -> (SPI, DC, CS, D) {
        let PanelBus { spi, dc, cs } = self.bus;
        (spi, dc, cs, self.retry.release())
    }

    /// Send one command opcode (DC low), retried on failure
    pub fn send_command(&mut self, opcode: u8) -> Result<(), Ili9341Error<SPI::Error>> {
        self.retry
            .run(&mut self.bus, |bus| bus.command(opcode))
            .map_err(Ili9341Error::Bus)
    }

    /// Send argument or pixel bytes as one transaction (DC high)
    ///
    /// Sent once: a failed write may have been partly clocked out, and
    /// only the caller knows which command to restart from.
    pub fn send_data(&mut self, bytes: &[u8]) -> Result<(), Ili9341Error<SPI::Error>> {
        self.bus.data(bytes).map_err(Ili9341Error::Bus)
    }

    /// Reset the controller and replay the stock bring-up table
    pub fn init(&mut self) -> Result<(), Ili9341Error<SPI::Error>> {
        self.init_with(INIT_TABLE)
    }

    /// Reset the controller and replay `table`
    ///
    /// The table is checked before anything is sent, so a truncated table
    /// never leaves the controller half configured.
    pub fn init_with(&mut self, table: &[u8]) -> Result<(), Ili9341Error<SPI::Error>> {
        InitTable::validate(table)?;

        self.send_command(cmd::SWRESET)?;
        self.retry.delay_ms(RESET_DELAY_MS);

        let mut entries = 0u16;
        for entry in InitTable::new(table) {
            let entry = entry?;
            self.retry
                .run(&mut self.bus, |bus| bus.entry(entry.command, entry.args))
                .map_err(Ili9341Error::Bus)?;
            if entry.post_delay {
                self.retry.delay_ms(RESET_DELAY_MS);
            }
            entries += 1;
        }

        self.window = AddressWindow::FULL;
        info!("ili9341 ready ({} table entries)", entries);
        Ok(())
    }

    /// Text style for this panel's configured background and order
    pub fn text_style(&self, scale: u8, color: Rgb) -> TextStyle {
        TextStyle::new(scale, color)
            .with_background(self.config.background)
            .with_order(self.config.string_order)
    }

    /// Draw one character cell using the configured background
    pub fn draw_char(
        &mut self,
        x: u16,
        y: u16,
        c: char,
        scale: u8,
        color: Rgb,
    ) -> Result<(), Ili9341Error<SPI::Error>> {
        let style = self.text_style(scale, color);
        self.draw_glyph(x, y, c as u32, &style)
    }

    /// Draw a string using the configured background and order
    pub fn draw_string(
        &mut self,
        x: u16,
        y: u16,
        text: &str,
        scale: u8,
        color: Rgb,
    ) -> Result<(), Ili9341Error<SPI::Error>> {
        let style = self.text_style(scale, color);
        self.draw_text(x, y, text, &style)
    }
}

impl<SPI, DC, CS, D> FrameSink for Ili9341<SPI, DC, CS, D>
where
    SPI: SpiBus,
    DC: OutputPin,
    CS: OutputPin,
    D: DelayMs,
{
    type Error = Ili9341Error<SPI::Error>;

    /// CASET, PASET, then RAMWR so the next data bytes are pixels
    fn set_address_window(&mut self, window: AddressWindow) -> Result<(), Self::Error> {
        self.retry
            .run(&mut self.bus, |bus| bus.window(window))
            .map_err(Ili9341Error::Bus)?;
        self.window = window;
        Ok(())
    }

    /// Stream `color` into every pixel of the current window
    ///
    /// Pixels are grouped `pixels_per_transfer` to a transaction; the
    /// byte stream is the same for any grouping. A retry re-selects the
    /// window so RAMWR restarts at its first pixel.
    fn fill(&mut self, color: Rgb) -> Result<(), Self::Error> {
        let batch = self
            .config
            .pixels_per_transfer
            .clamp(1, MAX_PIXELS_PER_TRANSFER) as u32;

        let mut buf = [0u8; MAX_PIXELS_PER_TRANSFER as usize * 3];
        for pixel in buf.chunks_exact_mut(3) {
            pixel.copy_from_slice(&color.to_bytes());
        }

        let window = self.window;
        let mut restart = false;
        self.retry
            .run(&mut self.bus, |bus| {
                if restart {
                    bus.window(window)?;
                }
                restart = true;
                bus.stream(&buf, batch, window.pixel_count())
            })
            .map_err(Ili9341Error::Bus)
    }
}
