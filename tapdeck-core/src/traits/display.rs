//! Pixel sink trait and the text rasteriser built on it

use crate::display::{AddressWindow, Rgb, WindowError};
use crate::text::{glyph_bitmap, lit_cells, StringOrder, TextStyle, GLYPH_SIZE};

/// A panel that accepts an address window followed by a solid pixel stream
///
/// Implementations frame the controller commands; everything drawn by
/// this crate reduces to `set_address_window` + `fill`.
pub trait FrameSink {
    /// Transport or addressing failure
    type Error: From<WindowError>;

    /// Select the region subsequent pixels are written into
    fn set_address_window(&mut self, window: AddressWindow) -> Result<(), Self::Error>;

    /// Stream one colour into every pixel of the current window
    fn fill(&mut self, color: Rgb) -> Result<(), Self::Error>;

    /// Fill an `w` x `h` rectangle with its top-left corner at `(x, y)`
    fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, color: Rgb) -> Result<(), Self::Error> {
        let window = AddressWindow::new(x, y, w, h)?;
        self.set_address_window(window)?;
        self.fill(color)
    }

    /// Fill the whole panel
    fn fill_screen(&mut self, color: Rgb) -> Result<(), Self::Error> {
        self.set_address_window(AddressWindow::FULL)?;
        self.fill(color)
    }
}

/// 8x8 bitmap text on any [`FrameSink`]
pub trait TextExt: FrameSink {
    /// Draw one character cell with its top-left corner at `(x, y)`
    ///
    /// Codepoints above 127 draw nothing. Codepoints without a glyph
    /// draw a background-only cell.
    fn draw_glyph(
        &mut self,
        x: u16,
        y: u16,
        codepoint: u32,
        style: &TextStyle,
    ) -> Result<(), Self::Error> {
        let Some(codepoint) = u8::try_from(codepoint).ok().filter(|c| *c <= 0x7F) else {
            return Ok(());
        };

        let cell = style.cell_size();
        self.fill_rect(x, y, cell, cell, style.bg)?;

        let scale = style.scale as u16;
        for (col, row) in lit_cells(glyph_bitmap(codepoint)) {
            let px = x.saturating_add(col as u16 * scale);
            let py = y.saturating_add(row as u16 * scale);
            self.fill_rect(px, py, scale, scale, style.fg)?;
        }
        Ok(())
    }

    /// Draw a run of characters along increasing x, one cell apart
    ///
    /// Left-to-right text takes one cell per `char`. Mirrored text takes
    /// one cell per byte, last byte first. Stops at the first cell that
    /// leaves the panel.
    fn draw_text(&mut self, x: u16, y: u16, text: &str, style: &TextStyle) -> Result<(), Self::Error> {
        match style.order {
            StringOrder::LeftToRight => {
                draw_cells(self, x, y, text.chars().map(u32::from), style)
            }
            StringOrder::Mirrored => {
                draw_cells(self, x, y, text.bytes().rev().map(u32::from), style)
            }
        }
    }
}

fn draw_cells<S: FrameSink + ?Sized>(
    sink: &mut S,
    x: u16,
    y: u16,
    codepoints: impl Iterator<Item = u32>,
    style: &TextStyle,
) -> Result<(), S::Error> {
    let advance = GLYPH_SIZE as u32 * style.scale as u32;
    for (slot, codepoint) in codepoints.enumerate() {
        let offset = (slot as u32).saturating_mul(advance);
        let cell_x =
            u16::try_from(x as u32 + offset).map_err(|_| WindowError::OutOfBounds)?;
        sink.draw_glyph(cell_x, y, codepoint, style)?;
    }
    Ok(())
}

impl<T: FrameSink + ?Sized> TextExt for T {}
