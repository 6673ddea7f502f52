//! Text drawing options

use crate::display::Rgb;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Order in which a string's characters are laid out along increasing x
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum StringOrder {
    /// First character at the lowest x
    #[default]
    LeftToRight,
    /// Last byte at the lowest x
    ///
    /// Walks the string's UTF-8 bytes, so a multi-byte character takes
    /// one blank cell per byte. Reads correctly only on a panel whose
    /// column order is mirrored (MADCTL MX set, as in the stock bring-up
    /// table).
    Mirrored,
}

/// Scale, colours and ordering for one text draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TextStyle {
    /// Font pixel edge in panel pixels (cell is `8 * scale` square)
    pub scale: u8,
    /// Glyph colour
    pub fg: Rgb,
    /// Cell background colour
    pub bg: Rgb,
    pub order: StringOrder,
}

impl TextStyle {
    /// Style with a white background and left-to-right order
    pub const fn new(scale: u8, fg: Rgb) -> Self {
        Self {
            scale,
            fg,
            bg: Rgb::WHITE,
            order: StringOrder::LeftToRight,
        }
    }

    pub const fn with_background(mut self, bg: Rgb) -> Self {
        self.bg = bg;
        self
    }

    pub const fn with_order(mut self, order: StringOrder) -> Self {
        self.order = order;
        self
    }

    /// Cell edge length in panel pixels
    pub const fn cell_size(&self) -> u16 {
        super::font::GLYPH_SIZE * self.scale as u16
    }
}
