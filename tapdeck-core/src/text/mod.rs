//! Built-in 8×8 bitmap text
//!
//! [`font`] maps codepoints to stored bitmaps, [`glyph`] converts a stored
//! bitmap into the cells to paint, and [`style`] carries scale, colours and
//! string order. Drawing onto a panel lives in
//! [`crate::traits::display::TextExt`].

pub mod font;
pub mod glyph;
pub mod style;

pub use font::{glyph as glyph_bitmap, GlyphBitmap, BLANK_GLYPH, GLYPH_SIZE};
pub use glyph::{lit_cells, reverse_bits};
pub use style::{StringOrder, TextStyle};
