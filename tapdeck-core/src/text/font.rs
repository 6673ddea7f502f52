//! 8×8 bitmap font
//!
//! One byte per row, top row first. Storage order is row-major with the
//! bits packed MSB-first; see [`super::glyph::reverse_bits`] for how a row is
//! turned into left-to-right cells.
//!
//! Only space, `.`, `:`, digits and ASCII letters have bitmaps. Every other
//! codepoint renders as [`BLANK_GLYPH`].

/// Glyph cell edge length in font pixels
pub const GLYPH_SIZE: u16 = 8;

/// Stored bitmap for one glyph
pub type GlyphBitmap = [u8; 8];

/// Bitmap for any codepoint without an entry
pub const BLANK_GLYPH: GlyphBitmap = [0x00; 8];

/// Font entries, sorted by codepoint
const FONT_8X8: &[(u8, GlyphBitmap)] = &[
    (b' ', [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
    (b'.', [0x00, 0x00, 0x00, 0x00, 0x00, 0x18, 0x18, 0x00]),
    (b'0', [0x3C, 0x66, 0x6E, 0x76, 0x7E, 0x66, 0x66, 0x3C]),
    (b'1', [0x18, 0x38, 0x18, 0x18, 0x18, 0x18, 0x18, 0x3C]),
    (b'2', [0x3C, 0x66, 0x06, 0x0C, 0x18, 0x30, 0x60, 0x7E]),
    (b'3', [0x3C, 0x66, 0x06, 0x1C, 0x06, 0x06, 0x66, 0x3C]),
    (b'4', [0x0C, 0x1C, 0x3C, 0x6C, 0x7E, 0x0C, 0x0C, 0x0C]),
    (b'5', [0x7E, 0x60, 0x7C, 0x06, 0x06, 0x06, 0x66, 0x3C]),
    (b'6', [0x3C, 0x66, 0x60, 0x7C, 0x66, 0x66, 0x66, 0x3C]),
    (b'7', [0x7E, 0x06, 0x0C, 0x18, 0x30, 0x30, 0x30, 0x30]),
    (b'8', [0x3C, 0x66, 0x66, 0x3C, 0x66, 0x66, 0x66, 0x3C]),
    (b'9', [0x3C, 0x66, 0x66, 0x66, 0x3E, 0x06, 0x66, 0x3C]),
    (b':', [0x00, 0x18, 0x18, 0x00, 0x00, 0x18, 0x18, 0x00]),
    (b'A', [0x18, 0x3C, 0x66, 0x66, 0x7E, 0x66, 0x66, 0x66]),
    (b'B', [0x7C, 0x66, 0x66, 0x7C, 0x66, 0x66, 0x66, 0x7C]),
    (b'C', [0x3C, 0x66, 0x60, 0x60, 0x60, 0x60, 0x66, 0x3C]),
    (b'D', [0x7C, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x7C]),
    (b'E', [0x7E, 0x60, 0x60, 0x7C, 0x60, 0x60, 0x60, 0x7E]),
    (b'F', [0x7E, 0x60, 0x60, 0x7C, 0x60, 0x60, 0x60, 0x60]),
    (b'G', [0x3C, 0x66, 0x60, 0x6E, 0x66, 0x66, 0x66, 0x3C]),
    (b'H', [0x66, 0x66, 0x66, 0x7E, 0x66, 0x66, 0x66, 0x66]),
    (b'I', [0x3C, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x3C]),
    (b'J', [0x1E, 0x0C, 0x0C, 0x0C, 0x0C, 0x0C, 0x6C, 0x38]),
    (b'K', [0x66, 0x6C, 0x78, 0x70, 0x78, 0x6C, 0x66, 0x66]),
    (b'L', [0x60, 0x60, 0x60, 0x60, 0x60, 0x60, 0x60, 0x7E]),
    (b'M', [0x63, 0x77, 0x7F, 0x6B, 0x63, 0x63, 0x63, 0x63]),
    (b'N', [0x66, 0x66, 0x76, 0x7E, 0x7E, 0x6E, 0x66, 0x66]),
    (b'O', [0x3C, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x3C]),
    (b'P', [0x7C, 0x66, 0x66, 0x7C, 0x60, 0x60, 0x60, 0x60]),
    (b'Q', [0x3C, 0x66, 0x66, 0x66, 0x66, 0x6E, 0x3C, 0x06]),
    (b'R', [0x7C, 0x66, 0x66, 0x7C, 0x78, 0x6C, 0x66, 0x66]),
    (b'S', [0x3E, 0x60, 0x60, 0x3C, 0x06, 0x06, 0x66, 0x3C]),
    (b'T', [0x7E, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18]),
    (b'U', [0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x3C]),
    (b'V', [0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x3C, 0x18]),
    (b'W', [0x63, 0x63, 0x63, 0x63, 0x6B, 0x7F, 0x77, 0x63]),
    (b'X', [0x66, 0x66, 0x3C, 0x18, 0x18, 0x3C, 0x66, 0x66]),
    (b'Y', [0x66, 0x66, 0x66, 0x3C, 0x18, 0x18, 0x18, 0x18]),
    (b'Z', [0x7E, 0x06, 0x0C, 0x18, 0x30, 0x60, 0x60, 0x7E]),
    (b'a', [0x00, 0x00, 0x3C, 0x06, 0x3E, 0x66, 0x66, 0x3E]),
    (b'b', [0x60, 0x60, 0x7C, 0x66, 0x66, 0x66, 0x66, 0x7C]),
    (b'c', [0x00, 0x00, 0x3C, 0x66, 0x60, 0x60, 0x66, 0x3C]),
    (b'd', [0x06, 0x06, 0x3E, 0x66, 0x66, 0x66, 0x66, 0x3E]),
    (b'e', [0x00, 0x00, 0x3C, 0x66, 0x7E, 0x60, 0x66, 0x3C]),
    (b'f', [0x0E, 0x18, 0x18, 0x7E, 0x18, 0x18, 0x18, 0x18]),
    (b'g', [0x00, 0x00, 0x3E, 0x66, 0x66, 0x66, 0x3E, 0x06]),
    (b'h', [0x60, 0x60, 0x7C, 0x66, 0x66, 0x66, 0x66, 0x66]),
    (b'i', [0x18, 0x00, 0x38, 0x18, 0x18, 0x18, 0x18, 0x3C]),
    (b'j', [0x06, 0x00, 0x0E, 0x06, 0x06, 0x06, 0x06, 0x3C]),
    (b'k', [0x60, 0x60, 0x66, 0x6C, 0x78, 0x6C, 0x66, 0x66]),
    (b'l', [0x38, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x3C]),
    (b'm', [0x00, 0x00, 0x6C, 0x7E, 0x7E, 0x6B, 0x63, 0x63]),
    (b'n', [0x00, 0x00, 0x5C, 0x66, 0x66, 0x66, 0x66, 0x66]),
    (b'o', [0x00, 0x00, 0x3C, 0x66, 0x66, 0x66, 0x66, 0x3C]),
    (b'p', [0x00, 0x00, 0x7C, 0x66, 0x66, 0x66, 0x7C, 0x60]),
    (b'q', [0x00, 0x00, 0x3E, 0x66, 0x66, 0x66, 0x3E, 0x06]),
    (b'r', [0x00, 0x00, 0x7C, 0x66, 0x60, 0x60, 0x60, 0x60]),
    (b's', [0x00, 0x00, 0x3E, 0x60, 0x3C, 0x06, 0x06, 0x7C]),
    (b't', [0x18, 0x18, 0x7E, 0x18, 0x18, 0x18, 0x18, 0x0E]),
    (b'u', [0x00, 0x00, 0x66, 0x66, 0x66, 0x66, 0x66, 0x3E]),
    (b'v', [0x00, 0x00, 0x66, 0x66, 0x66, 0x66, 0x3C, 0x18]),
    (b'w', [0x00, 0x00, 0x63, 0x63, 0x63, 0x6B, 0x7E, 0x36]),
    (b'x', [0x00, 0x00, 0x66, 0x66, 0x3C, 0x18, 0x3C, 0x66]),
    (b'y', [0x00, 0x00, 0x66, 0x66, 0x66, 0x66, 0x3E, 0x06]),
    (b'z', [0x00, 0x00, 0x7E, 0x0C, 0x18, 0x30, 0x60, 0x7E]),
];

/// Look up the stored bitmap for a codepoint
///
/// Codepoints without an entry (including everything above 127) get
/// [`BLANK_GLYPH`].
pub fn glyph(codepoint: u8) -> GlyphBitmap {
    FONT_8X8
        .binary_search_by_key(&codepoint, |&(cp, _)| cp)
        .map(|idx| FONT_8X8[idx].1)
        .unwrap_or(BLANK_GLYPH)
}

/// Whether the font carries a bitmap for `codepoint`
pub fn has_glyph(codepoint: u8) -> bool {
    FONT_8X8
        .binary_search_by_key(&codepoint, |&(cp, _)| cp)
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_sorted() {
        assert!(FONT_8X8.windows(2).all(|pair| pair[0].0 < pair[1].0));
    }

    #[test]
    fn test_covered_ranges() {
        for cp in (b'A'..=b'Z').chain(b'a'..=b'z').chain(b'0'..=b'9') {
            assert!(has_glyph(cp), "missing glyph for {}", cp as char);
        }
        assert!(has_glyph(b' '));
        assert!(has_glyph(b'.'));
        assert!(has_glyph(b':'));
    }

    #[test]
    fn test_missing_entries_are_blank() {
        assert!(!has_glyph(b'!'));
        assert_eq!(glyph(b'!'), BLANK_GLYPH);
        assert_eq!(glyph(0), BLANK_GLYPH);
        assert_eq!(glyph(200), BLANK_GLYPH);
        // Space is stored, but indistinguishable from a missing entry
        assert_eq!(glyph(b' '), BLANK_GLYPH);
    }

    #[test]
    fn test_letter_a() {
        assert_eq!(glyph(b'A')[0], 0x18);
        assert_eq!(glyph(b'A')[7], 0x66);
    }
}
