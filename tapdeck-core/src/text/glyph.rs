//! Stored bitmap → painted cells
//!
//! Rows are stored MSB-first, but the renderer walks columns left to right
//! testing bit `7 - col` of the *reversed* row byte. The reversal is kept as
//! its own step so the storage format and the scan order can be changed
//! independently.

use super::font::GlyphBitmap;

/// Convert a stored row byte into left-to-right scan order
///
/// Swaps bit 7↔0, 6↔1, 5↔2 and 4↔3.
pub const fn reverse_bits(row: u8) -> u8 {
    let row = (row & 0xF0) >> 4 | (row & 0x0F) << 4;
    let row = (row & 0xCC) >> 2 | (row & 0x33) << 2;
    (row & 0xAA) >> 1 | (row & 0x55) << 1
}

/// Whether column `col` (0 = leftmost) of a scan-order row is lit
pub const fn is_lit(scan_row: u8, col: u8) -> bool {
    (scan_row >> (7 - col)) & 1 != 0
}

/// Cells to paint for a glyph, as `(col, row)` pairs
///
/// Yields top row first and, within a row, left to right.
pub fn lit_cells(bitmap: GlyphBitmap) -> impl Iterator<Item = (u8, u8)> {
    (0u8..8).flat_map(move |row| {
        let scan_row = reverse_bits(bitmap[row as usize]);
        (0u8..8)
            .filter(move |&col| is_lit(scan_row, col))
            .map(move |col| (col, row))
    })
}
