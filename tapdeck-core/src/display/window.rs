//! Address window: the panel region subsequent pixel data is written into

/// Panel width in pixels (portrait)
pub const PANEL_WIDTH: u16 = 240;

/// Panel height in pixels (portrait)
pub const PANEL_HEIGHT: u16 = 320;

/// Rejected address window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WindowError {
    /// Width or height is zero
    Empty,
    /// Rectangle extends past the panel edge
    OutOfBounds,
}

/// Inclusive rectangle in panel coordinates
///
/// Invariant: `x0 <= x1 < PANEL_WIDTH` and `y0 <= y1 < PANEL_HEIGHT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AddressWindow {
    x0: u16,
    y0: u16,
    x1: u16,
    y1: u16,
}

impl AddressWindow {
    /// Window covering the whole panel
    pub const FULL: Self = Self {
        x0: 0,
        y0: 0,
        x1: PANEL_WIDTH - 1,
        y1: PANEL_HEIGHT - 1,
    };

    /// Build a window from an origin and a size
    ///
    /// The end corner is `(x + w - 1, y + h - 1)`.
    pub fn new(x: u16, y: u16, w: u16, h: u16) -> Result<Self, WindowError> {
        if w == 0 || h == 0 {
            return Err(WindowError::Empty);
        }

        // Widen so x + w cannot wrap
        let x1 = x as u32 + w as u32 - 1;
        let y1 = y as u32 + h as u32 - 1;
        if x1 >= PANEL_WIDTH as u32 || y1 >= PANEL_HEIGHT as u32 {
            return Err(WindowError::OutOfBounds);
        }

        Ok(Self {
            x0: x,
            y0: y,
            x1: x1 as u16,
            y1: y1 as u16,
        })
    }

    pub fn x0(&self) -> u16 {
        self.x0
    }

    pub fn y0(&self) -> u16 {
        self.y0
    }

    pub fn x1(&self) -> u16 {
        self.x1
    }

    pub fn y1(&self) -> u16 {
        self.y1
    }

    pub fn width(&self) -> u16 {
        self.x1 - self.x0 + 1
    }

    pub fn height(&self) -> u16 {
        self.y1 - self.y0 + 1
    }

    /// Number of pixels the controller accepts before its counter wraps
    pub fn pixel_count(&self) -> u32 {
        self.width() as u32 * self.height() as u32
    }

    /// Column-address-set arguments: `[hi(x0), lo(x0), hi(x1), lo(x1)]`
    pub fn column_args(&self) -> [u8; 4] {
        span_args(self.x0, self.x1)
    }

    /// Page-address-set arguments: `[hi(y0), lo(y0), hi(y1), lo(y1)]`
    pub fn page_args(&self) -> [u8; 4] {
        span_args(self.y0, self.y1)
    }
}

fn span_args(start: u16, end: u16) -> [u8; 4] {
    let [s_hi, s_lo] = start.to_be_bytes();
    let [e_hi, e_lo] = end.to_be_bytes();
    [s_hi, s_lo, e_hi, e_lo]
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_full_panel() {
        let window = AddressWindow::new(0, 0, PANEL_WIDTH, PANEL_HEIGHT).unwrap();
        assert_eq!(window, AddressWindow::FULL);
        assert_eq!(window.pixel_count(), 240 * 320);
        assert_eq!(window.column_args(), [0x00, 0x00, 0x00, 0xEF]);
        assert_eq!(window.page_args(), [0x00, 0x00, 0x01, 0x3F]);
    }

    #[test]
    fn test_single_pixel() {
        let window = AddressWindow::new(239, 319, 1, 1).unwrap();
        assert_eq!(window.x1(), 239);
        assert_eq!(window.y1(), 319);
        assert_eq!(window.pixel_count(), 1);
    }

    #[test]
    fn test_rejects_empty_and_overflowing() {
        assert_eq!(AddressWindow::new(0, 0, 0, 5), Err(WindowError::Empty));
        assert_eq!(AddressWindow::new(0, 0, 5, 0), Err(WindowError::Empty));
        assert_eq!(AddressWindow::new(200, 0, 41, 1), Err(WindowError::OutOfBounds));
        assert_eq!(AddressWindow::new(0, 300, 1, 21), Err(WindowError::OutOfBounds));
        assert_eq!(
            AddressWindow::new(u16::MAX, 0, u16::MAX, 1),
            Err(WindowError::OutOfBounds)
        );
    }

    proptest! {
        #[test]
        fn prop_args_are_big_endian_corners(
            (x, w) in (0u16..PANEL_WIDTH).prop_flat_map(|x| (Just(x), 1..=PANEL_WIDTH - x)),
            (y, h) in (0u16..PANEL_HEIGHT).prop_flat_map(|y| (Just(y), 1..=PANEL_HEIGHT - y)),
        ) {
            let window = AddressWindow::new(x, y, w, h).unwrap();
            let x1 = x + w - 1;
            let y1 = y + h - 1;

            prop_assert_eq!(
                window.column_args(),
                [(x >> 8) as u8, x as u8, (x1 >> 8) as u8, x1 as u8]
            );
            prop_assert_eq!(
                window.page_args(),
                [(y >> 8) as u8, y as u8, (y1 >> 8) as u8, y1 as u8]
            );
            prop_assert_eq!(window.pixel_count(), w as u32 * h as u32);
        }
    }
}
