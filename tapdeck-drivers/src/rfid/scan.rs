//! Bus scan results

use core::fmt;

use tapdeck_hal::i2c::{FIRST_PROBE_ADDRESS, LAST_PROBE_ADDRESS};

/// Which 7-bit addresses acknowledged a zero-length write
///
/// Addresses outside the probed range always read as absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BusScan {
    acked: u128,
}

impl BusScan {
    pub const fn new() -> Self {
        Self { acked: 0 }
    }

    /// Record an acknowledged address
    pub fn mark(&mut self, address: u8) {
        if Self::is_probed(address) {
            self.acked |= 1u128 << address;
        }
    }

    /// Whether `address` is inside the range a scan probes
    pub const fn is_probed(address: u8) -> bool {
        address >= FIRST_PROBE_ADDRESS && address <= LAST_PROBE_ADDRESS
    }

    pub fn is_present(&self, address: u8) -> bool {
        address < 128 && self.acked & (1u128 << address) != 0
    }

    /// Responding addresses in ascending order
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        (FIRST_PROBE_ADDRESS..=LAST_PROBE_ADDRESS).filter(move |&a| self.is_present(a))
    }

    pub fn count(&self) -> u32 {
        self.acked.count_ones()
    }
}

/// 16-column hex grid, `--` for silent addresses, blank for unprobed ones
impl fmt::Display for BusScan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("   ")?;
        for col in 0..16 {
            write!(f, "  {:X}", col)?;
        }
        for row in 0..8u8 {
            write!(f, "\n{:02X}:", row << 4)?;
            for col in 0..16u8 {
                let address = row << 4 | col;
                if !Self::is_probed(address) {
                    f.write_str("   ")?;
                } else if self.is_present(address) {
                    write!(f, " {:02X}", address)?;
                } else {
                    f.write_str(" --")?;
                }
            }
        }
        Ok(())
    }
}
