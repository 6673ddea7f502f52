//! Decoding of the reader's 10-byte output block
//!
//! ```text
//! ┌──────────────────────┬──────────────────────┐
//! │ TAG ID               │ TIMESTAMP            │
//! │ 6B (raw, not ASCII)  │ 4B big-endian u32 ms │
//! └──────────────────────┴──────────────────────┘
//! ```

use core::fmt;

use heapless::String;

/// Raw tag identifier length in bytes
pub const TAG_ID_BYTES: usize = 6;

/// Rendered tag identifier length (two hex digits per byte)
pub const TAG_ID_LEN: usize = TAG_ID_BYTES * 2;

/// Length of one block read from the reader
pub const TAG_BLOCK_LEN: usize = TAG_ID_BYTES + 4;

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Tag identifier as 12 uppercase hex digits
///
/// Invariant: either empty ("no tag") or exactly [`TAG_ID_LEN`] characters
/// from `0-9A-F`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Hash)]
pub struct TagId(String<TAG_ID_LEN>);

impl TagId {
    /// The "no tag" identifier
    pub const fn empty() -> Self {
        Self(String::new())
    }

    /// Render raw identifier bytes, two hex digits each
    pub fn from_bytes(bytes: &[u8; TAG_ID_BYTES]) -> Self {
        let mut id = String::new();
        for &byte in bytes {
            // Capacity is exactly 2 * TAG_ID_BYTES
            let _ = id.push(HEX_DIGITS[(byte >> 4) as usize] as char);
            let _ = id.push(HEX_DIGITS[(byte & 0x0F) as usize] as char);
        }
        Self(id)
    }

    /// Parse a rendered identifier
    ///
    /// Accepts exactly 12 hex digits; lowercase is normalised to uppercase.
    pub fn parse(text: &str) -> Option<Self> {
        if text.len() != TAG_ID_LEN {
            return None;
        }

        let mut id = String::new();
        for ch in text.chars() {
            if !ch.is_ascii_hexdigit() {
                return None;
            }
            let _ = id.push(ch.to_ascii_uppercase());
        }
        Some(Self(id))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether every raw byte was zero (the reader's empty-queue marker)
    pub fn is_zero(&self) -> bool {
        !self.is_empty() && self.0.bytes().all(|b| b == b'0')
    }
}

impl fmt::Display for TagId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for TagId {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{=str}", self.as_str());
    }
}

/// One decoded read
///
/// Built fresh on every decode and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TagRecord {
    pub tag_id: TagId,
    /// Reader timestamp in milliseconds
    pub timestamp: u32,
}

impl TagRecord {
    /// Record standing for a failed or short read
    pub const fn none() -> Self {
        Self {
            tag_id: TagId::empty(),
            timestamp: 0,
        }
    }
}

/// Decode one block read from the reader
///
/// A block shorter than [`TAG_BLOCK_LEN`] decodes to an empty tag id;
/// trailing bytes past the block are ignored.
pub fn decode_block(block: &[u8]) -> TagRecord {
    let (Some(id), Some(time)) = (
        block.get(..TAG_ID_BYTES),
        block.get(TAG_ID_BYTES..TAG_BLOCK_LEN),
    ) else {
        return TagRecord::none();
    };

    let mut id_bytes = [0u8; TAG_ID_BYTES];
    id_bytes.copy_from_slice(id);
    let mut time_bytes = [0u8; 4];
    time_bytes.copy_from_slice(time);

    TagRecord {
        tag_id: TagId::from_bytes(&id_bytes),
        timestamp: u32::from_be_bytes(time_bytes),
    }
}
