//! Controller bring-up table parser
//!
//! Table format, repeated until a command byte of `0x00`:
//!
//! ```text
//! ┌─────┬─────────────────────────┬──────────────┐
//! │ CMD │ LEN                     │ ARGS         │
//! │ 1B  │ bit 7: delay, 0-6: argc │ argc bytes   │
//! └─────┴─────────────────────────┴──────────────┘
//! ```
//!
//! The terminating `0x00` has no length byte.

/// Command byte that ends the table
pub const TABLE_END: u8 = 0x00;

/// Length-byte flag requesting a settle delay after the entry
pub const DELAY_FLAG: u8 = 0x80;

/// Length-byte mask for the argument count
pub const ARGC_MASK: u8 = 0x7F;

/// Malformed bring-up table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InitTableError {
    /// The table ended inside the entry for `command`
    Truncated { command: u8 },
}

/// One controller command with its arguments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InitTableEntry<'a> {
    pub command: u8,
    pub args: &'a [u8],
    /// Wait the settle delay after this entry
    pub post_delay: bool,
}

/// Iterator over the entries of an encoded bring-up table
///
/// Stops at the `0x00` sentinel (or at the end of the slice) and never
/// reads past it. After a [`InitTableError`] the iterator is fused.
#[derive(Debug, Clone)]
pub struct InitTable<'a> {
    bytes: &'a [u8],
    pos: usize,
    done: bool,
}

impl<'a> InitTable<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self {
            bytes,
            pos: 0,
            done: false,
        }
    }

    /// Bytes consumed so far, including the sentinel once reached
    pub fn consumed(&self) -> usize {
        self.pos
    }

    /// Check every entry without executing anything
    pub fn validate(bytes: &[u8]) -> Result<usize, InitTableError> {
        let mut count = 0;
        for entry in InitTable::new(bytes) {
            entry?;
            count += 1;
        }
        Ok(count)
    }
}

impl<'a> Iterator for InitTable<'a> {
    type Item = Result<InitTableEntry<'a>, InitTableError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let command = match self.bytes.get(self.pos) {
            Some(&TABLE_END) => {
                self.pos += 1;
                self.done = true;
                return None;
            }
            Some(&command) => command,
            None => {
                self.done = true;
                return None;
            }
        };

        let Some(&len) = self.bytes.get(self.pos + 1) else {
            self.done = true;
            return Some(Err(InitTableError::Truncated { command }));
        };

        let argc = (len & ARGC_MASK) as usize;
        let start = self.pos + 2;
        let Some(args) = self.bytes.get(start..start + argc) else {
            self.done = true;
            return Some(Err(InitTableError::Truncated { command }));
        };

        self.pos = start + argc;
        Some(Ok(InitTableEntry {
            command,
            args,
            post_delay: len & DELAY_FLAG != 0,
        }))
    }
}
