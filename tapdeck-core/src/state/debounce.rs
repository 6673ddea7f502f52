//! Read-to-event debouncing

use super::machine::PollerState;
use crate::tag::{TagId, TagRecord};

/// Owns the [`PollerState`] for one reader and filters decoded reads
///
/// State lives for the whole process; there is no reset besides
/// constructing a new debouncer.
#[derive(Debug, Clone, Default)]
pub struct TagDebouncer {
    state: PollerState,
    ignore_zero_tag: bool,
}

impl TagDebouncer {
    /// Create a debouncer in [`PollerState::NoTag`]
    ///
    /// With `ignore_zero_tag`, an all-zero identifier (what the reader
    /// returns when its queue is empty) is treated like an empty read.
    pub fn new(ignore_zero_tag: bool) -> Self {
        Self {
            state: PollerState::NoTag,
            ignore_zero_tag,
        }
    }

    pub fn state(&self) -> &PollerState {
        &self.state
    }

    /// Feed one decoded read
    ///
    /// Returns the record to emit, or `None` if the read is debounced.
    pub fn observe(&mut self, record: TagRecord) -> Option<TagRecord> {
        let tag_id = if self.ignore_zero_tag && record.tag_id.is_zero() {
            TagId::empty()
        } else {
            record.tag_id.clone()
        };

        let next = self.state.transition(&tag_id)?;
        self.state = next;
        Some(record)
    }
}
