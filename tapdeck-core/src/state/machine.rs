//! State machine definition
//!
//! The reader gives no removal signal, so there is no transition back to
//! [`PollerState::NoTag`]: a tag counts as "present" until a different tag
//! is read. Empty reads leave the state alone.

use crate::tag::TagId;

/// Poller states
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PollerState {
    /// Nothing read since power-on
    #[default]
    NoTag,
    /// Last distinct tag that was read
    TagPresent(TagId),
}

impl PollerState {
    /// Identifier of the last distinct tag, empty in [`PollerState::NoTag`]
    pub fn last_tag_id(&self) -> &str {
        match self {
            PollerState::NoTag => "",
            PollerState::TagPresent(id) => id.as_str(),
        }
    }

    pub fn is_tag_present(&self) -> bool {
        matches!(self, PollerState::TagPresent(_))
    }

    /// Process a decoded tag id and return the next state
    ///
    /// Returns `None` when the read is debounced: the id is empty or equals
    /// the last distinct tag.
    pub fn transition(&self, tag_id: &TagId) -> Option<PollerState> {
        if tag_id.is_empty() || tag_id.as_str() == self.last_tag_id() {
            return None;
        }
        Some(PollerState::TagPresent(tag_id.clone()))
    }
}
