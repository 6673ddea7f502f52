//! Tag source trait

use crate::health::LinkStatus;
use crate::tag::TagRecord;

/// Anything that yields debounced tag arrivals, one poll per tick
pub trait TagSource {
    /// Transport failure
    type Error;

    /// Run one poll tick
    ///
    /// Returns `Ok(Some(record))` only when a new tag id appears.
    fn poll(&mut self) -> Result<Option<TagRecord>, Self::Error>;

    /// Health of the underlying link
    fn link_status(&self) -> LinkStatus;
}
