//! Tag identifiers, decoded reads and catalog lookup

pub mod catalog;
pub mod record;

pub use catalog::{Catalog, CatalogEntry, MediaKind};
pub use record::{decode_block, TagId, TagRecord, TAG_BLOCK_LEN, TAG_ID_BYTES, TAG_ID_LEN};
