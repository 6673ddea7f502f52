//! Tag → media metadata lookup
//!
//! The catalog itself is board data; this module only defines the record
//! shape and a single lookup over it.

use super::record::TagId;

/// Physical media type, selects the icon and layout on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MediaKind {
    Vinyl,
    Vhs,
}

/// Metadata shown for one tagged item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CatalogEntry {
    /// 12 uppercase hex digits, as produced by the decoder
    pub tag_id: &'static str,
    pub kind: MediaKind,
    pub title: &'static str,
    /// Artist for records, director for tapes
    pub artist: &'static str,
    pub year: u16,
}

/// Borrowed catalog of known tags
#[derive(Debug, Clone, Copy)]
pub struct Catalog<'a> {
    entries: &'a [CatalogEntry],
}

impl<'a> Catalog<'a> {
    pub const fn new(entries: &'a [CatalogEntry]) -> Self {
        Self { entries }
    }

    /// Find the entry for a scanned tag
    ///
    /// `None` means the tag is unknown (or the id is empty); that is a
    /// presentation decision, not a fault.
    pub fn lookup(&self, tag_id: &TagId) -> Option<&'a CatalogEntry> {
        if tag_id.is_empty() {
            return None;
        }
        self.entries
            .iter()
            .find(|entry| entry.tag_id.eq_ignore_ascii_case(tag_id.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENTRIES: &[CatalogEntry] = &[
        CatalogEntry {
            tag_id: "3A006C84D200",
            kind: MediaKind::Vinyl,
            title: "Blue Train",
            artist: "John Coltrane",
            year: 1957,
        },
        CatalogEntry {
            tag_id: "3A006C9F1100",
            kind: MediaKind::Vhs,
            title: "Alien",
            artist: "Ridley Scott",
            year: 1979,
        },
    ];

    #[test]
    fn test_lookup_known_tag() {
        let catalog = Catalog::new(ENTRIES);
        let id = TagId::parse("3A006C9F1100").unwrap();

        let entry = catalog.lookup(&id).unwrap();
        assert_eq!(entry.kind, MediaKind::Vhs);
        assert_eq!(entry.title, "Alien");
    }

    #[test]
    fn test_unknown_and_empty_tags() {
        let catalog = Catalog::new(ENTRIES);

        assert!(catalog.lookup(&TagId::parse("FFFFFFFFFFFF").unwrap()).is_none());
        assert!(catalog.lookup(&TagId::empty()).is_none());
        assert_eq!(catalog.len(), 2);
        assert!(Catalog::new(&[]).is_empty());
    }
}
