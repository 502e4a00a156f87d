//! Video category id → name resolution.
//!
//! The provider assigns every video a numeric category id. The ids and their
//! English names are stable across regions, so a static table covers nearly
//! every row; names fetched live from the provider can be merged in for ids
//! the table does not know.

use std::collections::BTreeMap;

use crate::UNKNOWN;

const STANDARD_CATEGORIES: &[(&str, &str)] = &[
    ("1", "Film & Animation"),
    ("2", "Autos & Vehicles"),
    ("10", "Music"),
    ("15", "Pets & Animals"),
    ("17", "Sports"),
    ("18", "Short Movies"),
    ("19", "Travel & Events"),
    ("20", "Gaming"),
    ("21", "Videoblogging"),
    ("22", "People & Blogs"),
    ("23", "Comedy"),
    ("24", "Entertainment"),
    ("25", "News & Politics"),
    ("26", "Howto & Style"),
    ("27", "Education"),
    ("28", "Science & Technology"),
    ("29", "Nonprofits & Activism"),
    ("30", "Movies"),
    ("31", "Anime/Animation"),
    ("32", "Action/Adventure"),
    ("33", "Classics"),
    ("34", "Comedy"),
    ("35", "Documentary"),
    ("36", "Drama"),
    ("37", "Family"),
    ("38", "Foreign"),
    ("39", "Horror"),
    ("40", "Sci-Fi/Fantasy"),
    ("41", "Thriller"),
    ("42", "Shorts"),
    ("43", "Shows"),
    ("44", "Trailers"),
];

/// Lookup table from category id to display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryMap {
    names: BTreeMap<String, String>,
}

impl Default for CategoryMap {
    fn default() -> Self {
        Self::standard()
    }
}

impl CategoryMap {
    /// The built-in table of standard category ids.
    #[must_use]
    pub fn standard() -> Self {
        let names = STANDARD_CATEGORIES
            .iter()
            .map(|(id, name)| ((*id).to_string(), (*name).to_string()))
            .collect();
        Self { names }
    }

    /// An empty table; every lookup resolves to [`UNKNOWN`].
    #[must_use]
    pub fn empty() -> Self {
        Self {
            names: BTreeMap::new(),
        }
    }

    /// Adds `(id, name)` pairs for ids not already present. The first name
    /// seen for an id wins, so callers merge regions in priority order.
    /// Returns how many ids were added.
    pub fn merge_missing<I>(&mut self, entries: I) -> usize
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut added = 0;
        for (id, name) in entries {
            let id = id.trim().to_string();
            let name = name.trim().to_string();
            if id.is_empty() || name.is_empty() {
                continue;
            }
            if let std::collections::btree_map::Entry::Vacant(slot) = self.names.entry(id) {
                slot.insert(name);
                added += 1;
            }
        }
        added
    }

    /// Resolves a category id. Missing, blank, and unmapped ids resolve to
    /// [`UNKNOWN`].
    #[must_use]
    pub fn resolve(&self, id: Option<&str>) -> &str {
        id.map(str::trim)
            .and_then(|id| self.names.get(id))
            .map_or(UNKNOWN, String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
