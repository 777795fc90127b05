//! Sketch listing parser
//!
//! The device answers `getList.html` with `name,descriptor|name,descriptor|...`.
//! Entries come back in file order, without deduplication or sorting.

use serde::{Deserialize, Serialize};

/// Separator between listing entries.
pub const ENTRY_SEPARATOR: char = '|';
/// Separator between an entry's name and descriptor.
pub const FIELD_SEPARATOR: char = ',';

/// A listing segment that has no name/descriptor separator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("malformed listing entry {index}: {segment:?} has no ','")]
pub struct MalformedEntry {
    /// Position of the segment within the listing.
    pub index: usize,
    pub segment: String,
}

/// Rules for turning a stored file name into a display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NameRules {
    /// Removed once from the file name (first occurrence).
    pub strip_prefix: String,
    /// Removed once from the file name (first occurrence).
    pub strip_suffix: String,
}

impl Default for NameRules {
    fn default() -> Self {
        Self {
            strip_prefix: "/imgs/".to_string(),
            strip_suffix: ".txt".to_string(),
        }
    }
}

impl NameRules {
    /// Display name for `file_name`.
    pub fn display_name(&self, file_name: &str) -> String {
        let name = replace_first(file_name, &self.strip_prefix);
        replace_first(&name, &self.strip_suffix)
    }
}

fn replace_first(text: &str, pattern: &str) -> String {
    if pattern.is_empty() {
        text.to_string()
    } else {
        text.replacen(pattern, "", 1)
    }
}

/// One `name,descriptor` pair from the listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingEntry {
    /// Stored file name, e.g. `/imgs/cat.txt`.
    pub file_name: String,
    /// Raw descriptor text, not yet decoded.
    pub descriptor: String,
}

impl ListingEntry {
    pub fn display_name(&self, rules: &NameRules) -> String {
        rules.display_name(&self.file_name)
    }
}

/// Lazily split a listing body into entries.
///
/// A body without any `|` has no entries. Empty segments (such as the one
/// after a trailing `|`) are skipped; other segments without a `,` come
/// back as `Err(MalformedEntry)`.
pub fn entries(body: &str) -> impl Iterator<Item = Result<ListingEntry, MalformedEntry>> + '_ {
    let segments = body
        .contains(ENTRY_SEPARATOR)
        .then(|| body.split(ENTRY_SEPARATOR))
        .into_iter()
        .flatten();

    segments
        .enumerate()
        .filter(|(_, segment)| !segment.is_empty())
        .map(|(index, segment)| {
            let mut fields = segment.split(FIELD_SEPARATOR);
            match (fields.next(), fields.next()) {
                (Some(name), Some(descriptor)) => Ok(ListingEntry {
                    file_name: name.to_string(),
                    descriptor: descriptor.to_string(),
                }),
                _ => Err(MalformedEntry {
                    index,
                    segment: segment.to_string(),
                }),
            }
        })
}

/// A parsed listing with malformed segments dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Listing {
    pub entries: Vec<ListingEntry>,
    /// Segments that could not be parsed.
    pub skipped: Vec<MalformedEntry>,
}

impl Listing {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Parse a whole listing body, logging and skipping malformed entries.
pub fn parse_listing(body: &str) -> Listing {
    let mut listing = Listing::default();
    for entry in entries(body) {
        match entry {
            Ok(entry) => listing.entries.push(entry),
            Err(malformed) => {
                tracing::warn!(index = malformed.index, "{}", malformed);
                listing.skipped.push(malformed);
            }
        }
    }
    tracing::debug!(
        entries = listing.entries.len(),
        skipped = listing.skipped.len(),
        "parsed sketch listing"
    );
    listing
}
