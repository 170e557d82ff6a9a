//! Naming and content scheme of the fixture entries.

use crate::config::{CONTENT_PREFIX, ENTRY_COUNT, INDEX_WIDTH, NAME_PREFIX, NAME_SUFFIX};

/// A single (name, content) pair stored in the archive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Index shared by the name and the content
    pub index: u32,
    /// Entry name, e.g. `answer007.txt`
    pub name: String,
    /// Entry body, e.g. `question007`
    pub content: String,
}

impl Entry {
    /// Builds the entry for `index`.
    pub fn new(index: u32) -> Self {
        Self {
            index,
            name: entry_name(index),
            content: entry_content(index),
        }
    }
}

/// Renders the entry name for `index`.
pub fn entry_name(index: u32) -> String {
    format!("{NAME_PREFIX}{index:0width$}{NAME_SUFFIX}", width = INDEX_WIDTH)
}

/// Renders the entry body for `index`.
pub fn entry_content(index: u32) -> String {
    format!("{CONTENT_PREFIX}{index:0width$}", width = INDEX_WIDTH)
}

/// Recovers the index from an entry name.
///
/// Returns `None` unless `name` is exactly `answer` + three digits + `.txt`.
pub fn parse_name_index(name: &str) -> Option<u32> {
    name.strip_prefix(NAME_PREFIX)
        .and_then(|rest| rest.strip_suffix(NAME_SUFFIX))
        .and_then(parse_digits)
}

/// Recovers the index from an entry body.
pub fn parse_content_index(content: &str) -> Option<u32> {
    content.strip_prefix(CONTENT_PREFIX).and_then(parse_digits)
}

fn parse_digits(digits: &str) -> Option<u32> {
    if digits.len() != INDEX_WIDTH || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Yields every fixture entry in ascending index order.
pub fn fixture_entries() -> impl Iterator<Item = Entry> {
    (0..ENTRY_COUNT).map(Entry::new)
}
