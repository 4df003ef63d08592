use std::collections::BTreeMap;

use crate::error::TitleError;

/// Maps the region letter of an identifier to a display label.
///
/// GameTDB identifiers carry their region in the 4th character
/// (`ARDE01` → `E`, `ARDJ` → `J`). Letters without an entry, and identifiers
/// too short to have a region letter, classify as the unknown label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionTable {
    labels: BTreeMap<char, String>,
    unknown: String,
}

/// Zero-based position of the region letter within an identifier.
pub const REGION_CHAR_INDEX: usize = 3;

impl RegionTable {
    /// Create an empty table where everything classifies as `unknown`.
    pub fn new(unknown: impl Into<String>) -> Self {
        Self {
            labels: BTreeMap::new(),
            unknown: unknown.into(),
        }
    }

    /// Add or replace the label for a region letter. Lowercase letters are
    /// stored uppercased. Returns the previous label, if any.
    pub fn insert(&mut self, code: char, label: impl Into<String>) -> Result<Option<String>, TitleError> {
        if !code.is_ascii_alphabetic() {
            return Err(TitleError::invalid_region_code(code.to_string()));
        }
        Ok(self.labels.insert(code.to_ascii_uppercase(), label.into()))
    }

    /// Like [`insert`](Self::insert), taking the code as a string (as it
    /// appears in configuration files). The string must be exactly one letter.
    pub fn insert_str(&mut self, code: &str, label: impl Into<String>) -> Result<Option<String>, TitleError> {
        let mut chars = code.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => self.insert(c, label),
            _ => Err(TitleError::invalid_region_code(code)),
        }
    }

    /// Label used for unmapped letters and short identifiers.
    pub fn unknown_label(&self) -> &str {
        &self.unknown
    }

    /// Label for a single region letter (case-insensitive).
    pub fn label_for(&self, code: char) -> &str {
        let mut upper = code.to_uppercase();
        match (upper.next(), upper.next()) {
            (Some(c), None) => self.labels.get(&c).map_or(&self.unknown, String::as_str),
            _ => &self.unknown,
        }
    }

    /// Classify an identifier by its 4th character.
    pub fn classify(&self, identifier: &str) -> &str {
        match identifier.chars().nth(REGION_CHAR_INDEX) {
            Some(c) => self.label_for(c),
            None => &self.unknown,
        }
    }

    /// Number of mapped letters.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
