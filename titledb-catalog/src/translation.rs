use std::collections::HashMap;

/// Exact-match title translation table.
///
/// Lookups are case-sensitive and whitespace-sensitive: the key must equal the
/// title text exactly as it appears in the source database.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationTable {
    titles: HashMap<String, String>,
    duplicates: Vec<String>,
}

impl TranslationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a translation. A later definition of the same source title replaces
    /// the earlier one, and the title is recorded in [`duplicates`](Self::duplicates).
    pub fn insert(&mut self, source: impl Into<String>, translated: impl Into<String>) {
        let source = source.into();
        if self.titles.insert(source.clone(), translated.into()).is_some() {
            self.duplicates.push(source);
        }
    }

    pub fn get(&self, title: &str) -> Option<&str> {
        self.titles.get(title).map(String::as_str)
    }

    /// The translated title, or `title` itself when there is no entry.
    pub fn translate<'a>(&'a self, title: &'a str) -> &'a str {
        self.get(title).unwrap_or(title)
    }

    /// Source titles that were defined more than once, in the order the
    /// redefinitions were seen.
    pub fn duplicates(&self) -> &[String] {
        &self.duplicates
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TranslationTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (source, translated) in iter {
            table.insert(source, translated);
        }
        table
    }
}
