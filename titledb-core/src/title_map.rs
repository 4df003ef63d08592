use std::collections::HashMap;

/// An identifier → title map that remembers the order in which identifiers
/// were first inserted.
///
/// Re-inserting an identifier replaces its title but keeps its original
/// position, so iteration order is "order of first appearance" in the source
/// the map was loaded from. The identifier resolver depends on that order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TitleMap {
    order: Vec<String>,
    titles: HashMap<String, String>,
}

impl TitleMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a title. Returns the previous title for `id`.
    pub fn insert(&mut self, id: impl Into<String>, title: impl Into<String>) -> Option<String> {
        let id = id.into();
        let title = title.into();
        match self.titles.get_mut(&id) {
            Some(existing) => Some(std::mem::replace(existing, title)),
            None => {
                self.order.push(id.clone());
                self.titles.insert(id, title);
                None
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.titles.get(id).map(String::as_str)
    }

    /// Like [`get`](Self::get), but an empty stored title counts as missing.
    pub fn get_non_empty(&self, id: &str) -> Option<&str> {
        self.get(id).filter(|t| !t.is_empty())
    }

    /// Identifiers in first-insertion order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TitleMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (id, title) in iter {
            map.insert(id, title);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reinsert_keeps_first_position() {
        let mut map = TitleMap::new();
        map.insert("BBBB01", "first");
        map.insert("AAAA01", "other");
        assert_eq!(map.insert("BBBB01", "second").as_deref(), Some("first"));

        let ids: Vec<_> = map.ids().collect();
        assert_eq!(ids, ["BBBB01", "AAAA01"]);
        assert_eq!(map.get("BBBB01"), Some("second"));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn empty_titles_are_not_non_empty() {
        let map: TitleMap = [("AAAA", ""), ("BBBB", "Bee")].into_iter().collect();
        assert_eq!(map.get("AAAA"), Some(""));
        assert_eq!(map.get_non_empty("AAAA"), None);
        assert_eq!(map.get_non_empty("BBBB"), Some("Bee"));
        assert_eq!(map.get("CCCC"), None);
    }

    #[test]
    fn ids_follow_insertion_order() {
        let map: TitleMap = [("C", "3"), ("A", "1"), ("B", "2")].into_iter().collect();
        let ids: Vec<_> = map.ids().collect();
        assert_eq!(ids, ["C", "A", "B"]);
    }
}
