//! Title id lookups over a merged title file.

use std::collections::HashMap;
use std::path::Path;

use titledb_core::MergedRecord;

use crate::error::JobError;

/// Merged records indexed by title id.
///
/// Keys are trimmed and uppercased, so `0005000010101d00` and
/// `0005000010101D00` find the same record. Records without a title id are
/// not indexed; when a title id repeats, the later record wins.
#[derive(Debug, Clone, Default)]
pub struct TitleIndex {
    by_title_id: HashMap<String, MergedRecord>,
}

fn normalize_title_id(title_id: &str) -> String {
    title_id.trim().to_uppercase()
}

impl TitleIndex {
    pub fn from_records(records: impl IntoIterator<Item = MergedRecord>) -> Self {
        let mut by_title_id = HashMap::new();
        for record in records {
            let key = normalize_title_id(&record.title_id);
            if key.is_empty() {
                continue;
            }
            by_title_id.insert(key, record);
        }
        Self { by_title_id }
    }

    /// Load a merged title file. A missing file gives an empty index.
    pub fn load(path: &Path) -> Result<Self, JobError> {
        let records = titledb_dat::load_titles_json(path).map_err(|e| JobError::data(path, e))?;
        Ok(Self::from_records(records))
    }

    pub fn get(&self, title_id: &str) -> Option<&MergedRecord> {
        let key = normalize_title_id(title_id);
        if key.is_empty() {
            return None;
        }
        self.by_title_id.get(&key)
    }

    pub fn len(&self) -> usize {
        self.by_title_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_title_id.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title_id: &str, game_id: &str) -> MergedRecord {
        MergedRecord {
            title_id: title_id.into(),
            game_id: game_id.into(),
            ..Default::default()
        }
    }

    #[test]
    fn lookup_is_case_insensitive_and_trimmed() {
        let index = TitleIndex::from_records([record("0005000010101d00", "AMKP01")]);
        assert_eq!(index.get("0005000010101D00").unwrap().game_id, "AMKP01");
        assert_eq!(index.get(" 0005000010101d00 ").unwrap().game_id, "AMKP01");
        assert!(index.get("0005000010101D01").is_none());
    }

    #[test]
    fn empty_title_ids_are_not_indexed() {
        let index = TitleIndex::from_records([record("", "AMKP01"), record("  ", "AC3E01")]);
        assert!(index.is_empty());
        assert!(index.get("").is_none());
    }

    #[test]
    fn later_duplicate_wins() {
        let index = TitleIndex::from_records([record("1", "OLD"), record("1", "NEW")]);
        assert_eq!(index.len(), 1);
        assert_eq!(index.get("1").unwrap().game_id, "NEW");
    }
}
