//! Merge the translated title list, GameTDB English titles and the owned-title
//! inventory into one record per title.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use titledb_core::{MergedRecord, OwnedTitle, TitleMap};

use crate::error::JobError;
use crate::resolve::resolve_game_id;
use crate::settings::files;

/// Counters describing how the inventory entries were matched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeStats {
    /// Inventory entries skipped for having no title id
    pub skipped: usize,
    /// Product codes that resolved to an identifier
    pub resolved: usize,
    /// Product codes that fell back to the raw code
    pub unresolved: usize,
    /// Records that got a Chinese name
    pub with_chinese: usize,
}

/// Merge the sources into records.
///
/// With an inventory, one record is produced per entry with a title id, in
/// inventory order. Without one, one record is produced per identifier found
/// in either title map, sorted, with an empty title id.
pub fn merge_titles(
    chinese: &TitleMap,
    english: &TitleMap,
    inventory: Option<&[OwnedTitle]>,
) -> (Vec<MergedRecord>, MergeStats) {
    match inventory {
        Some(owned) => merge_inventory(chinese, english, owned),
        None => merge_without_inventory(chinese, english),
    }
}

fn merge_without_inventory(chinese: &TitleMap, english: &TitleMap) -> (Vec<MergedRecord>, MergeStats) {
    let ids: BTreeSet<&str> = chinese.ids().chain(english.ids()).collect();
    let mut stats = MergeStats::default();

    let records = ids
        .into_iter()
        .map(|id| {
            let chinese_name = chinese.get(id).unwrap_or_default();
            if !chinese_name.is_empty() {
                stats.with_chinese += 1;
            }
            MergedRecord {
                title_id: String::new(),
                game_id: id.to_string(),
                chinese_name: chinese_name.to_string(),
                english_name: english.get(id).unwrap_or_default().to_string(),
            }
        })
        .collect();
    (records, stats)
}

fn merge_inventory(
    chinese: &TitleMap,
    english: &TitleMap,
    owned: &[OwnedTitle],
) -> (Vec<MergedRecord>, MergeStats) {
    let mut stats = MergeStats::default();
    let mut records = Vec::with_capacity(owned.len());

    for title in owned {
        if title.title_id.is_empty() {
            stats.skipped += 1;
            continue;
        }

        let code = title.product_code.as_str();
        let game_id = match resolve_game_id(code, chinese, english) {
            Some(id) => {
                stats.resolved += 1;
                id
            }
            None => {
                log::debug!(
                    "{}: product code {:?} not found in title lists",
                    title.title_id,
                    code
                );
                stats.unresolved += 1;
                code
            }
        };

        let chinese_name = chinese
            .get_non_empty(game_id)
            .or_else(|| chinese.get_non_empty(code))
            .unwrap_or_default();
        // The store listing is the last resort for English; Chinese has none.
        let english_name = english
            .get_non_empty(game_id)
            .or_else(|| english.get_non_empty(code))
            .unwrap_or(title.store_name.as_str());

        if !chinese_name.is_empty() {
            stats.with_chinese += 1;
        }
        records.push(MergedRecord {
            title_id: title.title_id.clone(),
            game_id: game_id.to_string(),
            chinese_name: chinese_name.to_string(),
            english_name: english_name.to_string(),
        });
    }

    (records, stats)
}

/// Input and output files of the merge job.
#[derive(Debug, Clone)]
pub struct MergeFiles {
    /// Owned-title inventory (`wiiu_games.json`); optional
    pub inventory: PathBuf,
    /// GameTDB XML (`wiiutdb.xml`); optional
    pub gametdb: PathBuf,
    /// Translated title list (`gametitle_wiiu.txt`); optional
    pub chinese: PathBuf,
    /// Merged output (`wiiu_titles.json`)
    pub output: PathBuf,
}

/// What a merge run produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeSummary {
    pub records: usize,
    pub chinese_titles: usize,
    pub english_titles: usize,
    /// `false` when the inventory file was missing and records were built
    /// from the title lists alone
    pub used_inventory: bool,
    pub stats: MergeStats,
}

/// Load the three sources, merge them, and write the output file.
///
/// Missing sources count as empty (a missing inventory switches to the
/// title-list-only mode). Malformed XML or JSON aborts the job before
/// anything is written.
pub fn run_merge(files: &MergeFiles) -> Result<MergeSummary, JobError> {
    log::debug!("Loading {}", files.chinese.display());
    let chinese =
        titledb_dat::load_title_list(&files.chinese).map_err(|e| JobError::data(&files.chinese, e))?;

    log::debug!("Loading {}", files.gametdb.display());
    let english =
        titledb_dat::load_gametdb(&files.gametdb).map_err(|e| JobError::data(&files.gametdb, e))?;

    log::debug!("Loading {}", files.inventory.display());
    let inventory = titledb_dat::load_inventory(&files.inventory)
        .map_err(|e| JobError::data(&files.inventory, e))?;
    if inventory.is_none() {
        log::warn!(
            "{} not found, building records from the title lists only (no title ids)",
            files.inventory.display()
        );
    }

    let (records, stats) = merge_titles(&chinese, &english, inventory.as_deref());

    let mut json = Vec::new();
    titledb_dat::write_titles_json(&mut json, &records).map_err(|e| JobError::data(&files.output, e))?;
    std::fs::write(&files.output, json).map_err(|e| JobError::io(&files.output, e))?;

    Ok(MergeSummary {
        records: records.len(),
        chinese_titles: chinese.len(),
        english_titles: english.len(),
        used_inventory: inventory.is_some(),
        stats,
    })
}

impl MergeFiles {
    /// Default file names inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            inventory: dir.join(files::INVENTORY),
            gametdb: dir.join(files::GAMETDB_XML),
            chinese: dir.join(files::CHINESE_TITLES),
            output: dir.join(files::MERGED_TITLES),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> TitleMap {
        pairs.iter().copied().collect()
    }

    fn owned(title_id: &str, product_code: &str, store_name: &str) -> OwnedTitle {
        OwnedTitle {
            title_id: title_id.into(),
            product_code: product_code.into(),
            store_name: store_name.into(),
        }
    }

    #[test]
    fn resolves_and_names_inventory_entries() {
        let chinese = map(&[("AMKP01", "马里奥赛车8 (欧)")]);
        let english = map(&[("AMKP01", "Mario Kart 8"), ("AC3E01", "Pikmin 3")]);
        let inventory = [
            owned("0005000010101D00", "AMKP", "Mario Kart 8 eShop"),
            owned("000500001012BC00", "AC3E", "Pikmin 3 eShop"),
        ];

        let (records, stats) = merge_titles(&chinese, &english, Some(&inventory));
        assert_eq!(
            records,
            [
                MergedRecord {
                    title_id: "0005000010101D00".into(),
                    game_id: "AMKP01".into(),
                    chinese_name: "马里奥赛车8 (欧)".into(),
                    english_name: "Mario Kart 8".into(),
                },
                MergedRecord {
                    title_id: "000500001012BC00".into(),
                    game_id: "AC3E01".into(),
                    chinese_name: String::new(),
                    english_name: "Pikmin 3".into(),
                },
            ]
        );
        assert_eq!(stats.resolved, 2);
        assert_eq!(stats.with_chinese, 1);
    }

    #[test]
    fn unresolved_code_falls_back_to_raw_code_and_store_name() {
        let (records, stats) = merge_titles(
            &TitleMap::new(),
            &TitleMap::new(),
            Some(&[owned("0005000010199900", "ZZZE", "Store Name")]),
        );
        assert_eq!(records[0].game_id, "ZZZE");
        assert_eq!(records[0].chinese_name, "");
        assert_eq!(records[0].english_name, "Store Name");
        assert_eq!(stats.unresolved, 1);
    }

    #[test]
    fn short_code_uses_direct_lookup_by_raw_code() {
        // "AB" is too short to resolve, but exact lookups still use it.
        let chinese = map(&[("AB", "短")]);
        let english = map(&[("AB", "Short")]);
        let (records, _) = merge_titles(&chinese, &english, Some(&[owned("1", "AB", "Store")]));
        assert_eq!(records[0].game_id, "AB");
        assert_eq!(records[0].chinese_name, "短");
        assert_eq!(records[0].english_name, "Short");
    }

    #[test]
    fn empty_names_fall_through_to_next_lookup() {
        let chinese = map(&[("AMKP01", ""), ("AMKP", "中文")]);
        let (records, _) = merge_titles(&chinese, &TitleMap::new(), Some(&[owned("1", "AMKP", "")]));
        assert_eq!(records[0].game_id, "AMKP01");
        assert_eq!(records[0].chinese_name, "中文");
        assert_eq!(records[0].english_name, "");
    }

    #[test]
    fn one_record_per_entry_in_order_without_dedup() {
        let english = map(&[("AMKP01", "Mario Kart 8")]);
        let inventory = [
            owned("B", "AMKP", ""),
            owned("", "AMKP", "skipped"),
            owned("A", "AMKP", ""),
            owned("C", "NONE", "None"),
        ];
        let (records, stats) = merge_titles(&TitleMap::new(), &english, Some(&inventory));
        let ids: Vec<_> = records.iter().map(|r| r.title_id.as_str()).collect();
        assert_eq!(ids, ["B", "A", "C"]);
        assert_eq!(records[0].game_id, "AMKP01");
        assert_eq!(records[1].game_id, "AMKP01");
        assert_eq!(stats.skipped, 1);
    }

    #[test]
    fn without_inventory_uses_sorted_union() {
        let chinese = map(&[("BBBB01", "乙"), ("AAAA01", "甲")]);
        let english = map(&[("CCCC01", "Gamma"), ("AAAA01", "Alpha")]);
        let (records, _) = merge_titles(&chinese, &english, None);
        assert_eq!(
            records,
            [
                MergedRecord {
                    title_id: String::new(),
                    game_id: "AAAA01".into(),
                    chinese_name: "甲".into(),
                    english_name: "Alpha".into(),
                },
                MergedRecord {
                    title_id: String::new(),
                    game_id: "BBBB01".into(),
                    chinese_name: "乙".into(),
                    english_name: String::new(),
                },
                MergedRecord {
                    title_id: String::new(),
                    game_id: "CCCC01".into(),
                    chinese_name: String::new(),
                    english_name: "Gamma".into(),
                },
            ]
        );
    }

    #[test]
    fn empty_inventory_yields_no_records() {
        let chinese = map(&[("AAAA01", "甲")]);
        let (records, _) = merge_titles(&chinese, &TitleMap::new(), Some(&[]));
        assert!(records.is_empty());
    }
}
