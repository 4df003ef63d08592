//! YAML loading for the translation and region tables.
//!
//! The bundled copies live in the `catalog/` directory of this crate:
//!
//! ```text
//! catalog/
//!   titles_zh.yaml   # [source, translation] pairs
//!   regions.yaml     # region letter -> label
//! ```

use std::path::Path;

use thiserror::Error;
use titledb_core::{RegionTable, TitleError};

use crate::translation::TranslationTable;
use crate::types::{RegionsFile, TranslationEntry};

const BUNDLED_TITLES: &str = include_str!("../catalog/titles_zh.yaml");
const BUNDLED_REGIONS: &str = include_str!("../catalog/regions.yaml");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("YAML parse error in {path}: {source}")]
    Parse {
        path: String,
        source: serde_yml::Error,
    },
    #[error("Invalid region table {path}: {source}")]
    InvalidRegion { path: String, source: TitleError },
}

/// Parse a translation table from YAML text. `origin` names the source in
/// errors and warnings.
///
/// Duplicate source titles are allowed; the last one wins and a warning is
/// logged for each redefinition.
pub fn parse_translation_table(contents: &str, origin: &str) -> Result<TranslationTable, CatalogError> {
    let entries: Vec<TranslationEntry> =
        serde_yml::from_str(contents).map_err(|e| CatalogError::Parse {
            path: origin.to_string(),
            source: e,
        })?;

    let table: TranslationTable = entries.into_iter().collect();
    for title in table.duplicates() {
        log::warn!("{origin}: duplicate translation for {title:?}, keeping the last one");
    }
    log::debug!("{origin}: loaded {} title translations", table.len());
    Ok(table)
}

/// Load a translation table from a YAML file.
pub fn load_translation_table(path: &Path) -> Result<TranslationTable, CatalogError> {
    let contents = read(path)?;
    parse_translation_table(&contents, &path.display().to_string())
}

/// The translation table compiled into the binary.
pub fn bundled_translation_table() -> Result<TranslationTable, CatalogError> {
    parse_translation_table(BUNDLED_TITLES, "bundled titles_zh.yaml")
}

/// Parse a region table from YAML text.
pub fn parse_region_table(contents: &str, origin: &str) -> Result<RegionTable, CatalogError> {
    let file: RegionsFile = serde_yml::from_str(contents).map_err(|e| CatalogError::Parse {
        path: origin.to_string(),
        source: e,
    })?;

    let mut table = RegionTable::new(file.unknown);
    for (code, label) in file.codes {
        table
            .insert_str(&code, label)
            .map_err(|e| CatalogError::InvalidRegion {
                path: origin.to_string(),
                source: e,
            })?;
    }
    log::debug!("{origin}: loaded {} region codes", table.len());
    Ok(table)
}

/// Load a region table from a YAML file.
pub fn load_region_table(path: &Path) -> Result<RegionTable, CatalogError> {
    let contents = read(path)?;
    parse_region_table(&contents, &path.display().to_string())
}

/// The region table compiled into the binary.
pub fn bundled_region_table() -> Result<RegionTable, CatalogError> {
    parse_region_table(BUNDLED_REGIONS, "bundled regions.yaml")
}

fn read(path: &Path) -> Result<String, CatalogError> {
    std::fs::read_to_string(path).map_err(|e| CatalogError::Io {
        path: path.display().to_string(),
        source: e,
    })
}
