//! Human-curated lookup data for the title jobs: the title translation table
//! and the region letter table.
//!
//! Both tables ship as YAML files under `catalog/` and are embedded in the
//! binary. Callers can load replacement files from disk with the same format.

pub mod translation;
pub mod types;
pub mod yaml;

pub use translation::TranslationTable;
pub use types::{RegionsFile, TranslationEntry};
pub use yaml::{
    CatalogError, bundled_region_table, bundled_translation_table, load_region_table,
    load_translation_table, parse_region_table, parse_translation_table,
};
