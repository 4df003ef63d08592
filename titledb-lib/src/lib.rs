//! Title database jobs: translate a GameTDB title list to Chinese, merge the
//! translated list with GameTDB XML and the owned-title inventory, and look
//! up merged records by title id.

pub mod error;
pub mod lookup;
pub mod merge;
pub mod resolve;
pub mod settings;
pub mod translate;

pub use error::JobError;
pub use lookup::TitleIndex;
pub use merge::{MergeFiles, MergeStats, MergeSummary, merge_titles, run_merge};
pub use resolve::{find_candidates, resolve_game_id};
pub use settings::{resolve_data_dir, settings_path};
pub use translate::{DEFAULT_HEADER, LineKind, TranslateStats, Translator, run_translate};

// Re-exports so frontends only need this crate.
pub use titledb_catalog as catalog;
pub use titledb_core::{MergedRecord, OwnedTitle, RegionTable, TitleMap};
