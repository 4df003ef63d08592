//! On-disk shapes of the catalog YAML files.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One translation pair: `[source title, translated title]`.
///
/// ```yaml
/// - ["Mario Kart 8", "马里奥赛车8"]
/// - ["Terraria", "泰拉瑞亚"]
/// ```
pub type TranslationEntry = (String, String);

/// The region table file.
///
/// ```yaml
/// unknown: 其他
/// codes:
///   "E": 美
///   "J": 日
/// ```
///
/// Quote the letter keys: unquoted `Y` and `N` are booleans to some YAML readers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionsFile {
    /// Label for letters without an entry
    pub unknown: String,
    #[serde(default)]
    pub codes: BTreeMap<String, String>,
}
