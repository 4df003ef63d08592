use serde::{Deserialize, Serialize};

/// A title installed on the console, as listed in the owned-title inventory.
///
/// All fields are trimmed; absent fields are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OwnedTitle {
    /// 16 hex digit console title identifier (e.g. `"0005000010101D00"`)
    pub title_id: String,
    /// 4 character product code (e.g. `"AMKP"`)
    pub product_code: String,
    /// Display name from the eShop listing
    pub store_name: String,
}

/// One row of the merged title file.
///
/// Field order is the serialized key order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergedRecord {
    #[serde(default)]
    pub title_id: String,
    #[serde(default)]
    pub game_id: String,
    #[serde(default)]
    pub chinese_name: String,
    #[serde(default)]
    pub english_name: String,
}
