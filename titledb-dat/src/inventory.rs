//! Owned-title inventory (`wiiu_games.json`).
//!
//! A JSON array of objects exported from the console's installed-title list:
//!
//! ```json
//! [{"TitleId": "0005000010101D00", "ProductCode": "AMKP", "Name": "Mario Kart 8"}]
//! ```
//!
//! Other keys are ignored. Missing or `null` fields read as empty strings.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use titledb_core::OwnedTitle;

use crate::error::DatError;

/// Raw inventory entry as it appears in the JSON file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InventoryEntry {
    #[serde(rename = "TitleId", default)]
    pub title_id: Option<String>,
    #[serde(rename = "ProductCode", default)]
    pub product_code: Option<String>,
    #[serde(rename = "Name", default)]
    pub name: Option<String>,
}

impl InventoryEntry {
    /// Normalize into an [`OwnedTitle`] with trimmed fields.
    pub fn to_owned_title(&self) -> OwnedTitle {
        fn field(v: &Option<String>) -> String {
            v.as_deref().unwrap_or_default().trim().to_string()
        }
        OwnedTitle {
            title_id: field(&self.title_id),
            product_code: field(&self.product_code),
            store_name: field(&self.name),
        }
    }
}

/// Parse an inventory JSON array.
pub fn parse_inventory<R: Read>(reader: R) -> Result<Vec<OwnedTitle>, DatError> {
    let entries: Vec<InventoryEntry> = serde_json::from_reader(reader)?;
    Ok(entries.iter().map(InventoryEntry::to_owned_title).collect())
}

/// Load the inventory file. Returns `None` when the file does not exist.
pub fn load_inventory(path: &Path) -> Result<Option<Vec<OwnedTitle>>, DatError> {
    if !path.is_file() {
        return Ok(None);
    }
    let file = std::fs::File::open(path)?;
    parse_inventory(std::io::BufReader::new(file)).map(Some)
}
