//! Merged title file (`wiiu_titles.json`) reading and writing.
//!
//! Written as a pretty-printed JSON array (2-space indent) with non-ASCII text
//! kept as-is, so the Chinese names stay readable in the file.

use std::io::{Read, Write};
use std::path::Path;

use titledb_core::MergedRecord;

use crate::error::DatError;

/// Serialize records to `writer`.
pub fn write_titles_json<W: Write>(mut writer: W, records: &[MergedRecord]) -> Result<(), DatError> {
    let contents = serde_json::to_string_pretty(records)?;
    writer.write_all(contents.as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Deserialize records from `reader`.
pub fn read_titles_json<R: Read>(reader: R) -> Result<Vec<MergedRecord>, DatError> {
    Ok(serde_json::from_reader(reader)?)
}

/// Load a merged title file. A missing file yields no records.
pub fn load_titles_json(path: &Path) -> Result<Vec<MergedRecord>, DatError> {
    if !path.is_file() {
        log::debug!("{} not found, no records loaded", path.display());
        return Ok(Vec::new());
    }
    let file = std::fs::File::open(path)?;
    read_titles_json(std::io::BufReader::new(file))
}
