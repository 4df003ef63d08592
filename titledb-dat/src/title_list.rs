//! Line-oriented GameTDB title lists (`ID = Title`).

use std::io::BufRead;
use std::path::Path;

use titledb_core::TitleMap;

use crate::error::DatError;

/// Every GameTDB title list starts with a `TITLES = <source>` line.
pub const HEADER_PREFIX: &str = "TITLES = ";

/// Read a title list into an `id → title` map.
///
/// This is deliberately looser than the strict entry grammar: any line with
/// an `=` is split at the first `=`, and both sides are trimmed. Blank lines,
/// lines without `=` and lines starting with `TITLES` are skipped. When an id
/// repeats, the later title wins.
pub fn parse_title_list<R: BufRead>(reader: R) -> Result<TitleMap, DatError> {
    let mut titles = TitleMap::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with("TITLES") {
            continue;
        }
        let Some((id, title)) = line.split_once('=') else {
            continue;
        };
        let id = id.trim();
        if !id.is_empty() {
            titles.insert(id, title.trim());
        }
    }
    Ok(titles)
}

/// Load a title list from disk. A missing file yields an empty map.
pub fn load_title_list(path: &Path) -> Result<TitleMap, DatError> {
    if !path.is_file() {
        log::debug!("{} not found, no titles loaded", path.display());
        return Ok(TitleMap::new());
    }
    let file = std::fs::File::open(path)?;
    parse_title_list(std::io::BufReader::new(file))
}
