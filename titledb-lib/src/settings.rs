//! Shared settings: the data directory and the settings file location.
//!
//! The settings file is `~/.config/titledb/settings.toml`:
//!
//! ```toml
//! [data]
//! dir = "/home/me/wiiu-data"
//! ```

use std::io;
use std::path::{Path, PathBuf};

/// Default file names inside the data directory.
pub mod files {
    /// GameTDB English title list (translate input)
    pub const SOURCE_TITLES: &str = "wiiutdb.txt";
    /// Translated title list (translate output, merge input)
    pub const CHINESE_TITLES: &str = "gametitle_wiiu.txt";
    /// GameTDB XML database
    pub const GAMETDB_XML: &str = "wiiutdb.xml";
    /// Owned-title inventory
    pub const INVENTORY: &str = "wiiu_games.json";
    /// Merged output
    pub const MERGED_TITLES: &str = "wiiu_titles.json";
}

/// Canonical path to the settings file: `~/.config/titledb/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("titledb").join("settings.toml")
}

/// Resolve the data directory using a priority chain:
///
/// 1. CLI override (if `Some`)
/// 2. Saved `data.dir` in `settings.toml`
/// 3. Current working directory
pub fn resolve_data_dir(cli_override: Option<PathBuf>) -> PathBuf {
    resolve_data_dir_in(&settings_path(), cli_override)
}

/// [`resolve_data_dir`] against an explicit settings file.
pub fn resolve_data_dir_in(settings: &Path, cli_override: Option<PathBuf>) -> PathBuf {
    if let Some(p) = cli_override {
        return p;
    }
    if let Some(p) = load_data_dir(settings) {
        return p;
    }
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

/// Read `data.dir` from a settings file, if set.
pub fn load_data_dir(settings: &Path) -> Option<PathBuf> {
    let contents = std::fs::read_to_string(settings).ok()?;
    let doc: toml::Value = contents.parse().ok()?;
    let dir = doc.get("data")?.get("dir")?.as_str()?;
    if dir.is_empty() {
        None
    } else {
        Some(PathBuf::from(dir))
    }
}

/// Save (or clear) the data directory in the shared settings file.
pub fn save_data_dir(path: Option<&Path>) -> io::Result<()> {
    save_data_dir_in(&settings_path(), path)
}

/// Save (or clear) `data.dir` in `settings`.
///
/// Uses `toml::Value` for a surgical update so unrelated keys are preserved.
pub fn save_data_dir_in(settings: &Path, path: Option<&Path>) -> io::Result<()> {
    let mut doc = match std::fs::read_to_string(settings) {
        Ok(contents) => contents.parse::<toml::Value>().unwrap_or_else(|e| {
            log::warn!(
                "{} is not valid TOML ({}), replacing it",
                settings.display(),
                e.message()
            );
            toml::Value::Table(Default::default())
        }),
        Err(_) => toml::Value::Table(Default::default()),
    };

    let table = doc
        .as_table_mut()
        .ok_or_else(|| io::Error::other("settings.toml root is not a table"))?;
    let data = table
        .entry("data")
        .or_insert_with(|| toml::Value::Table(Default::default()));
    let data_table = data
        .as_table_mut()
        .ok_or_else(|| io::Error::other("[data] is not a table"))?;

    match path {
        Some(p) => {
            data_table.insert(
                "dir".to_string(),
                toml::Value::String(p.to_string_lossy().into_owned()),
            );
        }
        None => {
            data_table.remove("dir");
        }
    }

    // Write atomically
    if let Some(parent) = settings.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let serialized = toml::to_string_pretty(&doc).map_err(io::Error::other)?;
    let tmp = settings.with_extension("toml.tmp");
    std::fs::write(&tmp, &serialized)?;
    std::fs::rename(&tmp, settings)?;

    log::debug!("Saved {}", settings.display());
    Ok(())
}

/// Load the settings file as a pretty-printed TOML string for display.
pub fn load_settings_string() -> Option<String> {
    let contents = std::fs::read_to_string(settings_path()).ok()?;
    let doc: toml::Value = contents.parse().ok()?;
    toml::to_string_pretty(&doc).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_and_load_round_trip() {
        let tmp = tempfile::TempDir::new().unwrap();
        let settings = tmp.path().join("nested").join("settings.toml");

        assert_eq!(load_data_dir(&settings), None);
        save_data_dir_in(&settings, Some(Path::new("/data/wiiu"))).unwrap();
        assert_eq!(load_data_dir(&settings), Some(PathBuf::from("/data/wiiu")));

        save_data_dir_in(&settings, None).unwrap();
        assert_eq!(load_data_dir(&settings), None);
    }

    #[test]
    fn save_preserves_other_keys() {
        let tmp = tempfile::TempDir::new().unwrap();
        let settings = tmp.path().join("settings.toml");
        std::fs::write(&settings, "[other]\nkeep = true\n\n[data]\nextra = 1\n").unwrap();

        save_data_dir_in(&settings, Some(Path::new("/d"))).unwrap();

        let doc: toml::Value = std::fs::read_to_string(&settings).unwrap().parse().unwrap();
        assert_eq!(doc["other"]["keep"].as_bool(), Some(true));
        assert_eq!(doc["data"]["extra"].as_integer(), Some(1));
        assert_eq!(doc["data"]["dir"].as_str(), Some("/d"));
    }

    #[test]
    fn unparseable_settings_are_replaced() {
        let tmp = tempfile::TempDir::new().unwrap();
        let settings = tmp.path().join("settings.toml");
        std::fs::write(&settings, "[data\ndir = ").unwrap();

        save_data_dir_in(&settings, Some(Path::new("/fresh"))).unwrap();
        assert_eq!(load_data_dir(&settings), Some(PathBuf::from("/fresh")));
    }

    #[test]
    fn cli_override_wins() {
        let tmp = tempfile::TempDir::new().unwrap();
        let settings = tmp.path().join("settings.toml");
        save_data_dir_in(&settings, Some(Path::new("/saved"))).unwrap();

        assert_eq!(
            resolve_data_dir_in(&settings, Some(PathBuf::from("/cli"))),
            PathBuf::from("/cli")
        );
        assert_eq!(resolve_data_dir_in(&settings, None), PathBuf::from("/saved"));
    }

    #[test]
    fn empty_dir_counts_as_unset() {
        let tmp = tempfile::TempDir::new().unwrap();
        let settings = tmp.path().join("settings.toml");
        std::fs::write(&settings, "[data]\ndir = \"\"\n").unwrap();
        assert_eq!(load_data_dir(&settings), None);
    }
}
