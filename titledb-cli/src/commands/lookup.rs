use std::path::{Path, PathBuf};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use titledb_lib::TitleIndex;
use titledb_lib::settings::files;

use crate::CliError;

/// Print the merged record for a title id.
pub(crate) fn run_lookup(
    data_dir: &Path,
    title_id: &str,
    titles_json: Option<PathBuf>,
) -> Result<(), CliError> {
    let path = titles_json.unwrap_or_else(|| data_dir.join(files::MERGED_TITLES));
    if !path.is_file() {
        log::warn!("{} not found, run `titledb merge` first", path.display());
    }

    let index = TitleIndex::load(&path)?;
    log::debug!("{} titles indexed from {}", index.len(), path.display());

    let record = index
        .get(title_id)
        .ok_or_else(|| CliError::not_found(title_id.trim()))?;

    let show = |value: &str| {
        if value.is_empty() {
            "-".to_string()
        } else {
            value.to_string()
        }
    };

    log::info!(
        "{}",
        record.title_id.if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!(
        "  Game ID: {}",
        show(&record.game_id).if_supports_color(Stdout, |t| t.cyan()),
    );
    log::info!("  Chinese: {}", show(&record.chinese_name));
    log::info!("  English: {}", show(&record.english_name));
    Ok(())
}
