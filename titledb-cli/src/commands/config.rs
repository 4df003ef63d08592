use std::path::{Path, PathBuf};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use titledb_lib::settings::{self, files};

use crate::CliError;

/// Show the settings file, the data directory in use, and which data files exist.
pub(crate) fn run_config_show(data_dir: &Path) {
    let path = settings::settings_path();

    log::info!(
        "{}",
        "titledb Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    crate::log_blank();

    if path.exists() {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    if let Some(contents) = settings::load_settings_string() {
        for line in contents.lines() {
            log::info!("    {}", line.if_supports_color(Stdout, |t| t.dimmed()));
        }
    }
    crate::log_blank();

    log::info!(
        "  Data directory: {}",
        data_dir.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    for name in [
        files::SOURCE_TITLES,
        files::CHINESE_TITLES,
        files::GAMETDB_XML,
        files::INVENTORY,
        files::MERGED_TITLES,
    ] {
        if data_dir.join(name).is_file() {
            log::info!(
                "    {:<20} {}",
                name,
                "present".if_supports_color(Stdout, |t| t.green()),
            );
        } else {
            log::info!(
                "    {:<20} {}",
                name,
                "missing".if_supports_color(Stdout, |t| t.dimmed()),
            );
        }
    }
}

/// Print the settings file path.
pub(crate) fn run_config_path() {
    log::info!("{}", settings::settings_path().display());
}

/// Save the default data directory.
pub(crate) fn run_config_set_data_dir(dir: PathBuf) -> Result<(), CliError> {
    if !dir.is_dir() {
        return Err(CliError::config(format!(
            "{} is not a directory",
            dir.display()
        )));
    }
    let dir = std::fs::canonicalize(&dir).unwrap_or(dir);
    settings::save_data_dir(Some(&dir))?;
    log::info!(
        "Data directory set to {}",
        dir.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    Ok(())
}

/// Forget the saved data directory.
pub(crate) fn run_config_clear_data_dir() -> Result<(), CliError> {
    settings::save_data_dir(None)?;
    log::info!("Data directory cleared");
    Ok(())
}
