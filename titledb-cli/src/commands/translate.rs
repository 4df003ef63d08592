use std::path::{Path, PathBuf};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use titledb_lib::catalog::{
    TranslationTable, bundled_region_table, bundled_translation_table, load_region_table,
    load_translation_table,
};
use titledb_lib::settings::files;
use titledb_lib::{RegionTable, Translator, run_translate};

use crate::CliError;

fn load_titles(path: Option<&Path>) -> Result<TranslationTable, CliError> {
    Ok(match path {
        Some(p) => {
            log::debug!("Using translation table {}", p.display());
            load_translation_table(p)?
        }
        None => bundled_translation_table()?,
    })
}

fn load_regions(path: Option<&Path>) -> Result<RegionTable, CliError> {
    Ok(match path {
        Some(p) => {
            log::debug!("Using region table {}", p.display());
            load_region_table(p)?
        }
        None => bundled_region_table()?,
    })
}

/// Translate the GameTDB title list into the Chinese title list.
pub(crate) fn run_translate_cmd(
    data_dir: &Path,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    titles: Option<PathBuf>,
    regions: Option<PathBuf>,
    header: Option<String>,
) -> Result<(), CliError> {
    let input = input.unwrap_or_else(|| data_dir.join(files::SOURCE_TITLES));
    let output = output.unwrap_or_else(|| data_dir.join(files::CHINESE_TITLES));

    let titles = load_titles(titles.as_deref())?;
    let regions = load_regions(regions.as_deref())?;
    log::debug!(
        "{} translations, {} region codes",
        titles.len(),
        regions.len()
    );

    let mut translator = Translator::new(&titles, &regions);
    if let Some(header) = header {
        translator = translator.with_header(header);
    }
    let Some(stats) = run_translate(&translator, &input, &output)? else {
        return Ok(());
    };

    log::info!(
        "{} {}",
        "Wrote".if_supports_color(Stdout, |t| t.bold()),
        output.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    log::info!(
        "  {} entries: {} translated, {} kept in English",
        stats.entries(),
        stats.translated.if_supports_color(Stdout, |t| t.green()),
        stats.untranslated.if_supports_color(Stdout, |t| t.yellow()),
    );
    if stats.passthrough > 0 {
        log::info!(
            "  {} other lines copied unchanged",
            stats.passthrough.if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    Ok(())
}
