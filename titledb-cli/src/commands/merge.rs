use std::path::{Path, PathBuf};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use titledb_lib::{MergeFiles, run_merge};

use crate::CliError;

/// Merge the title sources into the merged JSON file.
pub(crate) fn run_merge_cmd(
    data_dir: &Path,
    inventory: Option<PathBuf>,
    gametdb: Option<PathBuf>,
    chinese: Option<PathBuf>,
    output: Option<PathBuf>,
) -> Result<(), CliError> {
    let mut files = MergeFiles::in_dir(data_dir);
    if let Some(p) = inventory {
        files.inventory = p;
    }
    if let Some(p) = gametdb {
        files.gametdb = p;
    }
    if let Some(p) = chinese {
        files.chinese = p;
    }
    if let Some(p) = output {
        files.output = p;
    }

    let summary = run_merge(&files)?;

    log::info!(
        "{} {} ({} records)",
        "Wrote".if_supports_color(Stdout, |t| t.bold()),
        files.output.display().if_supports_color(Stdout, |t| t.cyan()),
        summary.records.if_supports_color(Stdout, |t| t.green()),
    );
    log::info!(
        "  Sources: {} Chinese titles, {} English titles",
        summary.chinese_titles,
        summary.english_titles,
    );
    if summary.used_inventory {
        let stats = summary.stats;
        log::info!(
            "  Inventory: {} resolved, {} unresolved, {} with Chinese names",
            stats.resolved.if_supports_color(Stdout, |t| t.green()),
            stats.unresolved.if_supports_color(Stdout, |t| t.yellow()),
            stats.with_chinese,
        );
        if stats.skipped > 0 {
            log::info!(
                "  {} entries without a title id skipped",
                stats.skipped.if_supports_color(Stdout, |t| t.dimmed()),
            );
        }
    }
    Ok(())
}
