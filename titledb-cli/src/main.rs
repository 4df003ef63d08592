//! titledb CLI
//!
//! Builds the Chinese Wii U title list and the merged title JSON from GameTDB
//! data and an owned-title inventory.

mod cli_types;
mod commands;
mod error;
mod logging;

use clap::Parser;

use cli_types::{Cli, Commands, ConfigAction};
pub(crate) use error::CliError;

/// Print an empty info line (spacing between output sections).
pub(crate) fn log_blank() {
    log::info!("");
}

fn run(cli: Cli) -> Result<(), CliError> {
    let data_dir = titledb_lib::resolve_data_dir(cli.data_dir);
    log::debug!("Data directory: {}", data_dir.display());

    match cli.command {
        Commands::Translate {
            input,
            output,
            titles,
            regions,
            header,
        } => commands::translate::run_translate_cmd(
            &data_dir, input, output, titles, regions, header,
        ),
        Commands::Merge {
            inventory,
            gametdb,
            chinese,
            output,
        } => commands::merge::run_merge_cmd(&data_dir, inventory, gametdb, chinese, output),
        Commands::Lookup {
            title_id,
            titles_json,
        } => commands::lookup::run_lookup(&data_dir, &title_id, titles_json),
        Commands::Config { action } => match action {
            ConfigAction::Show => {
                commands::config::run_config_show(&data_dir);
                Ok(())
            }
            ConfigAction::Path => {
                commands::config::run_config_path();
                Ok(())
            }
            ConfigAction::SetDataDir { dir } => commands::config::run_config_set_data_dir(dir),
            ConfigAction::ClearDataDir => commands::config::run_config_clear_data_dir(),
        },
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.quiet, cli.verbose, cli.logfile.as_deref()) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    if let Err(e) = run(cli) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
