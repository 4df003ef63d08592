//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "titledb")]
#[command(about = "Build Chinese/English Wii U title lists from GameTDB data", long_about = None)]
pub(crate) struct Cli {
    /// Directory holding the data files (defaults to the saved data dir, then the current directory)
    #[arg(short, long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long, global = true)]
    pub logfile: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Translate a GameTDB title list (wiiutdb.txt) to Chinese with region suffixes
    Translate {
        /// Source title list (default: <data-dir>/wiiutdb.txt)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Translated list to write (default: <data-dir>/gametitle_wiiu.txt)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// YAML translation table to use instead of the bundled one
        #[arg(long)]
        titles: Option<PathBuf>,

        /// YAML region table to use instead of the bundled one
        #[arg(long)]
        regions: Option<PathBuf>,

        /// Line written in place of the source's `TITLES = ...` header
        #[arg(long)]
        header: Option<String>,
    },

    /// Merge the translated list, GameTDB XML and the owned-title inventory into JSON
    Merge {
        /// Owned-title inventory (default: <data-dir>/wiiu_games.json)
        #[arg(long)]
        inventory: Option<PathBuf>,

        /// GameTDB XML database (default: <data-dir>/wiiutdb.xml)
        #[arg(long)]
        gametdb: Option<PathBuf>,

        /// Translated title list (default: <data-dir>/gametitle_wiiu.txt)
        #[arg(long)]
        chinese: Option<PathBuf>,

        /// Merged JSON to write (default: <data-dir>/wiiu_titles.json)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Look up a title in the merged JSON by its 16-digit title ID
    Lookup {
        /// Title ID (case-insensitive), e.g. 0005000010101D00
        title_id: String,

        /// Merged JSON to search (default: <data-dir>/wiiu_titles.json)
        #[arg(long)]
        titles_json: Option<PathBuf>,
    },

    /// Manage saved settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show the settings file, data directory and data file status
    Show,

    /// Print the settings file path
    Path,

    /// Save a default data directory
    SetDataDir {
        /// Directory holding the data files
        dir: PathBuf,
    },

    /// Forget the saved data directory
    ClearDataDir,
}
