//! Log output for the CLI.
//!
//! All user-facing output goes through the `log` macros. `info` lines are
//! printed bare, warnings and errors get a coloured prefix, and debug lines
//! (with `--verbose`) get a timestamp. With `--logfile`, everything printed is
//! also appended to the file with ANSI codes removed.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use log::{Level, LevelFilter};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;

/// Writes to stdout and, optionally, an ANSI-stripped copy to a file.
struct TeeWriter {
    file: Option<File>,
}

impl Write for TeeWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::stdout().write_all(buf)?;
        if let Some(file) = self.file.as_mut() {
            file.write_all(&strip_ansi_escapes::strip(buf))?;
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stdout().flush()?;
        if let Some(file) = self.file.as_mut() {
            file.flush()?;
        }
        Ok(())
    }
}

pub(crate) fn init(quiet: bool, verbose: bool, logfile: Option<&Path>) -> Result<(), CliError> {
    let level = if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let file = logfile
        .map(|p| {
            File::create(p)
                .map_err(|e| CliError::config(format!("Cannot open log file {}: {e}", p.display())))
        })
        .transpose()?;

    env_logger::Builder::new()
        .filter_level(level)
        .format(move |buf, record| match record.level() {
            Level::Error => writeln!(
                buf,
                "{} {}",
                "error:".if_supports_color(Stdout, |t| t.red()),
                record.args()
            ),
            Level::Warn => writeln!(
                buf,
                "{} {}",
                "warning:".if_supports_color(Stdout, |t| t.yellow()),
                record.args()
            ),
            Level::Info => writeln!(buf, "{}", record.args()),
            Level::Debug | Level::Trace => writeln!(
                buf,
                "{} {}",
                format!("[{}]", buf.timestamp_millis()).if_supports_color(Stdout, |t| t.dimmed()),
                record.args()
            ),
        })
        .target(env_logger::Target::Pipe(Box::new(TeeWriter { file })))
        .try_init()
        .map_err(|e| CliError::config(format!("Logger setup failed: {e}")))
}
