//! Title list translation: `ID = Title` → `ID = 中文名 (区)`.
//!
//! Every line of the source list is kept in place. Entry lines get their
//! title replaced by the translation (or kept, when the table has none) and a
//! region label appended; the header is replaced with one describing the
//! output; everything else is copied unchanged.

use std::io::BufRead;
use std::path::Path;

use titledb_catalog::TranslationTable;
use titledb_core::{RegionTable, parse_title_line};
use titledb_dat::HEADER_PREFIX;

use crate::error::JobError;

/// Header written in place of the source list's `TITLES = ...` line.
pub const DEFAULT_HEADER: &str =
    "TITLES = https://www.gametdb.com (type: WiiU language: ZHCN gametitle_wiiu)";

/// How a single line was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Blank,
    Header,
    /// Entry whose title was found in the table
    Translated,
    /// Entry whose title was kept as-is
    Untranslated,
    /// Not an entry; copied unchanged
    Passthrough,
}

/// Line counts for one translation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TranslateStats {
    pub lines: usize,
    pub translated: usize,
    pub untranslated: usize,
    pub passthrough: usize,
}

impl TranslateStats {
    fn record(&mut self, kind: LineKind) {
        self.lines += 1;
        match kind {
            LineKind::Translated => self.translated += 1,
            LineKind::Untranslated => self.untranslated += 1,
            LineKind::Passthrough => self.passthrough += 1,
            LineKind::Blank | LineKind::Header => {}
        }
    }

    /// Number of entry lines (translated or not).
    pub fn entries(&self) -> usize {
        self.translated + self.untranslated
    }
}

/// Translates title list lines with an injected title table and region table.
#[derive(Debug, Clone)]
pub struct Translator<'a> {
    titles: &'a TranslationTable,
    regions: &'a RegionTable,
    header: String,
}

impl<'a> Translator<'a> {
    pub fn new(titles: &'a TranslationTable, regions: &'a RegionTable) -> Self {
        Self {
            titles,
            regions,
            header: DEFAULT_HEADER.to_string(),
        }
    }

    /// Replace the header line written to the output.
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = header.into();
        self
    }

    /// Translate one line (without its line terminator).
    pub fn translate_line(&self, line: &str) -> (String, LineKind) {
        if line.trim().is_empty() {
            return (line.to_string(), LineKind::Blank);
        }
        if line.starts_with(HEADER_PREFIX) {
            return (self.header.clone(), LineKind::Header);
        }
        let Some(entry) = parse_title_line(line) else {
            return (line.to_string(), LineKind::Passthrough);
        };

        let region = self.regions.classify(entry.id);
        let (title, kind) = match self.titles.get(entry.title) {
            Some(translated) => (translated, LineKind::Translated),
            None => (entry.title, LineKind::Untranslated),
        };
        (format!("{} = {} ({})", entry.id, title, region), kind)
    }

    fn push_line(&self, line: &str, out: &mut String, stats: &mut TranslateStats) {
        let (translated, kind) = self.translate_line(line.trim_end_matches(['\r', '\n']));
        stats.record(kind);
        out.push_str(&translated);
        out.push('\n');
    }

    /// Translate a whole list. The output has one line per input line, each
    /// terminated by `\n` (an empty list becomes a single `\n`).
    pub fn translate_reader<R: BufRead>(&self, reader: R) -> std::io::Result<(String, TranslateStats)> {
        let mut out = String::new();
        let mut stats = TranslateStats::default();
        for line in reader.lines() {
            self.push_line(&line?, &mut out, &mut stats);
        }
        if stats.lines == 0 {
            out.push('\n');
        }
        Ok((out, stats))
    }

    /// Translate text held in memory.
    pub fn translate_str(&self, input: &str) -> (String, TranslateStats) {
        let mut out = String::new();
        let mut stats = TranslateStats::default();
        for line in input.lines() {
            self.push_line(line, &mut out, &mut stats);
        }
        if stats.lines == 0 {
            out.push('\n');
        }
        (out, stats)
    }
}

/// Translate `input` into `output`.
///
/// Returns `Ok(None)` without writing anything when `input` does not exist.
/// The output file is written in one go after the whole list is translated.
pub fn run_translate(
    translator: &Translator<'_>,
    input: &Path,
    output: &Path,
) -> Result<Option<TranslateStats>, JobError> {
    if !input.is_file() {
        log::warn!("{} not found, nothing to translate", input.display());
        return Ok(None);
    }

    let file = std::fs::File::open(input).map_err(|e| JobError::io(input, e))?;
    let (text, stats) = translator
        .translate_reader(std::io::BufReader::new(file))
        .map_err(|e| JobError::io(input, e))?;

    log::debug!(
        "{}: {} entries translated, {} kept, {} other lines",
        input.display(),
        stats.translated,
        stats.untranslated,
        stats.passthrough
    );

    std::fs::write(output, text).map_err(|e| JobError::io(output, e))?;
    Ok(Some(stats))
}
