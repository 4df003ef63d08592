//! GameTDB XML (`wiiutdb.xml`) English title extraction.
//!
//! Only the pieces needed for the title merge are read:
//!
//! ```xml
//! <datafile>
//!   <game name="...">
//!     <id>AMKP01</id>
//!     <locale lang="EN"><title>Mario Kart 8</title></locale>
//!     <locale lang="JA"><title>マリオカート8</title></locale>
//!   </game>
//! </datafile>
//! ```
//!
//! For each `game` the first direct `id` child names the game. The English
//! title is the first direct `title` child of the first `locale` whose `lang`
//! is `EN` (any case) and whose title text is non-empty. Games with an empty
//! id or without an English title are skipped.

use std::io::BufRead;
use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;
use titledb_core::TitleMap;

use crate::error::DatError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Capture {
    Id,
    Title,
}

/// Parse state for the `game` element currently open.
#[derive(Debug)]
struct GameState {
    /// Element depth of the `<game>` tag (number of open ancestors).
    depth: usize,
    id_seen: bool,
    id: String,
    in_locale: bool,
    locale_is_en: bool,
    locale_title_seen: bool,
    english: Option<String>,
    capture: Option<Capture>,
    /// Cleared once a child element opens inside the captured element; only
    /// the text before the first child counts.
    capturing_text: bool,
    text: String,
}

impl GameState {
    fn new(depth: usize) -> Self {
        Self {
            depth,
            id_seen: false,
            id: String::new(),
            in_locale: false,
            locale_is_en: false,
            locale_title_seen: false,
            english: None,
            capture: None,
            capturing_text: false,
            text: String::new(),
        }
    }

    /// Depth at which the captured element's own text appears.
    fn text_depth(&self) -> Option<usize> {
        match self.capture {
            Some(Capture::Id) => Some(self.depth + 2),
            Some(Capture::Title) => Some(self.depth + 3),
            None => None,
        }
    }

    fn start_capture(&mut self, capture: Capture) {
        self.capture = Some(capture);
        self.capturing_text = true;
        self.text.clear();
    }

    fn push_text(&mut self, depth: usize, text: &str) {
        if self.capturing_text && self.text_depth() == Some(depth) {
            self.text.push_str(text);
        }
    }

    /// Called for every element opened inside the game. `depth` is the number
    /// of open ancestors of the new element.
    fn open(&mut self, depth: usize, e: &BytesStart<'_>) -> Result<(), DatError> {
        if self.text_depth().is_some_and(|d| depth >= d) {
            self.capturing_text = false;
        }
        let name = e.name();
        if depth == self.depth + 1 {
            match name.as_ref() {
                b"id" if !self.id_seen => {
                    self.id_seen = true;
                    self.start_capture(Capture::Id);
                }
                b"locale" => {
                    self.in_locale = true;
                    self.locale_is_en = is_english(e)?;
                    self.locale_title_seen = false;
                }
                _ => {}
            }
        } else if depth == self.depth + 2
            && self.in_locale
            && name.as_ref() == b"title"
            && !self.locale_title_seen
        {
            self.locale_title_seen = true;
            if self.locale_is_en && self.english.is_none() {
                self.start_capture(Capture::Title);
            }
        }
        Ok(())
    }

    /// Called for every element closed inside the game (not the game itself).
    fn close(&mut self, depth: usize, name: &[u8]) {
        if depth == self.depth + 1 {
            match name {
                b"id" if self.capture == Some(Capture::Id) => {
                    self.capture = None;
                    self.id = self.text.trim().to_string();
                }
                b"locale" => self.in_locale = false,
                _ => {}
            }
        } else if depth == self.depth + 2 && self.capture == Some(Capture::Title) && name == b"title" {
            self.capture = None;
            let title = self.text.trim();
            if !title.is_empty() {
                self.english = Some(title.to_string());
            }
        }
    }
}

fn is_english(e: &BytesStart<'_>) -> Result<bool, DatError> {
    for attr in e.attributes() {
        let attr = attr?;
        if attr.key.as_ref() == b"lang" {
            return Ok(String::from_utf8_lossy(&attr.value).to_uppercase() == "EN");
        }
    }
    Ok(false)
}

/// Parse a GameTDB XML document into a `game id → English title` map.
///
/// Ill-formed XML (mismatched or unclosed tags, no root element, anything but
/// whitespace after the root element) is an error.
pub fn parse_gametdb<R: BufRead>(reader: R) -> Result<TitleMap, DatError> {
    let mut xml = Reader::from_reader(reader);

    let mut buf = Vec::new();
    let mut titles = TitleMap::new();
    let mut stack: Vec<Vec<u8>> = Vec::new();
    let mut game: Option<GameState> = None;
    let mut saw_root = false;
    let mut root_closed = false;
    let mut games_seen = 0usize;

    loop {
        match xml.read_event_into(&mut buf)? {
            Event::Start(ref e) => {
                if root_closed {
                    return Err(junk_after_root());
                }
                open_element(&mut game, stack.len(), e, &mut games_seen)?;
                stack.push(e.name().as_ref().to_vec());
                saw_root = true;
            }
            Event::Empty(ref e) => {
                if root_closed {
                    return Err(junk_after_root());
                }
                let depth = stack.len();
                open_element(&mut game, depth, e, &mut games_seen)?;
                close_element(&mut game, depth, e.name().as_ref(), &mut titles);
                saw_root = true;
                root_closed = depth == 0;
            }
            Event::End(ref e) => {
                let Some(open) = stack.pop() else {
                    return Err(DatError::malformed_markup("closing tag without an open element"));
                };
                if open.as_slice() != e.name().as_ref() {
                    return Err(DatError::malformed_markup(format!(
                        "expected </{}>, found </{}>",
                        String::from_utf8_lossy(&open),
                        String::from_utf8_lossy(e.name().as_ref()),
                    )));
                }
                close_element(&mut game, stack.len(), &open, &mut titles);
                root_closed = stack.is_empty();
            }
            Event::Text(ref e) => {
                let text = e.unescape()?;
                if stack.is_empty() {
                    if !text.trim().is_empty() {
                        return Err(DatError::malformed_markup("text outside the root element"));
                    }
                } else if let Some(g) = game.as_mut() {
                    g.push_text(stack.len(), &text);
                }
            }
            Event::CData(e) => {
                if stack.is_empty() {
                    return Err(DatError::malformed_markup("text outside the root element"));
                }
                if let Some(g) = game.as_mut() {
                    g.push_text(stack.len(), &String::from_utf8_lossy(&e.into_inner()));
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    if let Some(open) = stack.last() {
        return Err(DatError::malformed_markup(format!(
            "unexpected end of document inside <{}>",
            String::from_utf8_lossy(open)
        )));
    }
    if !saw_root {
        return Err(DatError::malformed_markup("no root element"));
    }

    log::debug!(
        "GameTDB: {} games, {} with an English title",
        games_seen,
        titles.len()
    );
    Ok(titles)
}

fn junk_after_root() -> DatError {
    DatError::malformed_markup("junk after the root element")
}

fn open_element(
    game: &mut Option<GameState>,
    depth: usize,
    e: &BytesStart<'_>,
    games_seen: &mut usize,
) -> Result<(), DatError> {
    if let Some(g) = game.as_mut() {
        return g.open(depth, e);
    }
    // The document root is never a record.
    if depth > 0 && e.name().as_ref() == b"game" {
        *game = Some(GameState::new(depth));
        *games_seen += 1;
    }
    Ok(())
}

fn close_element(game: &mut Option<GameState>, depth: usize, name: &[u8], titles: &mut TitleMap) {
    let Some(g) = game.as_mut() else {
        return;
    };
    if depth != g.depth {
        g.close(depth, name);
        return;
    }
    if let Some(g) = game.take() {
        if g.id.is_empty() {
            return;
        }
        if let Some(english) = g.english {
            titles.insert(g.id, english);
        }
    }
}

/// Load `game id → English title` from a GameTDB XML file.
///
/// A missing file yields an empty map; a malformed one is an error.
pub fn load_gametdb(path: &Path) -> Result<TitleMap, DatError> {
    if !path.is_file() {
        log::debug!("{} not found, no English titles", path.display());
        return Ok(TitleMap::new());
    }
    let file = std::fs::File::open(path)?;
    parse_gametdb(std::io::BufReader::new(file))
}
