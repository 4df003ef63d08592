//! GameTDB identifiers and the `ID = Title` line grammar.
//!
//! Identifiers are 4 (product code) to 6 (product code + publisher) characters
//! drawn from `A-Z` and `0-9`, e.g. `ARDE` or `ARDE01`. The title databases
//! published by GameTDB store one entry per line:
//!
//! ```text
//! TITLES = https://www.gametdb.com (type: WiiU language: EN)
//! ARDE01 = Super Mario 3D World
//! ```

/// Shortest identifier accepted by the line grammar (bare product code).
pub const MIN_ID_LEN: usize = 4;

/// Longest identifier accepted by the line grammar (product code + maker code).
pub const MAX_ID_LEN: usize = 6;

/// Length of the product code shared by all regional variants of a title.
pub const PRODUCT_CODE_LEN: usize = 4;

/// A decomposed `ID = Title` line. Both fields borrow from the source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TitleLine<'a> {
    pub id: &'a str,
    /// Title text with surrounding whitespace trimmed (may be empty when the
    /// line only had whitespace after `=`).
    pub title: &'a str,
}

fn is_id_byte(b: u8) -> bool {
    b.is_ascii_uppercase() || b.is_ascii_digit()
}

/// Parse a line of the form `ID = Title` (`ID= Title`, `ID =Title` etc).
///
/// The identifier must start the line and be followed directly by optional
/// whitespace and `=`. Anything after the `=` counts as the title, which must
/// not be empty. Returns `None` for every other line.
pub fn parse_title_line(line: &str) -> Option<TitleLine<'_>> {
    let id_len = line.bytes().take_while(|&b| is_id_byte(b)).count();
    if !(MIN_ID_LEN..=MAX_ID_LEN).contains(&id_len) {
        return None;
    }

    let (id, rest) = line.split_at(id_len);
    let after_eq = rest.trim_start().strip_prefix('=')?;
    if after_eq.is_empty() {
        return None;
    }

    Some(TitleLine {
        id,
        title: after_eq.trim(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_spaced_entry() {
        let line = parse_title_line("ARDE01 = Super Mario 3D World").unwrap();
        assert_eq!(line.id, "ARDE01");
        assert_eq!(line.title, "Super Mario 3D World");
    }

    #[test]
    fn parses_compact_and_padded_forms() {
        assert_eq!(
            parse_title_line("AMKP=Mario Kart 8"),
            Some(TitleLine {
                id: "AMKP",
                title: "Mario Kart 8"
            })
        );
        assert_eq!(
            parse_title_line("AMKP01   =    Mario Kart 8   ").map(|l| l.title),
            Some("Mario Kart 8")
        );
    }

    #[test]
    fn title_keeps_inner_equals_signs() {
        let line = parse_title_line("ABCD01 = A = B").unwrap();
        assert_eq!(line.title, "A = B");
    }

    #[test]
    fn whitespace_only_title_is_empty() {
        let line = parse_title_line("ABCD01 =   ").unwrap();
        assert_eq!(line.title, "");
    }

    #[test]
    fn rejects_bad_identifiers() {
        assert_eq!(parse_title_line("ABC = Too short"), None);
        assert_eq!(parse_title_line("ABCDEFG = Too long"), None);
        assert_eq!(parse_title_line("abcd01 = Lowercase"), None);
        assert_eq!(parse_title_line(" ABCD01 = Leading space"), None);
        assert_eq!(parse_title_line("ABCD01 Missing equals"), None);
        assert_eq!(parse_title_line("ABCD01 ="), None);
    }

    #[test]
    fn header_line_is_grammatically_an_entry() {
        // Callers must check for the header marker before parsing.
        let line = parse_title_line("TITLES = https://www.gametdb.com").unwrap();
        assert_eq!(line.id, "TITLES");
    }
}
