//! Product code → GameTDB identifier resolution.
//!
//! The inventory only knows the 4 character product code (`AMKP`), while the
//! title sources are keyed by full identifiers (`AMKP01`) or, for a few
//! entries, the bare product code. A code resolves to the best identifier
//! that starts with it.

use titledb_core::TitleMap;
use titledb_core::identifier::{MAX_ID_LEN, PRODUCT_CODE_LEN};

/// Candidate lengths in order of preference: full regional identifier first,
/// then the bare product code.
const PREFERRED_LENGTHS: [usize; 2] = [MAX_ID_LEN, PRODUCT_CODE_LEN];

/// Every identifier in `sources` whose uppercased form starts with `code`
/// (already uppercased), in source order and first-appearance order within
/// each source. Identifiers already collected from an earlier source are
/// not repeated.
pub fn find_candidates<'a>(code: &str, sources: &[&'a TitleMap]) -> Vec<&'a str> {
    let mut candidates: Vec<&'a str> = Vec::new();
    for source in sources {
        for id in source.ids() {
            if id.to_uppercase().starts_with(code) && !candidates.contains(&id) {
                candidates.push(id);
            }
        }
    }
    candidates
}

/// Resolve a product code to the best identifier in the Chinese and English
/// title maps.
///
/// The code is trimmed and uppercased; codes shorter than 4 characters never
/// resolve. Among the candidates, the first 6 character identifier wins, then
/// the first 4 character one, then the first candidate of any length.
pub fn resolve_game_id<'a>(product_code: &str, chinese: &'a TitleMap, english: &'a TitleMap) -> Option<&'a str> {
    let code = product_code.trim().to_uppercase();
    if code.chars().count() < PRODUCT_CODE_LEN {
        return None;
    }

    let candidates = find_candidates(&code, &[chinese, english]);
    PREFERRED_LENGTHS
        .iter()
        .find_map(|&len| candidates.iter().copied().find(|c| c.chars().count() == len))
        .or_else(|| candidates.first().copied())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> TitleMap {
        pairs.iter().copied().collect()
    }

    #[test]
    fn prefers_six_character_identifier() {
        let chinese = map(&[("AAAA01", "X")]);
        let english = map(&[("AAAA", "Y")]);
        assert_eq!(resolve_game_id("AAAA", &chinese, &english), Some("AAAA01"));
        // Source order does not matter for the length preference.
        assert_eq!(resolve_game_id("AAAA", &english, &chinese), Some("AAAA01"));
    }

    #[test]
    fn sole_four_character_candidate() {
        let english = map(&[("BBBB", "Z")]);
        assert_eq!(resolve_game_id("BBBB", &TitleMap::new(), &english), Some("BBBB"));
    }

    #[test]
    fn no_candidates() {
        let chinese = map(&[("AAAA01", "X")]);
        assert_eq!(resolve_game_id("CCCC", &chinese, &TitleMap::new()), None);
    }

    #[test]
    fn short_codes_never_resolve() {
        let chinese = map(&[("AAA001", "X")]);
        assert_eq!(resolve_game_id("AAA", &chinese, &TitleMap::new()), None);
        assert_eq!(resolve_game_id("  ", &chinese, &TitleMap::new()), None);
        assert_eq!(resolve_game_id("", &chinese, &TitleMap::new()), None);
    }

    #[test]
    fn code_is_trimmed_and_uppercased() {
        let chinese = map(&[("AMKP01", "X")]);
        assert_eq!(resolve_game_id(" amkp ", &chinese, &TitleMap::new()), Some("AMKP01"));
    }

    #[test]
    fn matching_ignores_identifier_case() {
        let english = map(&[("amkp01", "Mario Kart 8")]);
        assert_eq!(resolve_game_id("AMKP", &TitleMap::new(), &english), Some("amkp01"));
    }

    #[test]
    fn first_candidate_wins_within_a_length() {
        let chinese = map(&[("AMKP99", "a"), ("AMKP01", "b")]);
        let english = map(&[("AMKP00", "c")]);
        assert_eq!(resolve_game_id("AMKP", &chinese, &english), Some("AMKP99"));
    }

    #[test]
    fn other_lengths_are_last_resort() {
        let chinese = map(&[("AMKP0", "five")]);
        let english = map(&[("AMKP0123", "eight"), ("AMKP", "four")]);
        assert_eq!(resolve_game_id("AMKP", &chinese, &english), Some("AMKP"));

        let only_odd = map(&[("AMKP0", "five"), ("AMKP0123", "eight")]);
        assert_eq!(resolve_game_id("AMKP", &only_odd, &TitleMap::new()), Some("AMKP0"));
    }

    #[test]
    fn candidates_are_deduplicated_across_sources() {
        let chinese = map(&[("AMKP01", "a"), ("AMKE01", "b")]);
        let english = map(&[("AMKP01", "c"), ("AMKP", "d")]);
        assert_eq!(
            find_candidates("AMKP", &[&chinese, &english]),
            ["AMKP01", "AMKP"]
        );
    }

    #[test]
    fn longer_codes_narrow_the_match() {
        let chinese = map(&[("AMKP01", "a"), ("AMKP02", "b")]);
        assert_eq!(resolve_game_id("AMKP02", &chinese, &TitleMap::new()), Some("AMKP02"));
    }
}
