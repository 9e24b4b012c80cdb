//! Locating a phrase inside contact names and ranking the results.
//!
//! The scan works word by word: every non-overlapping occurrence of the
//! phrase inside a word becomes a [`Position`], positions are gathered in
//! reading order of the name, and contacts are ranked by the earliest
//! occurrence. All offsets are character-based.

use crate::tokenize::{Word, tokenize};
use crate::types::{Contact, Position, QueryMatch};

/// How phrase characters are compared against name characters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CaseSensitivity {
    /// Per-character simple Unicode lowercasing, no locale tailoring.
    #[default]
    Insensitive,
    /// Exact character equality.
    Sensitive,
}

impl CaseSensitivity {
    fn chars_equal(self, a: char, b: char) -> bool {
        match self {
            CaseSensitivity::Sensitive => a == b,
            CaseSensitivity::Insensitive => a == b || a.to_lowercase().eq(b.to_lowercase()),
        }
    }
}

/// Options controlling how matches are found and reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchOptions {
    pub case: CaseSensitivity,
    /// Cap on the number of ranked matches returned. Applied after sorting,
    /// so truncation never changes the order of the survivors.
    pub limit: Option<usize>,
}

impl MatchOptions {
    /// Create the default options: case-insensitive, unlimited results.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the character comparison used by the scan.
    #[must_use]
    pub fn with_case(mut self, case: CaseSensitivity) -> Self {
        self.case = case;
        self
    }

    /// Keep at most `limit` ranked matches.
    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Find every contact whose name contains `phrase` and rank the results.
///
/// Contacts without a name, and contacts whose name holds no occurrence of
/// the phrase, are absent from the output. The empty phrase matches nowhere.
/// Within each match the positions are sorted ascending by
/// `(word_offset, from)`; across matches the ordering key is the first
/// position of each match, with ties keeping the contacts' input order.
#[must_use]
pub fn find_matches(phrase: &str, contacts: &[Contact], options: &MatchOptions) -> Vec<QueryMatch> {
    let phrase: Vec<char> = phrase.chars().collect();
    if phrase.is_empty() {
        return Vec::new();
    }

    let mut matches: Vec<QueryMatch> = contacts
        .iter()
        .filter_map(|contact| match_contact(contact, &phrase, options.case))
        .collect();

    // Stable sort: contacts with identical earliest occurrences stay in
    // input order.
    matches.sort_by_key(QueryMatch::relevance);

    if let Some(limit) = options.limit {
        matches.truncate(limit);
    }

    matches
}

fn match_contact(contact: &Contact, phrase: &[char], case: CaseSensitivity) -> Option<QueryMatch> {
    let name = contact.name.as_deref()?;

    let mut positions = Vec::new();
    for word in tokenize(name) {
        scan_word(&word, phrase, case, &mut positions);
    }
    if positions.is_empty() {
        return None;
    }

    // The scan already emits positions in reading order; the sort is the
    // contract and keeps the invariant independent of scan order.
    positions.sort_by_key(Position::reading_order);

    Some(QueryMatch {
        contact_id: contact.id.clone(),
        positions,
    })
}

/// Append every non-overlapping occurrence of `phrase` within `word`.
///
/// After a match ending at `to`, scanning resumes at `to`, so a later
/// occurrence that would reuse already-claimed characters is skipped while
/// disjoint occurrences are all reported.
fn scan_word(word: &Word, phrase: &[char], case: CaseSensitivity, out: &mut Vec<Position>) {
    let chars: Vec<char> = word.text.chars().collect();
    let mut cursor = 0;

    while cursor + phrase.len() <= chars.len() {
        let matched = phrase
            .iter()
            .zip(&chars[cursor..])
            .all(|(p, c)| case.chars_equal(*p, *c));

        if matched {
            out.push(Position {
                word_offset: word.offset,
                from: cursor,
                to: cursor + phrase.len(),
            });
            cursor += phrase.len();
        } else {
            cursor += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(id: &str, name: &str) -> Contact {
        Contact::new(id, name)
    }

    fn position(word_offset: usize, from: usize, to: usize) -> Position {
        Position {
            word_offset,
            from,
            to,
        }
    }

    fn ids(matches: &[QueryMatch]) -> Vec<&str> {
        matches
            .iter()
            .map(|found| found.contact_id.as_str())
            .collect()
    }

    #[test]
    fn whole_word_match_spans_the_word() {
        let matches = find_matches(
            "xxx",
            &[contact("friend1", "xxx")],
            &MatchOptions::default(),
        );

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].positions, vec![position(0, 0, 3)]);
    }

    #[test]
    fn positions_are_relative_to_each_words_beginning() {
        let matches = find_matches(
            "x",
            &[contact("friend1", "x__ _x_ __x")],
            &MatchOptions::default(),
        );

        assert_eq!(
            matches[0].positions,
            vec![position(0, 0, 1), position(4, 1, 2), position(8, 2, 3)]
        );
    }

    #[test]
    fn positions_follow_reading_order_of_the_whole_name() {
        let matches = find_matches(
            "x",
            &[contact("friend1", "__x x__ _x_")],
            &MatchOptions::default(),
        );

        assert_eq!(
            matches[0].positions,
            vec![position(0, 2, 3), position(4, 0, 1), position(8, 1, 2)]
        );
    }

    #[test]
    fn contacts_rank_by_earliest_occurrence() {
        let matches = find_matches(
            "abc",
            &[
                contact("friend1", "abc__"),
                contact("friend2", "__abc"),
                contact("friend3", "_abc_"),
            ],
            &MatchOptions::default(),
        );

        assert_eq!(ids(&matches), vec!["friend1", "friend3", "friend2"]);
    }

    #[test]
    fn earlier_word_outranks_earlier_offset_within_a_later_word() {
        let matches = find_matches(
            "en",
            &[
                contact("quentin", "Dr. Quentin"),
                contact("queenie", "Queenie Ratke"),
            ],
            &MatchOptions::default(),
        );

        // (0, 3) sorts before (4, 2).
        assert_eq!(ids(&matches), vec!["queenie", "quentin"]);
    }

    #[test]
    fn tied_contacts_keep_their_input_order() {
        let matches = find_matches(
            "ann",
            &[
                contact("second", "Anna"),
                contact("first", "Annabel"),
                contact("third", "Ann"),
            ],
            &MatchOptions::default(),
        );

        assert_eq!(ids(&matches), vec!["second", "first", "third"]);
    }

    #[test]
    fn repeated_occurrences_in_one_word_do_not_overlap() {
        let matches = find_matches(
            "En",
            &[contact("greena", "Ena Greenholten PhD")],
            &MatchOptions::default(),
        );

        // In "Greenholten" the scan claims 3..5 and resumes at 5, so the
        // overlapping candidate is skipped and the later "en" at 9..11 is
        // still reported.
        assert_eq!(
            matches[0].positions,
            vec![position(0, 0, 2), position(4, 3, 5), position(4, 9, 11)]
        );
    }

    #[test]
    fn back_to_back_occurrences_are_all_reported() {
        let matches = find_matches(
            "ab",
            &[contact("friend1", "ababa")],
            &MatchOptions::default(),
        );

        assert_eq!(
            matches[0].positions,
            vec![position(0, 0, 2), position(0, 2, 4)]
        );
    }

    #[test]
    fn empty_phrase_matches_nowhere() {
        let matches = find_matches(
            "",
            &[contact("friend1", "any name")],
            &MatchOptions::default(),
        );

        assert!(matches.is_empty());
    }

    #[test]
    fn contacts_without_a_name_are_skipped() {
        let matches = find_matches(
            "Friend",
            &[
                contact("with-name", "Friend With Name"),
                Contact::unnamed("without-name"),
            ],
            &MatchOptions::default(),
        );

        assert_eq!(ids(&matches), vec!["with-name"]);
    }

    #[test]
    fn phrase_never_matches_across_word_boundaries() {
        let matches = find_matches(
            "na An",
            &[contact("anna", "Anna Ann")],
            &MatchOptions::default(),
        );

        assert!(matches.is_empty());
    }

    #[test]
    fn default_comparison_ignores_case() {
        let matches = find_matches(
            "anna",
            &[contact("anna2", "Anna")],
            &MatchOptions::default(),
        );

        assert_eq!(matches[0].positions, vec![position(0, 0, 4)]);
    }

    #[test]
    fn sensitive_comparison_requires_exact_characters() {
        let options = MatchOptions::new().with_case(CaseSensitivity::Sensitive);

        assert!(find_matches("anna", &[contact("anna2", "Anna")], &options).is_empty());
        assert_eq!(
            find_matches("nna", &[contact("anna2", "Anna")], &options)[0].positions,
            vec![position(0, 1, 4)]
        );
    }

    #[test]
    fn limit_caps_results_after_ranking() {
        let options = MatchOptions::new().with_limit(1);
        let matches = find_matches(
            "abc",
            &[contact("late", "__abc"), contact("early", "abc__")],
            &options,
        );

        assert_eq!(ids(&matches), vec!["early"]);
    }

    #[test]
    fn positions_stay_within_their_word() {
        let matches = find_matches(
            "en",
            &[contact("greena", "Ena Greenholten PhD")],
            &MatchOptions::default(),
        );

        for found in &matches {
            for pair in found.positions.windows(2) {
                assert!(pair[0].reading_order() <= pair[1].reading_order());
            }
            for p in &found.positions {
                assert!(p.from < p.to);
            }
        }
    }

    #[test]
    fn multibyte_names_use_character_offsets() {
        let matches = find_matches(
            "öb",
            &[contact("asa", "Åsa Öberg")],
            &MatchOptions::default(),
        );

        assert_eq!(matches[0].positions, vec![position(4, 0, 2)]);
    }
}
