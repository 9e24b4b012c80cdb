use serde::{Deserialize, Serialize};

/// One occurrence of the search phrase inside a single word of a name.
///
/// All offsets count characters, not bytes. `word_offset` is the offset of
/// the owning word's first character within the full name; `from` and `to`
/// delimit the occurrence relative to the word's start, with `to` exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub word_offset: usize,
    pub from: usize,
    pub to: usize,
}

impl Position {
    /// Ordering key placing positions in reading order of the whole name.
    #[must_use]
    pub fn reading_order(&self) -> (usize, usize) {
        (self.word_offset, self.from)
    }
}

/// The ranked query result for one contact.
///
/// `positions` holds every occurrence of the phrase within the contact's
/// name, in reading order, and is never empty: a contact with no occurrences
/// produces no [`QueryMatch`] at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryMatch {
    pub contact_id: String,
    pub positions: Vec<Position>,
}

impl QueryMatch {
    /// Relevance key of this match: the reading-order key of its earliest
    /// occurrence.
    #[must_use]
    pub fn relevance(&self) -> (usize, usize) {
        self.positions
            .first()
            .map(Position::reading_order)
            .unwrap_or_default()
    }
}
