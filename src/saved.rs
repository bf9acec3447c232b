/// Session-scoped saved-words list.
///
/// Holds the words a user has pinned during an interactive session, in the
/// order they were saved. The list lives in memory only and is dropped when
/// the session ends.
///
/// # Clock injection
/// `add_at` accepts a `now: DateTime<Utc>` parameter rather than calling
/// `Utc::now()` internally. This makes saved-at timestamps purely
/// deterministic in tests without mocking or time manipulation; `add` is
/// the convenience wrapper for real use.

use chrono::{DateTime, Utc};

// ---------------------------------------------------------------------------
// Saved word types
// ---------------------------------------------------------------------------

/// One saved word, with the lookup that surfaced it.
#[derive(Debug, Clone, PartialEq)]
pub struct SavedWord {
    pub word: String,
    /// Datamuse relation code of the lookup the word came from.
    pub relation_code: String,
    /// The term the user looked up.
    pub source_term: String,
    pub saved_at: DateTime<Utc>,
}

/// Insertion-ordered list of saved words with case-insensitive dedup.
#[derive(Debug, Clone, Default)]
pub struct SavedWordList {
    entries: Vec<SavedWord>,
}

impl SavedWordList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Saves a word at an explicit timestamp. Returns `false` without
    /// modifying the list when the word (case-insensitively) is already
    /// saved.
    pub fn add_at(
        &mut self,
        word: &str,
        relation_code: &str,
        source_term: &str,
        now: DateTime<Utc>,
    ) -> bool {
        if self.contains(word) {
            return false;
        }
        self.entries.push(SavedWord {
            word: word.to_string(),
            relation_code: relation_code.to_string(),
            source_term: source_term.to_string(),
            saved_at: now,
        });
        true
    }

    /// Convenience wrapper that stamps the real current time.
    /// Use `add_at` in tests to keep them deterministic.
    pub fn add(&mut self, word: &str, relation_code: &str, source_term: &str) -> bool {
        self.add_at(word, relation_code, source_term, Utc::now())
    }

    /// Removes a saved word (case-insensitive). Returns `true` if it was
    /// present.
    pub fn remove(&mut self, word: &str) -> bool {
        let before = self.entries.len();
        self.entries
            .retain(|e| !e.word.eq_ignore_ascii_case(word));
        self.entries.len() != before
    }

    /// Case-insensitive membership check.
    pub fn contains(&self, word: &str) -> bool {
        self.entries
            .iter()
            .any(|e| e.word.eq_ignore_ascii_case(word))
    }

    /// Saved entries in the order they were added.
    pub fn iter(&self) -> impl Iterator<Item = &SavedWord> {
        self.entries.iter()
    }

    /// Saved words (without metadata) in insertion order.
    pub fn words(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.word.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
