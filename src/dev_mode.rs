/// Development mode utilities for working without network access
///
/// When the live Datamuse API is unavailable, use this module to replay
/// canned responses for testing and development. The canned bodies are real
/// API output captured once; they run through the same parse path as live
/// responses.

use crate::ingest::datamuse;
use crate::model::{LookupError, WordEntry, REL_MEANS_LIKE, REL_RHYME};

/// Captured `/words?rel_rhy=forgetful&md=s` response (truncated).
pub const SAMPLE_RHYMES_JSON: &str = r#"[
    {"word":"regretful","score":2209,"numSyllables":3},
    {"word":"fretful","score":1236,"numSyllables":2},
    {"word":"netful","score":216,"numSyllables":2},
    {"word":"unforgetful","score":110,"numSyllables":4},
    {"word":"threatful","score":92,"numSyllables":2},
    {"word":"debtful","score":57,"numSyllables":2}
]"#;

/// Captured `/words?ml=happy&md=s` response (truncated).
pub const SAMPLE_MEANS_LIKE_JSON: &str = r#"[
    {"word":"content","score":102073,"numSyllables":2,"tags":["adj"]},
    {"word":"cheerful","score":96085,"numSyllables":2,"tags":["adj"]},
    {"word":"euphoric","score":92081,"numSyllables":3,"tags":["adj"]},
    {"word":"glad","score":91008,"numSyllables":1,"tags":["adj"]},
    {"word":"joyful","score":88071,"numSyllables":2,"tags":["adj"]}
]"#;

/// Configuration for development mode data replay
pub struct DevMode {
    /// Cap on entries returned per simulated lookup
    pub max_results: usize,
}

impl DevMode {
    pub fn new(max_results: usize) -> Self {
        Self { max_results }
    }

    /// Fetch canned results as if they came from the live API.
    ///
    /// Only the two primary relations have captured fixtures; any other
    /// code reports `NoResults`, the same way the live path reports an
    /// empty word list.
    pub fn fetch_simulated_associations(
        &self,
        relation_code: &str,
    ) -> Result<Vec<WordEntry>, LookupError> {
        let body = match relation_code {
            REL_RHYME => SAMPLE_RHYMES_JSON,
            REL_MEANS_LIKE => SAMPLE_MEANS_LIKE_JSON,
            other => return Err(LookupError::NoResults(other.to_string())),
        };

        let mut entries = datamuse::parse_words_response(body)?;
        entries.truncate(self.max_results);
        Ok(entries)
    }
}
