/// Core data types for the word lookup service.
///
/// This module defines the shared domain model imported by all other modules.
/// It contains no logic, no I/O, and no external dependencies — only types.

// ---------------------------------------------------------------------------
// Relation codes
// ---------------------------------------------------------------------------

/// Datamuse query parameter for perfect rhymes.
pub const REL_RHYME: &str = "rel_rhy";

/// Datamuse query parameter for similar-meaning words.
pub const REL_MEANS_LIKE: &str = "ml";

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// A single word returned by the Datamuse `/words` endpoint.
///
/// Corresponds to one entry in the response array, with the syllable count
/// populated when the request asked for syllable metadata (`md=s`).
#[derive(Debug, Clone, PartialEq)]
pub struct WordEntry {
    pub word: String,
    /// Relevance score assigned by the API. Higher is a better match.
    /// Absent for some relation types.
    pub score: Option<i64>,
    /// Syllable count from `md=s` metadata. Absent when the API does not
    /// know the pronunciation.
    pub num_syllables: Option<u32>,
    /// Metadata tags such as part-of-speech markers ("n", "v", "adj").
    pub tags: Vec<String>,
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can arise when fetching or processing Datamuse data.
#[derive(Debug, PartialEq)]
pub enum LookupError {
    /// The HTTP request could not be sent or completed.
    RequestFailed(String),
    /// Non-2xx HTTP response from the API.
    HttpError(u16),
    /// The response body could not be deserialized.
    ParseError(String),
    /// The requested relation verb/code is not in the registry.
    UnknownRelation(String),
    /// The API answered but returned an empty word list for the term.
    NoResults(String),
}

impl std::fmt::Display for LookupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LookupError::RequestFailed(msg) => write!(f, "Request failed: {}", msg),
            LookupError::HttpError(code) => write!(f, "HTTP error: {}", code),
            LookupError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            LookupError::UnknownRelation(verb) => write!(f, "Unknown relation: {}", verb),
            LookupError::NoResults(term) => write!(f, "No results for term: {}", term),
        }
    }
}

impl std::error::Error for LookupError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_error_display_includes_context() {
        assert_eq!(LookupError::HttpError(503).to_string(), "HTTP error: 503");
        assert_eq!(
            LookupError::NoResults("zyzzyva".to_string()).to_string(),
            "No results for term: zyzzyva"
        );
        assert_eq!(
            LookupError::UnknownRelation("rhymne".to_string()).to_string(),
            "Unknown relation: rhymne"
        );
    }

    #[test]
    fn test_relation_codes_are_distinct() {
        assert_ne!(REL_RHYME, REL_MEANS_LIKE);
    }
}
