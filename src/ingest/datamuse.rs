/// Datamuse Word API Client
///
/// Retrieves word-association results (rhymes, similar-meaning words, and
/// the other relations in `relations::RELATION_REGISTRY`) from the Datamuse
/// `/words` endpoint.
///
/// API Documentation: https://www.datamuse.com/api/
/// Example query: https://api.datamuse.com/words?rel_rhy=forgetful&md=s

use serde::Deserialize;

use crate::model::{LookupError, WordEntry};

pub const DATAMUSE_BASE_URL: &str = "https://api.datamuse.com";

// ============================================================================
// Datamuse API Response Structures
// ============================================================================

/// Single word entry as returned on the wire.
///
/// The endpoint returns a bare JSON array of these, ordered best match
/// first. That order is preserved all the way through parsing so that
/// downstream grouping stays stable.
#[derive(Debug, Deserialize)]
pub struct DatamuseWord {
    pub word: String,
    pub score: Option<i64>,
    #[serde(rename = "numSyllables")]
    pub num_syllables: Option<u32>,
    #[serde(default)]
    pub tags: Vec<String>,
}

// ============================================================================
// API Client Functions
// ============================================================================

/// Builds a `/words` request URL for one relation lookup.
///
/// Syllable metadata (`md=s`) is always requested because the rendering
/// layer groups sound-based relations by syllable count. Spaces in the term
/// are `+`-encoded the way the API expects for multi-word phrases.
pub fn build_words_url(base_url: &str, relation_code: &str, term: &str, max_results: usize) -> String {
    format!(
        "{}/words?{}={}&md=s&max={}",
        base_url,
        relation_code,
        encode_term(term),
        max_results
    )
}

/// Replaces spaces with `+` for use in a query string. Datamuse terms are
/// plain words or short phrases; no further escaping is needed.
fn encode_term(term: &str) -> String {
    term.trim().replace(' ', "+")
}

/// Fetch association results for a term under one relation.
///
/// # Parameters
/// - `client`: HTTP client
/// - `base_url`: API base, e.g. `DATAMUSE_BASE_URL`
/// - `relation_code`: Datamuse query parameter, e.g. "rel_rhy"
/// - `term`: the word or phrase to look up
/// - `max_results`: cap on returned entries
///
/// # Returns
/// Parsed entries in API order (best match first). An empty result set is
/// reported as `LookupError::NoResults` so callers can distinguish "the API
/// knows nothing about this term" from a transport failure.
pub fn fetch_associations(
    client: &reqwest::blocking::Client,
    base_url: &str,
    relation_code: &str,
    term: &str,
    max_results: usize,
) -> Result<Vec<WordEntry>, LookupError> {
    let url = build_words_url(base_url, relation_code, term, max_results);

    let response = client
        .get(&url)
        .header("Accept", "application/json")
        .send()
        .map_err(|e| LookupError::RequestFailed(e.to_string()))?;

    if !response.status().is_success() {
        return Err(LookupError::HttpError(response.status().as_u16()));
    }

    let body = response
        .text()
        .map_err(|e| LookupError::RequestFailed(e.to_string()))?;

    let entries = parse_words_response(&body)?;
    if entries.is_empty() {
        return Err(LookupError::NoResults(term.to_string()));
    }
    Ok(entries)
}

/// Parse a `/words` response body into domain entries, preserving order.
pub fn parse_words_response(body: &str) -> Result<Vec<WordEntry>, LookupError> {
    let wire: Vec<DatamuseWord> =
        serde_json::from_str(body).map_err(|e| LookupError::ParseError(e.to_string()))?;

    Ok(wire
        .into_iter()
        .map(|w| WordEntry {
            word: w.word,
            score: w.score,
            num_syllables: w.num_syllables,
            tags: w.tags,
        })
        .collect())
}

// ============================================================================
// Tests
// ============================================================================
