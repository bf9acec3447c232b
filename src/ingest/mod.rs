/// Data ingestion for the word lookup service.
///
/// Submodules:
/// - `datamuse` — HTTP client for the Datamuse `/words` endpoint.

pub mod datamuse;
