/// Word lookup service library.
///
/// Queries the Datamuse word-association API for rhymes, similar-meaning
/// words, and related lookups, organizes the results with deterministic
/// grouping, and renders them as text lists. The binary in `main.rs` wires
/// these modules together; everything here is usable (and tested) on its
/// own.

pub mod analysis;
pub mod config;
pub mod dev_mode;
pub mod ingest;
pub mod logging;
pub mod model;
pub mod relations;
pub mod render;
pub mod saved;
pub mod verify;
