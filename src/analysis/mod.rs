/// Data organization utilities for the word lookup service.
///
/// This module provides basic data grouping and organization helpers.
/// Rendering and user interaction are handled elsewhere; everything in
/// here is pure computation over in-memory records.
///
/// Submodules:
/// - `groupings` — partitions flat lookup output into ordered key groups.

pub mod groupings;
