//! Number Finder Module
//!
//! The lookup engine: an immutable, ascending sequence of integers loaded once at
//! startup and queried read-only for the lifetime of the process.
//!
//! ## Overview
//! A lookup runs in two phases. The exact phase is a closed-interval binary search.
//! If it misses and the caller allows a positive threshold, the approximate phase
//! checks only the two neighbours of the insertion point the search ended on.
//!
//! ## Submodules
//! - **`types`**: `NumberSequence`, `LookupQuery` and `LookupResult`.
//! - **`error`**: Typed load-time and query-time failures.
//! - **`loader`**: Parses a whitespace-delimited text source into a `NumberSequence`.
//! - **`engine`**: The `NumberFinder` capability and its `SearchEngine` implementation.

pub mod engine;
pub mod error;
pub mod loader;
pub mod types;
