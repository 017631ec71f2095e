//! Number Finder Library
//!
//! Answers "is this integer in the loaded sequence, exactly or approximately, and
//! where?" over HTTP. The binary (`main.rs`) wires these modules together.
//!
//! ## Modules
//! - **`finder`**: The lookup engine. Loads a sorted integer sequence once and serves
//!   read-only lookups: an exact binary search followed by a bounded neighbour check.
//! - **`api`**: The Axum request layer. Parses parameters, classifies failures into
//!   HTTP responses, and carries the request-id, tracing, CORS and timeout middleware.
//! - **`config`**: Environment-driven settings (port, log level, data path).

pub mod api;
pub mod config;
pub mod finder;
