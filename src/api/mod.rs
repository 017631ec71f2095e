//! HTTP API Module
//!
//! Exposes the number finder over HTTP using Axum.
//!
//! ## Responsibilities
//! - **Parameter parsing**: Turns path and query strings into a validated `LookupQuery`.
//! - **Error classification**: Malformed input becomes 400, absent values become 404.
//! - **Middleware**: Panic recovery, request ids, tracing, local-only CORS, request timeouts.
//!
//! ## Submodules
//! - **`protocol`**: Endpoint paths and Data Transfer Objects (DTOs).
//! - **`handlers`**: Axum request handlers.
//! - **`server`**: Router construction and the serve loop with graceful shutdown.

pub mod handlers;
pub mod protocol;
pub mod server;
