//! API Protocol
//!
//! Endpoint paths and the JSON bodies exchanged with clients. A successful lookup
//! is serialized straight from `LookupResult`.

use serde::{Deserialize, Serialize};

// --- API Endpoints ---

/// Lookup endpoint. `:number` is the target, parsed as a signed 64-bit integer.
pub const ENDPOINT_FIND: &str = "/api/number/:number";
/// Liveness probe. Always answers 200.
pub const ENDPOINT_HEALTH: &str = "/api/health";

/// Header carrying the per-request id.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

// --- Data Transfer Objects ---

/// Query string of the lookup endpoint.
///
/// The threshold is kept as raw text so that unparsable values can be reported
/// with the API's own error body instead of the extractor's rejection.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct FindParams {
    #[serde(rename = "thresholdPercentage")]
    pub threshold_percentage: Option<String>,
}

/// Body of every non-2xx response.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: String,
}
