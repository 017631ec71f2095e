use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use thiserror::Error;

use super::protocol::{ErrorResponse, FindParams, HealthResponse};
use crate::finder::engine::NumberFinder;
use crate::finder::error::LookupError;
use crate::finder::types::{LookupQuery, LookupResult};

/// Everything a lookup request can fail with, already classified for HTTP.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid number parameter")]
    InvalidNumber,

    #[error("Invalid thresholdPercentage parameter")]
    InvalidThreshold,

    #[error(transparent)]
    Lookup(#[from] LookupError),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidNumber | ApiError::InvalidThreshold => StatusCode::BAD_REQUEST,
            ApiError::Lookup(e) if e.is_absent() => StatusCode::NOT_FOUND,
            ApiError::Lookup(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}

/// Parses the path target and optional threshold (default 0) into a query.
pub fn parse_query(number: &str, params: &FindParams) -> Result<LookupQuery, ApiError> {
    let target: i64 = number.parse().map_err(|e| {
        tracing::error!("Invalid number parameter {:?}: {}", number, e);
        ApiError::InvalidNumber
    })?;

    let raw_threshold = params
        .threshold_percentage
        .as_deref()
        .filter(|raw| !raw.is_empty())
        .unwrap_or("0");

    let threshold_percentage: f64 = raw_threshold.parse().map_err(|e| {
        tracing::error!(
            "Invalid thresholdPercentage parameter {:?}: {}",
            raw_threshold,
            e
        );
        ApiError::InvalidThreshold
    })?;

    LookupQuery::new(target, threshold_percentage).map_err(|e| {
        tracing::error!("Rejected thresholdPercentage: {}", e);
        ApiError::InvalidThreshold
    })
}

pub async fn handle_find(
    Extension(finder): Extension<Arc<dyn NumberFinder>>,
    Path(number): Path<String>,
    Query(params): Query<FindParams>,
) -> Result<Json<LookupResult>, ApiError> {
    tracing::debug!("Received find request for {}", number);

    let query = parse_query(&number, &params)?;

    match finder.find(query.target, query.threshold_percentage) {
        Ok(result) => {
            tracing::debug!(
                number = query.target,
                threshold_percentage = query.threshold_percentage,
                index = result.index,
                value = result.value,
                is_approximate = result.is_approximate,
                "Find operation completed"
            );
            Ok(Json(result))
        }
        Err(e) => {
            tracing::debug!(
                number = query.target,
                threshold_percentage = query.threshold_percentage,
                "Find operation error: {}",
                e
            );
            Err(e.into())
        }
    }
}

pub async fn handle_health() -> (StatusCode, Json<HealthResponse>) {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "ok".to_string(),
        }),
    )
}
