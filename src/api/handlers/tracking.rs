//! Tracking-number handlers.

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

use crate::api::state::AppState;
use crate::domain::dto::{
    ApiResponse, TrackingNumbersResponse, TrackingVerdict, VerifyTrackingRequest,
};
use crate::error::{AppError, Result};

/// Query parameters for number generation.
#[derive(Debug, Deserialize)]
pub struct GenerateQuery {
    /// Number of tracking numbers to generate (default: 1, max: 1000).
    #[serde(default = "default_count")]
    pub count: u32,
}

const fn default_count() -> u32 {
    1
}

impl GenerateQuery {
    /// Validate the query parameters.
    fn validate(&self) -> Result<()> {
        if self.count == 0 {
            return Err(AppError::BadRequest("count must be at least 1".to_string()));
        }
        if self.count > 1000 {
            return Err(AppError::BadRequest("count cannot exceed 1000".to_string()));
        }
        Ok(())
    }
}

/// Generate tracking numbers.
pub async fn generate(
    State(state): State<AppState>,
    Query(query): Query<GenerateQuery>,
) -> Result<Json<ApiResponse<TrackingNumbersResponse>>> {
    query.validate()?;

    let numbers = state
        .tracking_service
        .generate_batch(query.count)?
        .iter()
        .map(ToString::to_string)
        .collect();

    Ok(Json(ApiResponse::success(TrackingNumbersResponse::new(
        numbers,
    ))))
}

/// Verify a tracking number's embedded check digit.
pub async fn verify(
    State(state): State<AppState>,
    Json(request): Json<VerifyTrackingRequest>,
) -> Json<ApiResponse<TrackingVerdict>> {
    let valid = state.tracking_service.verify(&request.number);

    Json(ApiResponse::success(TrackingVerdict { valid }))
}
