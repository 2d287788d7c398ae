//! Remessa/retorno file handlers.

use axum::{Json, extract::State};

use crate::api::state::AppState;
use crate::domain::dto::{ApiResponse, ParseRetornoRequest, RemessaFileResponse};
use crate::domain::remessa::{RemessaBatch, RetornoFile};
use crate::domain::tracking::{OBJECT_PREFIX, parse_object_number};
use crate::error::{AppError, Result};

/// Build the remessa file for a batch.
///
/// When the batch carries no object number, a fresh tracking number is
/// generated and stamped on the records.
pub async fn build(
    State(state): State<AppState>,
    Json(batch): Json<RemessaBatch>,
) -> Result<Json<ApiResponse<RemessaFileResponse>>> {
    let (acronym, number) = match batch.object_number.as_deref() {
        Some(raw) => parse_object_number(raw)
            .ok_or_else(|| AppError::BadRequest(format!("invalid object number: {raw}")))?,
        None => (OBJECT_PREFIX.to_string(), state.tracking_service.generate()?),
    };

    let file = state.remessa_service.build(&batch, &acronym, number)?;

    Ok(Json(ApiResponse::success(file)))
}

/// Parse a retorno file into structured records.
pub async fn parse(
    State(state): State<AppState>,
    Json(request): Json<ParseRetornoRequest>,
) -> Result<Json<ApiResponse<RetornoFile>>> {
    request.validate().map_err(AppError::BadRequest)?;

    let parsed = state.remessa_service.parse(&request.content)?;

    Ok(Json(ApiResponse::success(parsed)))
}
