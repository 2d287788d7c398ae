//! Document validation handlers.

use axum::{Json, extract::State};

use crate::api::state::AppState;
use crate::domain::dto::{ApiResponse, DocumentVerdict, ValidateDocumentRequest};

/// Validate a CPF/CNPJ document.
///
/// Always answers 200: an invalid document is a `valid: false` verdict,
/// not a request error.
pub async fn validate(
    State(state): State<AppState>,
    Json(request): Json<ValidateDocumentRequest>,
) -> Json<ApiResponse<DocumentVerdict>> {
    let verdict = state.document_service.validate(&request.document);

    Json(ApiResponse::success(verdict))
}
