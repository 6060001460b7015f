use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use tracing::debug;

use crate::errors::AppError;
use crate::models::analysis::{AnalyzeRequest, AnalyzeResponse};
use crate::state::AppState;

/// POST /analyze
///
/// Body validation is axum's `Json` extractor; a malformed body or missing
/// required field becomes a 422 before the scorer runs. Degenerate inputs
/// (empty text) are not errors and still return 200.
pub async fn handle_analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let Json(req) = payload.map_err(|e| AppError::UnprocessableEntity(e.body_text()))?;

    if let Some(meta) = &req.meta {
        debug!(
            job_title = meta.job_title.as_deref(),
            company = meta.company_name.as_deref(),
            "analyze request metadata"
        );
    }

    let result = state
        .scorer
        .analyze(&req.resume, &req.job_description, req.meta.as_ref())
        .await?;

    Ok(Json(result))
}
