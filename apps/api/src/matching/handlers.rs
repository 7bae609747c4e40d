//! Axum route handlers for the Matching API.

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::matching::report::Report;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub cv_text: String,
    pub job_description: String,
}

/// POST /api/analyze
///
/// Compares a CV against a job description and returns the match report.
/// Empty texts are accepted and simply produce a zero report.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<Report>, AppError> {
    let request_id = Uuid::new_v4();
    info!(
        %request_id,
        cv_text_len = request.cv_text.chars().count(),
        job_description_len = request.job_description.chars().count(),
        "Received analyze request"
    );

    // Text processing is CPU-bound; keep it off the async workers.
    let matcher = Arc::clone(&state.matcher);
    let report = tokio::task::spawn_blocking(move || {
        matcher.generate_report(&request.cv_text, &request.job_description)
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("Analysis task failed: {e}")))??;

    info!(%request_id, ?report, "Analysis completed");

    Ok(Json(report))
}
