//! Axum route handlers for the Planner API.

use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::advice::export::{plan_to_text, EXPORT_FILENAME};
use crate::advice::schema::AiPlan;
use crate::advice::service::{PlanOutcome, PlanRequest};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ExportRequest {
    pub month: String,
    pub plan: AiPlan,
}

/// POST /api/v1/planner/generate
///
/// Always answers 200 with a plan. Generator problems come back as sentinel
/// plans with `status` set to `unconfigured` or `failed`.
pub async fn handle_generate_plan(
    State(state): State<AppState>,
    Json(request): Json<PlanRequest>,
) -> Result<Json<PlanOutcome>, AppError> {
    if request.month.trim().is_empty() {
        return Err(AppError::Validation("month cannot be empty".to_string()));
    }

    Ok(Json(state.advice.generate_plan(&request).await))
}

/// POST /api/v1/planner/export
///
/// Renders a plan as a plain-text attachment.
pub async fn handle_export_plan(Json(request): Json<ExportRequest>) -> impl IntoResponse {
    let body = plan_to_text(&request.month, &request.plan);
    (
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{EXPORT_FILENAME}\""),
            ),
        ],
        body,
    )
}
