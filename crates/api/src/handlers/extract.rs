//! Handler for `POST /extract`: run the extractor without persisting.

use axum::extract::State;
use axum::Json;
use bodymap_core::extraction::Finding;
use bodymap_core::report::validate_report_text;
use serde::Deserialize;

use crate::error::AppResult;
use crate::middleware::auth::CurrentUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body carrying a free-text report.
#[derive(Debug, Deserialize)]
pub struct ReportRequest {
    #[serde(rename = "reportText", alias = "report_text")]
    pub report_text: String,
}

/// POST /api/v1/extract
pub async fn extract(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(input): Json<ReportRequest>,
) -> AppResult<Json<DataResponse<Vec<Finding>>>> {
    validate_report_text(&input.report_text)?;

    let findings = state.extractor.extract(&input.report_text);
    tracing::debug!(user_id = user.user_id, count = findings.len(), "Report extracted");

    Ok(Json(DataResponse { data: findings }))
}
