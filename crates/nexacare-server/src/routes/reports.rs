use axum::Json;
use axum::extract::{Path, State};

use nexacare_core::models::analysis::AnalysisResult;

use crate::error::ApiError;
use crate::state::AppState;

/// Fetch a recent analysis result by report id. Results stay available
/// until the cache TTL runs out.
pub async fn get_report(
    State(state): State<AppState>,
    Path(report_id): Path<String>,
) -> Result<Json<AnalysisResult>, ApiError> {
    state
        .reports
        .get(&report_id)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("report not found: {report_id}")))
}
