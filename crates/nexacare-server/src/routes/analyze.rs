use axum::Json;
use axum::extract::State;
use jiff::Timestamp;
use tracing::info;

use nexacare_bedrock::context::build_submission_block;
use nexacare_catalog::AssessmentKind;
use nexacare_catalog::prompts::analysis_prompt;
use nexacare_core::models::analysis::{AnalysisResult, ReportStatus};
use nexacare_core::models::submission::SubmissionPayload;
use nexacare_core::report_id;

use crate::error::ApiError;
use crate::state::AppState;

/// Run a submitted assessment through the analysis engine and cache the
/// resulting report.
pub async fn analyze_assessment(
    State(state): State<AppState>,
    Json(payload): Json<SubmissionPayload>,
) -> Result<Json<AnalysisResult>, ApiError> {
    if payload.assessment_name.is_empty()
        || payload.assessment_id.is_empty()
        || payload.answers.is_empty()
    {
        return Err(ApiError::BadRequest(
            "Missing required assessment data".to_string(),
        ));
    }

    // Unknown ids fall back to the base prompt rather than failing; the
    // catalog's known kinds get a specialized focus section.
    let kind = AssessmentKind::from_id(&payload.assessment_id);
    let system_prompt = analysis_prompt(&payload.assessment_name, kind);
    let submission_block = build_submission_block(&payload);

    let analysis = state
        .engine
        .generate(&system_prompt, &submission_block)
        .await
        .map_err(|e| ApiError::internal("Failed to analyze assessment", e.to_string()))?;

    let result = AnalysisResult {
        report_id: report_id::generate(&payload.assessment_id, Timestamp::now()),
        assessment_id: payload.assessment_id,
        assessment_name: payload.assessment_name,
        user_info: payload.user_info,
        timestamp: payload.timestamp,
        analysis,
        raw_answers: payload.answers,
        status: ReportStatus::Completed,
    };

    state.reports.insert(result.clone()).await;
    info!(report_id = %result.report_id, "assessment analyzed");

    Ok(Json(result))
}
