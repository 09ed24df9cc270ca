use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, HeaderValue, header};
use axum::response::IntoResponse;
use tracing::info;

use nexacare_core::models::analysis::AnalysisResult;
use nexacare_export::document::render_document;
use nexacare_export::pdf::{export_pdf, report_filename};

use crate::error::ApiError;
use crate::state::AppState;

const EXPORT_FAILED: &str = "Failed to generate PDF report";

/// Print an analysis result to a downloadable PDF.
pub async fn generate_pdf(
    State(state): State<AppState>,
    Json(result): Json<AnalysisResult>,
) -> Result<impl IntoResponse, ApiError> {
    if result.report_id.is_empty() || result.analysis.is_empty() {
        return Err(ApiError::BadRequest(
            "Missing required assessment results data".to_string(),
        ));
    }

    let html = render_document(&result, &state.styles)
        .map_err(|e| ApiError::internal(EXPORT_FAILED, e.to_string()))?;

    // Chromium control is synchronous; keep it off the async workers.
    let launcher = Arc::clone(&state.launcher);
    let setup = state.page_setup.clone();
    let pdf_bytes =
        tokio::task::spawn_blocking(move || export_pdf(launcher.as_ref(), &html, &setup))
            .await
            .map_err(|e| ApiError::internal(EXPORT_FAILED, e.to_string()))?
            .map_err(|e| ApiError::internal(EXPORT_FAILED, e.to_string()))?;

    info!(report_id = %result.report_id, bytes = pdf_bytes.len(), "report exported");

    let filename = report_filename(&result.assessment_name);
    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/pdf"),
    );
    headers.insert(
        header::CONTENT_DISPOSITION,
        HeaderValue::from_str(&format!("attachment; filename=\"{filename}\""))
            .map_err(|e| ApiError::internal(EXPORT_FAILED, e.to_string()))?,
    );

    Ok((headers, pdf_bytes))
}
