//! nexacare-server
//!
//! HTTP API for the patient portal: the assessment catalog, submission
//! analysis, cached reports, PDF export, and AI chat.

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};

pub mod cache;
pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use state::AppState;

/// Build the API router over the supplied state.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/assessments", get(routes::assessments::list_assessments))
        .route(
            "/assessments/{id}",
            get(routes::assessments::get_assessment_detail),
        )
        .route(
            "/assessments/{id}/questions",
            get(routes::assessments::get_assessment_questions),
        )
        .route(
            "/assessments/analyze",
            post(routes::analyze::analyze_assessment),
        )
        .route(
            "/assessments/generate-pdf",
            post(routes::export::generate_pdf),
        )
        .route("/reports/{report_id}", get(routes::reports::get_report))
        .route("/chat", post(routes::chat::chat_completion))
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state)
}
