//! End-to-end route tests against an in-memory router with scripted
//! engine and browser implementations.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use nexacare_bedrock::chat::{ChatMessage, ChatRole};
use nexacare_bedrock::engine::AnalysisEngine;
use nexacare_bedrock::error::BedrockError;
use nexacare_export::error::ExportError;
use nexacare_export::pdf::{BrowserLauncher, PageSetup, ReportBrowser};
use nexacare_export::styles::DocumentStyles;
use nexacare_server::cache::ReportCache;
use nexacare_server::state::AppState;

// ── Scripted backends ────────────────────────────────────────────────────────

struct ScriptedEngine {
    fail: bool,
}

#[async_trait]
impl AnalysisEngine for ScriptedEngine {
    async fn generate(
        &self,
        system_prompt: &str,
        user_message: &str,
    ) -> Result<String, BedrockError> {
        if self.fail {
            return Err(BedrockError::Invocation("throttled".to_string()));
        }
        assert!(system_prompt.contains("personalized health report"));
        assert!(user_message.starts_with("Assessment Data for Analysis:"));
        Ok("## Assessment Summary\n\nSleep falls short of the recommended range.".to_string())
    }

    async fn chat(
        &self,
        messages: &[ChatMessage],
        max_tokens: i32,
        temperature: f32,
    ) -> Result<String, BedrockError> {
        if self.fail {
            return Err(BedrockError::Invocation("throttled".to_string()));
        }
        let system: String = messages
            .iter()
            .find(|m| m.role == ChatRole::System)
            .map(|m| m.content.chars().take(18).collect())
            .unwrap_or_default();
        Ok(format!(
            "[{system}] turns={} max_tokens={max_tokens} temperature={temperature}",
            messages.len()
        ))
    }
}

struct ScriptedBrowser {
    closes: Arc<AtomicUsize>,
    fail_print: bool,
}

impl ReportBrowser for ScriptedBrowser {
    fn print_to_pdf(&mut self, html: &str, _setup: &PageSetup) -> Result<Vec<u8>, ExportError> {
        assert!(html.contains("<html"));
        if self.fail_print {
            return Err(ExportError::Pdf("tab crashed".to_string()));
        }
        Ok(b"%PDF-1.4 scripted".to_vec())
    }

    fn close(&mut self) -> Result<(), ExportError> {
        self.closes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

struct ScriptedLauncher {
    closes: Arc<AtomicUsize>,
    fail_print: bool,
}

impl BrowserLauncher for ScriptedLauncher {
    fn launch(&self) -> Result<Box<dyn ReportBrowser>, ExportError> {
        Ok(Box::new(ScriptedBrowser {
            closes: Arc::clone(&self.closes),
            fail_print: self.fail_print,
        }))
    }
}

// ── Harness ──────────────────────────────────────────────────────────────────

fn test_state(engine_fails: bool, print_fails: bool) -> (AppState, Arc<AtomicUsize>) {
    let closes = Arc::new(AtomicUsize::new(0));
    let state = AppState {
        engine: Arc::new(ScriptedEngine { fail: engine_fails }),
        launcher: Arc::new(ScriptedLauncher {
            closes: Arc::clone(&closes),
            fail_print: print_fails,
        }),
        styles: DocumentStyles::default(),
        page_setup: PageSetup::default(),
        reports: ReportCache::new(Duration::from_secs(1800)),
    };
    (state, closes)
}

fn app(state: &AppState) -> Router {
    nexacare_server::router(state.clone())
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn response_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn sleep_submission() -> Value {
    json!({
        "assessment_name": "Sleep Health",
        "assessment_id": "sleep_health",
        "user_info": {
            "Full Name": "Jane Roe",
            "Age": 40,
            "Gender": "Female",
            "Phone Number": "+1 555 0100",
            "Email Address": "jane@example.com",
            "Place of Residence": "Austin"
        },
        "answers": [
            {
                "question_id": 7,
                "question": "Hours of sleep?",
                "answer": "6",
                "weight": 1
            }
        ],
        "timestamp": "2024-01-01T00:00:00Z"
    })
}

fn completed_report() -> Value {
    json!({
        "report_id": "sleep_health_1746100800000_a1b2c3d4e",
        "assessment_id": "sleep_health",
        "assessment_name": "Sleep Health Check",
        "user_info": { "Full Name": "Jane Roe", "Age": 40 },
        "timestamp": "2024-01-01T00:00:00Z",
        "analysis": "## Assessment Summary\n\nAll quiet.",
        "raw_answers": [],
        "status": "completed"
    })
}

// ── Health and catalog ───────────────────────────────────────────────────────

#[tokio::test]
async fn health_reports_ok() {
    let (state, _) = test_state(false, false);
    let response = app(&state).oneshot(get("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response_json(response).await, json!({ "status": "ok" }));
}

#[tokio::test]
async fn catalog_lists_every_assessment_in_order() {
    let (state, _) = test_state(false, false);
    let response = app(&state).oneshot(get("/assessments")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let listing = response_json(response).await;
    let ids: Vec<&str> = listing
        .as_array()
        .unwrap()
        .iter()
        .map(|summary| summary["assessment_id"].as_str().unwrap())
        .collect();
    assert_eq!(
        ids,
        [
            "symptom_checker",
            "mental_health",
            "cardio_health",
            "diabetes_risk",
            "sleep_health"
        ]
    );
    for summary in listing.as_array().unwrap() {
        assert_eq!(summary["question_count"], 25);
        assert!(!summary["description"].as_str().unwrap().is_empty());
    }
}

#[tokio::test]
async fn assessment_detail_includes_its_questions() {
    let (state, _) = test_state(false, false);
    let response = app(&state)
        .oneshot(get("/assessments/sleep_health"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let detail = response_json(response).await;
    assert_eq!(detail["name"], "Sleep Health Check");
    assert_eq!(detail["questions"].as_array().unwrap().len(), 25);
    assert_eq!(detail["questions"][0]["id"], 7);
}

#[tokio::test]
async fn unknown_assessment_is_a_404() {
    let (state, _) = test_state(false, false);
    let response = app(&state)
        .oneshot(get("/assessments/phrenology"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = response_json(response).await;
    assert_eq!(body["error"], "assessment not found: phrenology");
}

#[tokio::test]
async fn question_walk_prepends_the_intake_block() {
    let (state, _) = test_state(false, false);
    let response = app(&state)
        .oneshot(get("/assessments/sleep_health/questions"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let questions = response_json(response).await;
    let questions = questions.as_array().unwrap();
    assert_eq!(questions.len(), 31);
    assert_eq!(questions[0]["id"], 1);
    assert_eq!(questions[0]["question"], "What is your full name?");
    assert_eq!(questions[6]["id"], 7);
    assert!(questions[6]["type"].is_string());
}

// ── Analysis ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn analysis_round_trip_caches_the_report() {
    let (state, _) = test_state(false, false);
    let response = app(&state)
        .oneshot(post_json("/assessments/analyze", &sleep_submission()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let result = response_json(response).await;
    assert_eq!(result["status"], "completed");
    assert_eq!(result["assessment_id"], "sleep_health");
    assert_eq!(result["assessment_name"], "Sleep Health");
    // The submission timestamp is echoed, not replaced.
    assert_eq!(result["timestamp"], "2024-01-01T00:00:00Z");
    assert_eq!(result["user_info"]["Full Name"], "Jane Roe");
    assert_eq!(result["user_info"]["Place of Residence"], "Austin");
    assert_eq!(result["raw_answers"][0]["question_id"], 7);
    assert!(
        result["analysis"]
            .as_str()
            .unwrap()
            .contains("Assessment Summary")
    );

    let report_id = result["report_id"].as_str().unwrap();
    assert!(report_id.starts_with("sleep_health_"));

    let fetched = app(&state)
        .oneshot(get(&format!("/reports/{report_id}")))
        .await
        .unwrap();
    assert_eq!(fetched.status(), StatusCode::OK);
    assert_eq!(response_json(fetched).await["report_id"], report_id);
}

#[tokio::test]
async fn unknown_report_is_a_404() {
    let (state, _) = test_state(false, false);
    let response = app(&state)
        .oneshot(get("/reports/sleep_health_0_missing"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = response_json(response).await;
    assert_eq!(body["error"], "report not found: sleep_health_0_missing");
}

#[tokio::test]
async fn expired_reports_fall_out_of_the_cache() {
    let (mut state, _) = test_state(false, false);
    state.reports = ReportCache::new(Duration::ZERO);

    let response = app(&state)
        .oneshot(post_json("/assessments/analyze", &sleep_submission()))
        .await
        .unwrap();
    let report_id = response_json(response).await["report_id"]
        .as_str()
        .unwrap()
        .to_string();

    let fetched = app(&state)
        .oneshot(get(&format!("/reports/{report_id}")))
        .await
        .unwrap();
    assert_eq!(fetched.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn analysis_without_answers_is_rejected() {
    let (state, _) = test_state(false, false);
    let mut submission = sleep_submission();
    submission["answers"] = json!([]);

    let response = app(&state)
        .oneshot(post_json("/assessments/analyze", &submission))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["error"], "Missing required assessment data");
}

#[tokio::test]
async fn analysis_without_a_name_is_rejected() {
    let (state, _) = test_state(false, false);
    let mut submission = sleep_submission();
    submission.as_object_mut().unwrap().remove("assessment_name");

    let response = app(&state)
        .oneshot(post_json("/assessments/analyze", &submission))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["error"], "Missing required assessment data");
}

#[tokio::test]
async fn engine_failure_returns_an_opaque_500() {
    let (state, _) = test_state(true, false);
    let response = app(&state)
        .oneshot(post_json("/assessments/analyze", &sleep_submission()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = response_json(response).await;
    assert_eq!(body["error"], "Failed to analyze assessment");
}

// ── PDF export ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn pdf_export_prints_and_closes_the_browser() {
    let (state, closes) = test_state(false, false);
    let response = app(&state)
        .oneshot(post_json("/assessments/generate-pdf", &completed_report()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("content-type").unwrap(),
        "application/pdf"
    );
    assert_eq!(
        response.headers().get("content-disposition").unwrap(),
        "attachment; filename=\"Sleep_Health_Check_Report.pdf\""
    );
    let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    assert!(bytes.starts_with(b"%PDF"));
    assert_eq!(closes.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn pdf_export_without_results_is_rejected() {
    let (state, closes) = test_state(false, false);
    let response = app(&state)
        .oneshot(post_json(
            "/assessments/generate-pdf",
            &json!({ "report_id": "", "analysis": "x" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["error"], "Missing required assessment results data");
    assert_eq!(closes.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn pdf_export_without_analysis_is_rejected() {
    let (state, _) = test_state(false, false);
    let mut report = completed_report();
    report["analysis"] = json!("");

    let response = app(&state)
        .oneshot(post_json("/assessments/generate-pdf", &report))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["error"], "Missing required assessment results data");
}

#[tokio::test]
async fn print_failure_closes_the_browser_and_500s() {
    let (state, closes) = test_state(false, true);
    let response = app(&state)
        .oneshot(post_json("/assessments/generate-pdf", &completed_report()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = response_json(response).await;
    assert_eq!(body["error"], "Failed to generate PDF report");
    assert_eq!(closes.load(Ordering::SeqCst), 1);
}

// ── Chat ─────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn chat_requires_at_least_one_message() {
    let (state, _) = test_state(false, false);
    let response = app(&state)
        .oneshot(post_json("/chat", &json!({ "messages": [] })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["error"], "Missing chat messages");
}

#[tokio::test]
async fn chat_injects_the_context_system_prompt() {
    let (state, _) = test_state(false, false);
    let response = app(&state)
        .oneshot(post_json(
            "/chat",
            &json!({
                "messages": [{ "role": "user", "content": "How much sleep do I need?" }]
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let reply = response_json(response).await["reply"]
        .as_str()
        .unwrap()
        .to_string();
    assert!(reply.starts_with("[You are Mediva AI"));
    assert!(reply.contains("turns=2"));
    assert!(reply.contains("max_tokens=1000"));
    assert!(reply.contains("temperature=0.7"));
}

#[tokio::test]
async fn explicit_system_message_wins_over_the_context() {
    let (state, _) = test_state(false, false);
    let response = app(&state)
        .oneshot(post_json(
            "/chat",
            &json!({
                "messages": [
                    { "role": "system", "content": "Answer in haiku." },
                    { "role": "user", "content": "Hello" }
                ],
                "context": "medication_guide",
                "max_tokens": 256,
                "temperature": 0.1
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let reply = response_json(response).await["reply"]
        .as_str()
        .unwrap()
        .to_string();
    assert!(reply.starts_with("[Answer in haiku."));
    assert!(reply.contains("turns=2"));
    assert!(reply.contains("max_tokens=256"));
    assert!(reply.contains("temperature=0.1"));
}

#[tokio::test]
async fn chat_failure_returns_an_opaque_500() {
    let (state, _) = test_state(true, false);
    let response = app(&state)
        .oneshot(post_json(
            "/chat",
            &json!({ "messages": [{ "role": "user", "content": "Hi" }] }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = response_json(response).await;
    assert_eq!(body["error"], "Failed to generate chat response");
}
