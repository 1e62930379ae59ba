//! API routes for jeed
//!
//! POST /solve is the only route with logic; the rest are static
//! descriptors, the landing page and the metrics exposition.

use crate::server::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use jee_common::{ErrorKind, ResultRecord, Topic, MODEL_NAME, SERVICE_NAME};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info, warn};

type AppStateArc = Arc<AppState>;

const INDEX_HTML: &str = include_str!("../static/index.html");

/// Characters of the question shown in logs
const LOG_PREVIEW_CHARS: usize = 50;

// ============================================================================
// Solve Routes
// ============================================================================

/// Body of POST /solve
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SolveRequest {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
}

pub fn solve_routes() -> Router<AppStateArc> {
    Router::new().route("/solve", post(solve_question))
}

async fn solve_question(
    State(state): State<AppStateArc>,
    payload: Result<Json<SolveRequest>, JsonRejection>,
) -> Response {
    let start = Instant::now();

    let req = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            warn!("Malformed solve request: {}", rejection.body_text());
            state.metrics.record_failure("malformed");
            let status = match rejection.status() {
                StatusCode::PAYLOAD_TOO_LARGE => StatusCode::PAYLOAD_TOO_LARGE,
                _ => StatusCode::BAD_REQUEST,
            };
            return failure(
                status,
                format!("Invalid request body: {}", rejection.body_text()),
            );
        }
    };

    let Some(question) = req.question else {
        state.metrics.record_failure("malformed");
        return failure(StatusCode::BAD_REQUEST, "No question provided".to_string());
    };

    info!(
        "[Q]  Processing ({}): {}",
        req.subject.as_deref().unwrap_or("auto"),
        preview(&question)
    );

    let record = state.solver.solve(&question, req.subject.as_deref()).await;
    state.metrics.observe_duration(start.elapsed().as_secs_f64());

    match record.error_kind() {
        None => {
            let topic = record.topic.as_deref().unwrap_or_default();
            let subject = Topic::from_label(topic)
                .map(|t| t.subject().as_str())
                .unwrap_or("unknown");
            state.metrics.record_success(subject, topic);
            info!(
                "[A]  {} / {} in {}ms",
                subject,
                topic,
                start.elapsed().as_millis()
            );
        }
        Some(kind) => state.metrics.record_failure(kind.as_str()),
    }

    (status_for(&record), Json(record)).into_response()
}

/// HTTP status for a dispatcher outcome
fn status_for(record: &ResultRecord) -> StatusCode {
    match record.error_kind() {
        None => StatusCode::OK,
        Some(ErrorKind::Validation) => StatusCode::BAD_REQUEST,
        // Caught inside the dispatcher: reported in the body, not the status
        Some(ErrorKind::Internal) => StatusCode::OK,
    }
}

fn failure(status: StatusCode, message: String) -> Response {
    (
        status,
        Json(json!({ "success": false, "error": message })),
    )
        .into_response()
}

fn preview(question: &str) -> String {
    let mut chars = question.chars();
    let head: String = chars.by_ref().take(LOG_PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{}...", head)
    } else {
        head
    }
}

// ============================================================================
// Info Routes
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsResponse {
    pub total_subjects: usize,
    pub subjects: Vec<String>,
    pub features: Vec<String>,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub ai_model: String,
    pub uptime_seconds: u64,
    pub started_at: String,
}

pub fn info_routes() -> Router<AppStateArc> {
    Router::new()
        .route("/api/stats", get(stats))
        .route("/health", get(health_check))
}

async fn stats() -> Json<StatsResponse> {
    Json(StatsResponse {
        total_subjects: jee_common::Subject::ALL.len(),
        subjects: jee_common::Subject::ALL
            .iter()
            .map(|s| s.title().to_string())
            .collect(),
        features: [
            "Step-by-step solutions",
            "Topic identification",
            "Formula explanations",
            "JEE-specific tips",
            "Concept reviews",
        ]
        .iter()
        .map(|f| f.to_string())
        .collect(),
        status: "online".to_string(),
    })
}

async fn health_check(State(state): State<AppStateArc>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        ai_model: MODEL_NAME.to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        started_at: state.started_at.to_rfc3339(),
    })
}

// ============================================================================
// Page and Metrics Routes
// ============================================================================

pub fn page_routes() -> Router<AppStateArc> {
    Router::new().route("/", get(index))
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub fn metrics_routes() -> Router<AppStateArc> {
    Router::new().route("/metrics", get(metrics))
}

async fn metrics(State(state): State<AppStateArc>) -> Response {
    match state.metrics.export() {
        Ok(text) => (
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
            text,
        )
            .into_response(),
        Err(e) => {
            error!("Metrics export failed: {:#}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Internal server error" })),
            )
                .into_response()
        }
    }
}

/// Fallback for unknown paths
pub async fn not_found() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "Endpoint not found" })),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use jee_common::SolveError;

    #[test]
    fn test_preview_truncates_on_char_boundary() {
        let long = "é".repeat(80);
        let p = preview(&long);
        assert_eq!(p.chars().count(), LOG_PREVIEW_CHARS + 3);
        assert!(p.ends_with("..."));
        assert_eq!(preview("short"), "short");
    }

    #[test]
    fn test_internal_failure_is_reported_in_body() {
        let record = ResultRecord::failure(&SolveError::Internal("template missing".into()));
        assert_eq!(status_for(&record), StatusCode::OK);

        let body = serde_json::to_value(&record).unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["confidence"], 0.0);
        assert_eq!(body["error"], "Error processing question: template missing");
    }

    #[test]
    fn test_validation_failure_is_bad_request() {
        let record = ResultRecord::failure(&SolveError::EmptyQuestion);
        assert_eq!(status_for(&record), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_solve_request_defaults() {
        let req: SolveRequest = serde_json::from_str("{}").unwrap();
        assert!(req.question.is_none());
        assert!(req.subject.is_none());
    }
}
