use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{AnswerSheet, SessionId, SessionRequest};
use super::generation::QuestionSource;
use super::repository::{RepositoryError, SessionRepository};
use super::service::{PracticeSessionService, SessionServiceError};
use crate::workflows::practice::scoring::{analyze_answer, AnswerKind};

/// Router builder exposing HTTP endpoints for the practice workflow.
pub fn practice_router<R, G>(service: Arc<PracticeSessionService<R, G>>) -> Router
where
    R: SessionRepository + 'static,
    G: QuestionSource + 'static,
{
    Router::new()
        .route("/api/v1/practice/sessions", post(start_handler::<R, G>))
        .route(
            "/api/v1/practice/sessions/:session_id",
            get(status_handler::<R, G>),
        )
        .route(
            "/api/v1/practice/sessions/:session_id/answers",
            post(complete_handler::<R, G>),
        )
        .route("/api/v1/practice/analysis", post(analysis_handler))
        .with_state(service)
}

pub(crate) async fn start_handler<R, G>(
    State(service): State<Arc<PracticeSessionService<R, G>>>,
    axum::Json(request): axum::Json<SessionRequest>,
) -> Response
where
    R: SessionRepository + 'static,
    G: QuestionSource + 'static,
{
    match service.start(request) {
        Ok(record) => (StatusCode::CREATED, axum::Json(record)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn status_handler<R, G>(
    State(service): State<Arc<PracticeSessionService<R, G>>>,
    Path(session_id): Path<String>,
) -> Response
where
    R: SessionRepository + 'static,
    G: QuestionSource + 'static,
{
    let id = SessionId(session_id);
    match service.get(&id) {
        Ok(record) => (StatusCode::OK, axum::Json(record)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn complete_handler<R, G>(
    State(service): State<Arc<PracticeSessionService<R, G>>>,
    Path(session_id): Path<String>,
    axum::Json(sheet): axum::Json<AnswerSheet>,
) -> Response
where
    R: SessionRepository + 'static,
    G: QuestionSource + 'static,
{
    let id = SessionId(session_id);
    match service.complete(&id, &sheet) {
        Ok(record) => (StatusCode::OK, axum::Json(record)).into_response(),
        Err(error) => error_response(error),
    }
}

/// One-off scoring request with no session attached.
#[derive(Debug, Deserialize)]
pub(crate) struct AnalysisRequest {
    pub question: String,
    pub answer: String,
    pub kind: AnswerKind,
}

pub(crate) async fn analysis_handler(
    axum::Json(request): axum::Json<AnalysisRequest>,
) -> Response {
    let analysis = analyze_answer(&request.answer, request.kind, &request.question);
    (StatusCode::OK, axum::Json(analysis)).into_response()
}

fn error_response(error: SessionServiceError) -> Response {
    let status = match &error {
        SessionServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        SessionServiceError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
        SessionServiceError::Repository(RepositoryError::Unavailable(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    let payload = json!({
        "error": error.to_string(),
    });
    (status, axum::Json(payload)).into_response()
}
