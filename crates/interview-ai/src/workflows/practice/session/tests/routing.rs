use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tower::ServiceExt;

use super::common::*;
use crate::workflows::practice::session::domain::SessionStatus;
use crate::workflows::practice::session::router;
use crate::workflows::practice::session::PracticeSessionService;

#[tokio::test]
async fn start_route_creates_a_session() {
    let (service, _) = build_service();
    let router = practice_router_with_service(service);

    let response = router
        .oneshot(
            axum::http::Request::post("/api/v1/practice/sessions")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(
                    serde_json::to_vec(&sample_request()).unwrap(),
                ))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::CREATED);
    let payload = read_json_body(response).await;
    assert_eq!(
        payload.get("status"),
        Some(&serde_json::json!(SessionStatus::InProgress))
    );
    assert_eq!(
        payload
            .pointer("/questions/questions")
            .and_then(|questions| questions.as_array())
            .map(|questions| questions.len()),
        Some(4)
    );
}

#[tokio::test]
async fn start_route_applies_request_defaults() {
    let (service, _) = build_service();
    let router = practice_router_with_service(service);

    let response = router
        .oneshot(
            axum::http::Request::post("/api/v1/practice/sessions")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(r#"{"role":"Product Manager"}"#))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::CREATED);
    let payload = read_json_body(response).await;
    assert_eq!(
        payload.pointer("/setup/count").and_then(|v| v.as_u64()),
        Some(5)
    );
    assert_eq!(
        payload.pointer("/setup/language").and_then(|v| v.as_str()),
        Some("en")
    );
}

#[tokio::test]
async fn status_handler_returns_not_found_for_missing_sessions() {
    let (service, _) = build_service();
    let service = Arc::new(service);

    let response = router::status_handler::<MemorySessionRepository, ScriptedSource>(
        State(service),
        axum::extract::Path("session-does-not-exist".to_string()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let payload = read_json_body(response).await;
    assert!(payload
        .get("error")
        .and_then(|error| error.as_str())
        .unwrap_or_default()
        .contains("not found"));
}

#[tokio::test]
async fn answers_route_completes_the_session() {
    let (service, _) = build_service();
    let record = service.start(sample_request()).expect("session starts");
    let router = practice_router_with_service(service);

    let uri = format!(
        "/api/v1/practice/sessions/{}/answers",
        record.session_id.0
    );
    let response = router
        .oneshot(
            axum::http::Request::post(uri)
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(
                    serde_json::to_vec(&answer_sheet()).unwrap(),
                ))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(
        payload.get("status"),
        Some(&serde_json::json!(SessionStatus::Completed))
    );
    assert!(payload
        .pointer("/results/overall_score")
        .and_then(|score| score.as_u64())
        .is_some());
    assert_eq!(
        payload
            .pointer("/results/personality/dominant_traits")
            .and_then(|traits| traits.as_array())
            .map(|traits| traits.len()),
        Some(3)
    );
}

#[tokio::test]
async fn analysis_route_scores_standalone_answers() {
    let (service, _) = build_service();
    let router = practice_router_with_service(service);

    let body = serde_json::json!({
        "question": "How does a cache work?",
        "answer": "A cache keeps hot data close because lookups dominate the workload.",
        "kind": "technical",
    });
    let response = router
        .oneshot(
            axum::http::Request::post("/api/v1/practice/analysis")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(serde_json::to_vec(&body).unwrap()))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(
        payload.pointer("/metrics/depth").and_then(|v| v.as_u64()),
        Some(80),
        "technical terms plus explanation"
    );
    assert!(payload.get("keywords").is_some());
}

#[tokio::test]
async fn start_handler_returns_internal_error_on_unavailable_repository() {
    let service = Arc::new(PracticeSessionService::with_rng(
        Arc::new(UnavailableRepository),
        Arc::new(ScriptedSource),
        StdRng::seed_from_u64(11),
    ));

    let response = router::start_handler::<UnavailableRepository, ScriptedSource>(
        State(service),
        axum::Json(sample_request()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
