//! Integration specifications for the practice session workflow.
//!
//! Scenarios cover end-to-end behavior through the public service facade
//! and HTTP router: starting a session without a generator, submitting
//! answers, and reading results back over the wire.

mod common {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use interview_ai::workflows::practice::questions::QuestionSet;
    use interview_ai::workflows::practice::session::generation::{
        GenerationError, QuestionSource,
    };
    use interview_ai::workflows::practice::session::{
        AnswerSheet, PracticeSessionService, RepositoryError, SessionId, SessionRecord,
        SessionRepository, SessionRequest,
    };

    #[derive(Default, Clone)]
    pub(super) struct MemoryRepository {
        records: Arc<Mutex<HashMap<SessionId, SessionRecord>>>,
    }

    impl SessionRepository for MemoryRepository {
        fn insert(&self, record: SessionRecord) -> Result<SessionRecord, RepositoryError> {
            let mut guard = self.records.lock().expect("lock");
            if guard.contains_key(&record.session_id) {
                return Err(RepositoryError::Conflict);
            }
            guard.insert(record.session_id.clone(), record.clone());
            Ok(record)
        }

        fn update(&self, record: SessionRecord) -> Result<(), RepositoryError> {
            let mut guard = self.records.lock().expect("lock");
            guard.insert(record.session_id.clone(), record);
            Ok(())
        }

        fn fetch(&self, id: &SessionId) -> Result<Option<SessionRecord>, RepositoryError> {
            let guard = self.records.lock().expect("lock");
            Ok(guard.get(id).cloned())
        }

        fn recent(&self, limit: usize) -> Result<Vec<SessionRecord>, RepositoryError> {
            let guard = self.records.lock().expect("lock");
            Ok(guard.values().take(limit).cloned().collect())
        }
    }

    /// Stands in for a deployment with no generation key configured, so
    /// every draw comes from the local role catalog.
    pub(super) struct OfflineSource;

    impl QuestionSource for OfflineSource {
        fn generate(&self, _request: &SessionRequest) -> Result<QuestionSet, GenerationError> {
            Err(GenerationError::MissingApiKey)
        }

        fn feedback(
            &self,
            _question: &str,
            _answer: &str,
            _language: &str,
        ) -> Result<String, GenerationError> {
            Err(GenerationError::MissingApiKey)
        }
    }

    pub(super) fn build_service() -> (
        PracticeSessionService<MemoryRepository, OfflineSource>,
        Arc<MemoryRepository>,
    ) {
        let repository = Arc::new(MemoryRepository::default());
        let service = PracticeSessionService::with_rng(
            repository.clone(),
            Arc::new(OfflineSource),
            StdRng::seed_from_u64(42),
        );
        (service, repository)
    }

    pub(super) fn request(role: &str, count: usize) -> SessionRequest {
        SessionRequest {
            role: role.to_string(),
            count,
            categories: Vec::new(),
            difficulty: 3,
            language: "en".to_string(),
            resume_text: None,
            industry: None,
        }
    }

    pub(super) fn star_answers(count: usize) -> AnswerSheet {
        AnswerSheet {
            answers: (0..count)
                .map(|_| {
                    "The situation was a stalled migration. My approach was to split the \
                     work and I implemented nightly checkpoints. The result was that we \
                     finished early and error rates decreased by 25%."
                        .to_string()
                })
                .collect(),
            code_answers: vec![String::new(); count],
            coding_languages: vec![String::new(); count],
        }
    }

    pub(super) async fn read_json_body(response: axum::response::Response) -> serde_json::Value {
        let body = axum::body::to_bytes(response.into_body(), 256 * 1024)
            .await
            .expect("read body");
        serde_json::from_slice(&body).expect("json payload")
    }
}

mod service {
    use super::common::*;
    use interview_ai::workflows::practice::session::{SessionRepository, SessionStatus};

    #[test]
    fn full_session_lifecycle_produces_results() {
        let (service, repository) = build_service();

        let record = service
            .start(request("Software Engineer", 5))
            .expect("session starts");
        assert_eq!(record.status, SessionStatus::InProgress);
        assert_eq!(record.questions.len(), 5);
        assert!(record.questions.is_consistent());

        let completed = service
            .complete(&record.session_id, &star_answers(5))
            .expect("completion succeeds");

        assert_eq!(completed.status, SessionStatus::Completed);
        assert!(completed.completed_at.is_some());

        let results = completed.results.expect("results present");
        assert_eq!(results.detailed_analysis.len(), 5);
        assert!(results.overall_score > 0);
        assert_eq!(results.personality.dominant_traits.len(), 3);
        assert_eq!(results.personality.interview_tips.len(), 5);

        let stored = repository
            .fetch(&record.session_id)
            .expect("fetch succeeds")
            .expect("record present");
        assert_eq!(stored.status, SessionStatus::Completed);
    }

    #[test]
    fn every_answer_carries_the_clarity_invariant() {
        let (service, _) = build_service();
        let record = service
            .start(request("Product Manager", 4))
            .expect("session starts");
        let results = service
            .complete(&record.session_id, &star_answers(4))
            .expect("completion succeeds")
            .results
            .expect("results present");

        for analysis in &results.detailed_analysis {
            let expected = ((u32::from(analysis.metrics.structure)
                + u32::from(analysis.metrics.depth)
                + u32::from(analysis.metrics.relevance)) as f32
                / 3.0)
                .round() as u8;
            assert_eq!(analysis.metrics.clarity, expected);
        }
    }
}

mod routing {
    use std::sync::Arc;

    use axum::http::StatusCode;
    use tower::ServiceExt;

    use super::common::*;
    use interview_ai::workflows::practice::session::practice_router;

    #[tokio::test]
    async fn session_routes_cover_the_full_workflow() {
        let (service, _) = build_service();
        let router = practice_router(Arc::new(service));

        let start = router
            .clone()
            .oneshot(
                axum::http::Request::post("/api/v1/practice/sessions")
                    .header(axum::http::header::CONTENT_TYPE, "application/json")
                    .body(axum::body::Body::from(
                        serde_json::to_vec(&request("UX Designer", 3)).unwrap(),
                    ))
                    .unwrap(),
            )
            .await
            .expect("route executes");
        assert_eq!(start.status(), StatusCode::CREATED);

        let payload = read_json_body(start).await;
        let session_id = payload
            .pointer("/session_id")
            .and_then(|id| id.as_str())
            .expect("session id present")
            .to_string();

        let status = router
            .clone()
            .oneshot(
                axum::http::Request::get(format!("/api/v1/practice/sessions/{session_id}"))
                    .body(axum::body::Body::empty())
                    .unwrap(),
            )
            .await
            .expect("route executes");
        assert_eq!(status.status(), StatusCode::OK);

        let complete = router
            .oneshot(
                axum::http::Request::post(format!(
                    "/api/v1/practice/sessions/{session_id}/answers"
                ))
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(
                    serde_json::to_vec(&star_answers(3)).unwrap(),
                ))
                .unwrap(),
            )
            .await
            .expect("route executes");
        assert_eq!(complete.status(), StatusCode::OK);

        let payload = read_json_body(complete).await;
        assert!(payload
            .pointer("/results/overall_score")
            .and_then(|score| score.as_u64())
            .is_some());
    }

    #[tokio::test]
    async fn missing_sessions_map_to_not_found() {
        let (service, _) = build_service();
        let router = practice_router(Arc::new(service));

        let response = router
            .oneshot(
                axum::http::Request::get("/api/v1/practice/sessions/session-999999")
                    .body(axum::body::Body::empty())
                    .unwrap(),
            )
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
