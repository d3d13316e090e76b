use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::Value;

use crate::workflows::practice::questions::QuestionSet;
use crate::workflows::practice::session::domain::{AnswerSheet, SessionId, SessionRequest};
use crate::workflows::practice::session::generation::{GenerationError, QuestionSource};
use crate::workflows::practice::session::repository::{
    RepositoryError, SessionRecord, SessionRepository,
};
use crate::workflows::practice::session::{practice_router, PracticeSessionService};

pub(super) fn sample_request() -> SessionRequest {
    SessionRequest {
        role: "Software Engineer".to_string(),
        count: 4,
        categories: Vec::new(),
        difficulty: 3,
        language: "en".to_string(),
        resume_text: None,
        industry: None,
    }
}

pub(super) fn answer_sheet() -> AnswerSheet {
    AnswerSheet {
        answers: vec![
            "The situation was a slow release train. My approach was to automate the steps \
             and the result was a 30% faster cycle."
                .to_string(),
            String::new(),
            "The architecture uses a cache because latency matters.".to_string(),
            "I collaborated with the team to resolve the conflict and we shipped on time."
                .to_string(),
        ],
        code_answers: vec![
            String::new(),
            "// walk the list once\nfn solve() { try { } catch (e) { } }".to_string(),
            String::new(),
            String::new(),
        ],
        coding_languages: vec![
            String::new(),
            "javascript".to_string(),
            String::new(),
            String::new(),
        ],
    }
}

pub(super) fn build_service() -> (
    PracticeSessionService<MemorySessionRepository, ScriptedSource>,
    Arc<MemorySessionRepository>,
) {
    let repository = Arc::new(MemorySessionRepository::default());
    let service = PracticeSessionService::with_rng(
        repository.clone(),
        Arc::new(ScriptedSource),
        StdRng::seed_from_u64(11),
    );
    (service, repository)
}

pub(super) fn service_with_source<G: QuestionSource + 'static>(
    source: G,
) -> (
    PracticeSessionService<MemorySessionRepository, G>,
    Arc<MemorySessionRepository>,
) {
    let repository = Arc::new(MemorySessionRepository::default());
    let service = PracticeSessionService::with_rng(
        repository.clone(),
        Arc::new(source),
        StdRng::seed_from_u64(11),
    );
    (service, repository)
}

pub(super) fn practice_router_with_service(
    service: PracticeSessionService<MemorySessionRepository, ScriptedSource>,
) -> axum::Router {
    practice_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 256 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

#[derive(Default, Clone)]
pub(super) struct MemorySessionRepository {
    records: Arc<Mutex<HashMap<SessionId, SessionRecord>>>,
}

impl SessionRepository for MemorySessionRepository {
    fn insert(&self, record: SessionRecord) -> Result<SessionRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.session_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.session_id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: SessionRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        guard.insert(record.session_id.clone(), record);
        Ok(())
    }

    fn fetch(&self, id: &SessionId) -> Result<Option<SessionRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn recent(&self, limit: usize) -> Result<Vec<SessionRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.values().take(limit).cloned().collect())
    }
}

pub(super) struct ConflictRepository;

impl SessionRepository for ConflictRepository {
    fn insert(&self, _record: SessionRecord) -> Result<SessionRecord, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn update(&self, _record: SessionRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("read only".to_string()))
    }

    fn fetch(&self, _id: &SessionId) -> Result<Option<SessionRecord>, RepositoryError> {
        Ok(None)
    }

    fn recent(&self, _limit: usize) -> Result<Vec<SessionRecord>, RepositoryError> {
        Ok(Vec::new())
    }
}

pub(super) struct UnavailableRepository;

impl SessionRepository for UnavailableRepository {
    fn insert(&self, _record: SessionRecord) -> Result<SessionRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn update(&self, _record: SessionRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &SessionId) -> Result<Option<SessionRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn recent(&self, _limit: usize) -> Result<Vec<SessionRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

/// Generator that always delivers a set matching the requested count. The
/// second question is a coding prompt and the third a technical one, so
/// completion exercises every scoring branch.
pub(super) struct ScriptedSource;

impl QuestionSource for ScriptedSource {
    fn generate(&self, request: &SessionRequest) -> Result<QuestionSet, GenerationError> {
        let mut questions = Vec::new();
        let mut kinds = Vec::new();
        for index in 0..request.count {
            questions.push(format!(
                "Scripted question {index} for a {role}",
                role = request.role
            ));
            kinds.push(
                match index {
                    1 => "coding",
                    2 => "technical",
                    _ => "behavioral",
                }
                .to_string(),
            );
        }
        Ok(QuestionSet { questions, kinds })
    }

    fn feedback(
        &self,
        question: &str,
        _answer: &str,
        _language: &str,
    ) -> Result<String, GenerationError> {
        Ok(format!("Scripted feedback for: {question}"))
    }
}

/// Generator standing in for a deployment with no API key configured.
pub(super) struct MissingKeySource;

impl QuestionSource for MissingKeySource {
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

/// Generator that is configured but broken mid-flight.
pub(super) struct FailingSource;

impl QuestionSource for FailingSource {
    fn generate(&self, _request: &SessionRequest) -> Result<QuestionSet, GenerationError> {
        Err(GenerationError::Unavailable("generation offline".to_string()))
    }

    fn feedback(
        &self,
        _question: &str,
        _answer: &str,
        _language: &str,
    ) -> Result<String, GenerationError> {
        Err(GenerationError::Unavailable("generation offline".to_string()))
    }
}

/// Generator that returns fewer questions than requested.
pub(super) struct ShortSource;

impl QuestionSource for ShortSource {
    fn generate(&self, _request: &SessionRequest) -> Result<QuestionSet, GenerationError> {
        Ok(QuestionSet {
            questions: vec!["Only one question".to_string()],
            kinds: vec!["behavioral".to_string()],
        })
    }

    fn feedback(
        &self,
        _question: &str,
        _answer: &str,
        _language: &str,
    ) -> Result<String, GenerationError> {
        Err(GenerationError::Malformed("empty response".to_string()))
    }
}
