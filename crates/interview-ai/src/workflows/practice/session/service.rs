use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::warn;

use super::domain::{AnswerSheet, SessionId, SessionRequest, SessionResults, SessionStatus};
use super::generation::{self, GenerationError, QuestionSource};
use super::repository::{RepositoryError, SessionRecord, SessionRepository};
use crate::workflows::practice::personality::analyze_personality;
use crate::workflows::practice::questions::{self, QuestionSet};
use crate::workflows::practice::scoring::{analyze_answer, AnswerKind};

/// Service composing the repository, the question source, and the local
/// scoring heuristics.
pub struct PracticeSessionService<R, G> {
    repository: Arc<R>,
    source: Arc<G>,
    rng: Mutex<StdRng>,
}

static SESSION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_session_id() -> SessionId {
    let id = SESSION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    SessionId(format!("session-{id:06}"))
}

impl<R, G> PracticeSessionService<R, G>
where
    R: SessionRepository + 'static,
    G: QuestionSource + 'static,
{
    pub fn new(repository: Arc<R>, source: Arc<G>) -> Self {
        Self::with_rng(repository, source, StdRng::from_entropy())
    }

    /// Seedable constructor so draws can be pinned in tests and demos.
    pub fn with_rng(repository: Arc<R>, source: Arc<G>, rng: StdRng) -> Self {
        Self {
            repository,
            source,
            rng: Mutex::new(rng),
        }
    }

    /// Start a new session: persist the setup, attach questions from the
    /// generator or the local banks, and move the record in progress.
    pub fn start(&self, request: SessionRequest) -> Result<SessionRecord, SessionServiceError> {
        let record = SessionRecord {
            session_id: next_session_id(),
            setup: request,
            questions: QuestionSet::default(),
            status: SessionStatus::Created,
            results: None,
            completed_at: None,
        };

        let mut stored = self.repository.insert(record)?;
        stored.questions = self.draw_questions(&stored.setup);
        stored.status = SessionStatus::InProgress;
        self.repository.update(stored.clone())?;

        Ok(stored)
    }

    /// Score a submitted answer sheet and persist the completed results.
    pub fn complete(
        &self,
        session_id: &SessionId,
        sheet: &AnswerSheet,
    ) -> Result<SessionRecord, SessionServiceError> {
        let mut record = self
            .repository
            .fetch(session_id)?
            .ok_or(RepositoryError::NotFound)?;

        let mut detailed_analysis = Vec::new();
        let mut prose_answers = Vec::new();

        for (index, (question, category)) in record
            .questions
            .questions
            .iter()
            .zip(record.questions.kinds.iter())
            .enumerate()
        {
            let kind = AnswerKind::from_category(category);
            let content = sheet.content_for(index, kind);
            if content.trim().is_empty() {
                continue;
            }
            if kind != AnswerKind::Coding {
                prose_answers.push(content.to_string());
            }
            detailed_analysis.push(analyze_answer(content, kind, question));
        }

        let overall_score = if detailed_analysis.is_empty() {
            0
        } else {
            let total: u32 = detailed_analysis
                .iter()
                .map(|analysis| u32::from(analysis.metrics.clarity))
                .sum();
            (total as f32 / detailed_analysis.len() as f32).round() as u8
        };

        record.results = Some(SessionResults {
            overall_score,
            detailed_analysis,
            personality: analyze_personality(&prose_answers),
        });
        record.status = SessionStatus::Completed;
        record.completed_at = Some(Utc::now());

        self.repository.update(record.clone())?;

        Ok(record)
    }

    /// Fetch a session and current status for API responses.
    pub fn get(&self, session_id: &SessionId) -> Result<SessionRecord, SessionServiceError> {
        let record = self
            .repository
            .fetch(session_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    /// Per-answer coaching text. Generator failures fall back to a canned
    /// statement, never to an error.
    pub fn feedback(&self, question: &str, answer: &str, language: &str) -> String {
        match self.source.feedback(question, answer, language) {
            Ok(text) => text,
            Err(error) => {
                warn!(%error, "feedback generation failed, using canned feedback");
                let mut rng = self.rng.lock().expect("rng mutex poisoned");
                generation::canned_feedback(&mut *rng)
            }
        }
    }

    /// Generated questions when the source delivers a usable set, the role
    /// catalog when no generator is configured, the interpolated fallback
    /// bank when generation breaks mid-flight.
    fn draw_questions(&self, request: &SessionRequest) -> QuestionSet {
        let mut rng = self.rng.lock().expect("rng mutex poisoned");
        match self.source.generate(request) {
            Ok(set) if set.is_consistent() && set.len() == request.count => set,
            Ok(set) => {
                warn!(
                    expected = request.count,
                    received = set.len(),
                    "generated question set rejected, drawing from catalog"
                );
                questions::select_questions(&request.role, request.count, &request.categories, &mut *rng)
            }
            Err(GenerationError::MissingApiKey) => {
                questions::select_questions(&request.role, request.count, &request.categories, &mut *rng)
            }
            Err(error) => {
                warn!(%error, "question generation failed, using fallback bank");
                questions::fallback_questions(&request.role, request.count, &request.categories, &mut *rng)
            }
        }
    }
}

/// Error raised by the session service.
#[derive(Debug, thiserror::Error)]
pub enum SessionServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
