use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{SessionId, SessionRequest, SessionResults, SessionStatus};
use crate::workflows::practice::questions::QuestionSet;

/// Repository record containing the setup, drawn questions, and results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub session_id: SessionId,
    pub setup: SessionRequest,
    pub questions: QuestionSet,
    pub status: SessionStatus,
    pub results: Option<SessionResults>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl SessionRecord {
    pub fn status_view(&self) -> SessionStatusView {
        SessionStatusView {
            session_id: self.session_id.clone(),
            status: self.status.label(),
            question_count: self.questions.len(),
            overall_score: self.results.as_ref().map(|results| results.overall_score),
        }
    }
}

/// Storage abstraction so the service module can be exercised in isolation.
pub trait SessionRepository: Send + Sync {
    fn insert(&self, record: SessionRecord) -> Result<SessionRecord, RepositoryError>;
    fn update(&self, record: SessionRecord) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &SessionId) -> Result<Option<SessionRecord>, RepositoryError>;
    fn recent(&self, limit: usize) -> Result<Vec<SessionRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Sanitized representation of a session's exposed status.
#[derive(Debug, Clone, Serialize)]
pub struct SessionStatusView {
    pub session_id: SessionId,
    pub status: &'static str,
    pub question_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overall_score: Option<u8>,
}
