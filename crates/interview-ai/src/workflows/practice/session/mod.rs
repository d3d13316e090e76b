//! Practice session orchestration: the service that ties question
//! selection, answer scoring, and personality insights into a persisted
//! interview session, plus the HTTP surface over it.

pub mod domain;
pub mod generation;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{AnswerSheet, SessionId, SessionRequest, SessionResults, SessionStatus};
pub use generation::{GenerationError, PreferenceStore, QuestionSource};
pub use repository::{RepositoryError, SessionRecord, SessionRepository, SessionStatusView};
pub use router::practice_router;
pub use service::{PracticeSessionService, SessionServiceError};
