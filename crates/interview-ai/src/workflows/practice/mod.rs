//! Interview practice workflow: question selection, answer scoring,
//! personality insights, and the session service that ties them together.

pub mod personality;
pub mod questions;
pub mod scoring;
pub mod session;

pub use personality::{analyze_personality, PersonalityProfile, PersonalityTrait};
pub use questions::{QuestionCategory, QuestionSet, RoleCatalog, RoleProfile};
pub use scoring::{analyze_answer, AnswerAnalysis, AnswerKind, AnswerMetrics};
pub use session::{
    AnswerSheet, PracticeSessionService, SessionId, SessionRecord, SessionRepository,
    SessionRequest, SessionResults, SessionServiceError, SessionStatus,
};
