use serde::{Deserialize, Serialize};

use crate::workflows::practice::personality::PersonalityProfile;
use crate::workflows::practice::scoring::{AnswerAnalysis, AnswerKind};

/// Identifier wrapper for practice sessions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub String);

/// Candidate-provided setup for a new practice session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRequest {
    pub role: String,
    #[serde(default = "default_question_count")]
    pub count: usize,
    #[serde(default)]
    pub categories: Vec<String>,
    /// Requested difficulty, 1-5. Only forwarded to the generation service.
    #[serde(default = "default_difficulty")]
    pub difficulty: u8,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default)]
    pub resume_text: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
}

fn default_question_count() -> usize {
    5
}

fn default_difficulty() -> u8 {
    3
}

fn default_language() -> String {
    "en".to_string()
}

/// Answers submitted against a session's questions, in question order.
/// Coding questions may carry their answer in `code_answers` instead of
/// `answers`; the parallel `coding_languages` entry records the language
/// the candidate wrote in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerSheet {
    #[serde(default)]
    pub answers: Vec<String>,
    #[serde(default)]
    pub code_answers: Vec<String>,
    #[serde(default)]
    pub coding_languages: Vec<String>,
}

impl AnswerSheet {
    /// The text to score for the question at `index`. Coding questions
    /// prefer the code answer and fall back to the prose answer when no
    /// code was submitted.
    pub fn content_for(&self, index: usize, kind: AnswerKind) -> &str {
        if kind == AnswerKind::Coding {
            if let Some(code) = self.code_answers.get(index) {
                if !code.trim().is_empty() {
                    return code;
                }
            }
        }
        self.answers.get(index).map(String::as_str).unwrap_or("")
    }
}

/// Aggregated results persisted once a session completes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionResults {
    /// Rounded mean of per-answer clarity over the answered questions,
    /// zero when nothing was answered.
    pub overall_score: u8,
    pub detailed_analysis: Vec<AnswerAnalysis>,
    pub personality: PersonalityProfile,
}

/// High level status tracked throughout the practice session workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    Created,
    InProgress,
    Completed,
}

impl SessionStatus {
    pub const fn label(self) -> &'static str {
        match self {
            SessionStatus::Created => "created",
            SessionStatus::InProgress => "in_progress",
            SessionStatus::Completed => "completed",
        }
    }
}
