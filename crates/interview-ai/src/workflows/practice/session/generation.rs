//! Boundary to the external question-generation service.
//!
//! The service never depends on the generator succeeding: a missing API
//! key routes drawing to the role catalog, any other failure routes to the
//! interpolated fallback bank, and feedback failures fall back to a canned
//! coaching statement. Generator errors therefore never leave this module
//! as user-facing failures.

use rand::Rng;

use super::domain::SessionRequest;
use crate::workflows::practice::questions::QuestionSet;

/// Error enumeration for generation boundary failures.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("generation api key missing")]
    MissingApiKey,
    #[error("generation service unavailable: {0}")]
    Unavailable(String),
    #[error("malformed generation response: {0}")]
    Malformed(String),
}

/// Trait describing the outbound text-generation hook.
pub trait QuestionSource: Send + Sync {
    fn generate(&self, request: &SessionRequest) -> Result<QuestionSet, GenerationError>;
    fn feedback(
        &self,
        question: &str,
        answer: &str,
        language: &str,
    ) -> Result<String, GenerationError>;
}

/// Durable string preferences keyed by name, no expiry semantics.
pub trait PreferenceStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

pub const GENERATION_API_KEY: &str = "generation_api_key";
pub const PREFERRED_LANGUAGE: &str = "preferred_language";

/// Display name for a language code, used in generation prompts.
pub fn language_name(code: &str) -> &'static str {
    match code {
        "en" => "English",
        "es" => "Spanish",
        "fr" => "French",
        "de" => "German",
        "zh" => "Chinese",
        "ja" => "Japanese",
        "hi" => "Hindi",
        "ar" => "Arabic",
        "pt" => "Portuguese",
        "ru" => "Russian",
        _ => "English",
    }
}

pub(crate) const CANNED_FEEDBACK: [&str; 5] = [
    "Your answer addressed the question, but could benefit from more specific examples. Consider using the STAR method (Situation, Task, Action, Result) to structure your response more effectively.",
    "You made some good points in your answer. To strengthen it further, try quantifying your achievements with specific metrics or results where possible.",
    "Your response shows your experience, but could be more concise. Try focusing on the most relevant aspects of your experience that directly answer the question.",
    "You demonstrated good technical knowledge. To improve, consider explaining how your technical skills translated to business impact or team success.",
    "Your answer was thoughtful, but could benefit from better structure. Start with a brief overview, then provide details, and end with a concise summary of your main point.",
];

/// One of five canned coaching statements, used when the generator cannot
/// produce feedback.
pub fn canned_feedback<R: Rng>(rng: &mut R) -> String {
    CANNED_FEEDBACK[rng.gen_range(0..CANNED_FEEDBACK.len())].to_string()
}
