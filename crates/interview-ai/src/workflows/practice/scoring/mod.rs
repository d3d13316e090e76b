//! Rule-based answer scoring.
//!
//! [`analyze_answer`] is a pure function over the answer text, the question
//! kind, and the originating question: regex signal checks drive the
//! structure/depth ladders, token overlap drives relevance, and the clarity
//! metric is always the rounded mean of structure, depth, and relevance.

mod keywords;
mod rules;
mod signals;

use serde::{Deserialize, Serialize};

/// Question kind driving the signal table applied to an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnswerKind {
    Behavioral,
    Technical,
    Coding,
}

impl AnswerKind {
    pub const fn label(self) -> &'static str {
        match self {
            AnswerKind::Behavioral => "behavioral",
            AnswerKind::Technical => "technical",
            AnswerKind::Coding => "coding",
        }
    }

    /// Map a drawn category name onto a scoring kind. Prose categories such
    /// as case studies or leadership score with the behavioral rules.
    pub fn from_category(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "coding" => AnswerKind::Coding,
            "technical" => AnswerKind::Technical,
            _ => AnswerKind::Behavioral,
        }
    }
}

/// Heuristic metrics derived from a single answer. All fields are always
/// present regardless of the question kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerMetrics {
    pub word_count: usize,
    pub sentence_count: usize,
    pub avg_sentence_length: f32,
    pub clarity: u8,
    pub relevance: u8,
    pub structure: u8,
    pub depth: u8,
}

/// Full scoring output for one answered question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerAnalysis {
    pub question: String,
    pub kind: AnswerKind,
    pub metrics: AnswerMetrics,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub keywords: Vec<String>,
}

/// Score a single answer. Never fails: empty content flows through the
/// normal rules with zero word and sentence counts and lands on the floor
/// branches with improvement notes only.
pub fn analyze_answer(content: &str, kind: AnswerKind, question: &str) -> AnswerAnalysis {
    let word_count = content.split_whitespace().count();
    let sentence_count = sentence_segments(content).count();
    let avg_sentence_length = word_count as f32 / sentence_count.max(1) as f32;

    let mut metrics = AnswerMetrics {
        word_count,
        sentence_count,
        avg_sentence_length,
        clarity: 0,
        relevance: 0,
        structure: 0,
        depth: 0,
    };
    let mut strengths = Vec::new();
    let mut improvements = Vec::new();

    match kind {
        AnswerKind::Behavioral => rules::score_behavioral(
            content,
            word_count,
            &mut metrics,
            &mut strengths,
            &mut improvements,
        ),
        AnswerKind::Technical => rules::score_technical(
            content,
            avg_sentence_length,
            &mut metrics,
            &mut strengths,
            &mut improvements,
        ),
        AnswerKind::Coding => {
            rules::score_coding(content, &mut metrics, &mut strengths, &mut improvements)
        }
    }

    metrics.relevance = keywords::relevance(question, content);
    let keywords = keywords::top_keywords(content, 5);

    // Aggregate invariant: clarity is the rounded mean of the other three.
    metrics.clarity = ((u32::from(metrics.structure)
        + u32::from(metrics.depth)
        + u32::from(metrics.relevance)) as f32
        / 3.0)
        .round() as u8;

    AnswerAnalysis {
        question: question.to_string(),
        kind,
        metrics,
        strengths,
        improvements,
        keywords,
    }
}

pub(crate) fn sentence_segments(text: &str) -> impl Iterator<Item = &str> {
    text.split(['.', '!', '?'])
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
}
