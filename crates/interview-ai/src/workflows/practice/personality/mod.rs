//! Keyword-driven personality profiling over a candidate's prose answers.
//!
//! Every trait starts from a neutral score of 50 and moves up with keyword
//! occurrences, capped at +40 per trait. Two text-shape bonuses apply on
//! top: long sentences lift communication, frequent first-person pronouns
//! lift confidence. Scores are clamped to 0-100 before ranking.

mod traits;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use traits::TRAIT_DEFINITIONS;

/// One scored personality trait with its canned narrative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalityTrait {
    pub name: String,
    pub score: u8,
    pub description: String,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
}

/// Ranked trait profile plus the templated summary and interview tips.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalityProfile {
    pub dominant_traits: Vec<String>,
    pub traits: Vec<PersonalityTrait>,
    pub summary: String,
    pub interview_tips: Vec<String>,
}

static TRAIT_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    TRAIT_DEFINITIONS
        .iter()
        .map(|definition| {
            let alternation = definition.keywords.join("|");
            Regex::new(&format!(r"(?i)\b({alternation})\b"))
                .expect("static trait keyword pattern compiles")
        })
        .collect()
});

static FIRST_PERSON: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bi\b|\bme\b|\bmy\b|\bmyself\b").expect("static pattern compiles"));

/// Profile a candidate from their prose answers. The answers are pooled
/// into one lowercase text before any counting, so trait scores reflect
/// the whole session rather than any single response.
pub fn analyze_personality(answers: &[String]) -> PersonalityProfile {
    let combined = answers.join(" ").to_lowercase();

    let mut scores = [50i32; TRAIT_DEFINITIONS.len()];
    for (score, pattern) in scores.iter_mut().zip(TRAIT_PATTERNS.iter()) {
        let matches = pattern.find_iter(&combined).count() as i32;
        *score += (matches * 5).min(40);
    }

    if average_sentence_chars(&combined) > 20.0 {
        scores[communication_index()] += 10;
    }

    let first_person = FIRST_PERSON.find_iter(&combined).count();
    let word_count = combined.split_whitespace().count();
    if first_person as f32 / word_count.max(1) as f32 > 0.05 {
        scores[confidence_index()] += 10;
    }

    let traits: Vec<PersonalityTrait> = TRAIT_DEFINITIONS
        .iter()
        .zip(scores.iter())
        .map(|(definition, score)| PersonalityTrait {
            name: definition.name.to_string(),
            score: (*score).clamp(0, 100) as u8,
            description: definition.description.to_string(),
            strengths: definition.strengths.iter().map(|s| s.to_string()).collect(),
            improvements: definition.improvements.iter().map(|s| s.to_string()).collect(),
        })
        .collect();

    // Stable sort keeps definition order among equal scores.
    let mut ranked = traits.clone();
    ranked.sort_by(|a, b| b.score.cmp(&a.score));

    let dominant_traits: Vec<String> = ranked.iter().take(3).map(|t| t.name.clone()).collect();
    let second_lowest = ranked[ranked.len() - 2].name.to_lowercase();
    let lowest = ranked[ranked.len() - 1].name.to_lowercase();

    let summary = format!(
        "Your responses indicate that you have particularly strong {} and {} traits. \
         You communicate in a way that demonstrates {} and {}. \
         You might benefit from developing your {} and {} skills further.",
        dominant_traits[0],
        dominant_traits[1],
        ranked[0].name.to_lowercase(),
        ranked[1].name.to_lowercase(),
        second_lowest,
        lowest,
    );

    let interview_tips = vec![
        format!(
            "Leverage your strong {} when answering questions about your work style and achievements.",
            dominant_traits[0]
        ),
        format!(
            "Be prepared to discuss situations that required {second_lowest}, as interviewers may probe this area."
        ),
        format!(
            "Use specific examples that highlight your {} when discussing past experiences.",
            dominant_traits[1]
        ),
        format!(
            "Consider how your {} might be perceived - ensure you're presenting it as a balanced strength.",
            dominant_traits[0]
        ),
        format!(
            "Prepare stories that demonstrate how you've worked to improve your {second_lowest} in professional settings."
        ),
    ];

    PersonalityProfile {
        dominant_traits,
        traits,
        summary,
        interview_tips,
    }
}

/// Mean character length of trimmed sentence segments. Zero when the text
/// has no sentences at all.
fn average_sentence_chars(text: &str) -> f32 {
    let mut total = 0usize;
    let mut count = 0usize;
    for segment in text.split(['.', '!', '?']) {
        let trimmed = segment.trim();
        if !trimmed.is_empty() {
            total += trimmed.len();
            count += 1;
        }
    }
    if count == 0 {
        return 0.0;
    }
    total as f32 / count as f32
}

fn communication_index() -> usize {
    TRAIT_DEFINITIONS
        .iter()
        .position(|definition| definition.key == "communication")
        .expect("communication trait is defined")
}

fn confidence_index() -> usize {
    TRAIT_DEFINITIONS
        .iter()
        .position(|definition| definition.key == "confidence")
        .expect("confidence trait is defined")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn neutral_answers_keep_definition_order() {
        let profile = analyze_personality(&answers(&["Yes", "No"]));
        assert_eq!(profile.traits.len(), 10);
        assert!(profile.traits.iter().all(|t| t.score == 50));
        assert_eq!(
            profile.dominant_traits,
            vec!["Analytical Thinking", "Creativity", "Detail Orientation"]
        );
    }

    #[test]
    fn keyword_matches_raise_the_matching_trait() {
        let profile = analyze_personality(&answers(&[
            "We analyze data with logical research and clear metrics",
        ]));
        let analytical = profile
            .traits
            .iter()
            .find(|t| t.name == "Analytical Thinking")
            .unwrap();
        assert_eq!(analytical.score, 75, "five keyword hits at five points each");
    }

    #[test]
    fn keyword_bonus_is_capped_at_forty() {
        let text = "analyze data logical research evaluate assessment metrics \
                    systematic objective rational analyze data";
        let profile = analyze_personality(&answers(&[text]));
        let analytical = profile
            .traits
            .iter()
            .find(|t| t.name == "Analytical Thinking")
            .unwrap();
        assert_eq!(analytical.score, 90);
    }

    #[test]
    fn long_sentences_lift_communication() {
        let profile = analyze_personality(&answers(&[
            "This sentence runs well past twenty characters without any trait keywords at all",
        ]));
        let communication = profile
            .traits
            .iter()
            .find(|t| t.name == "Communication")
            .unwrap();
        assert_eq!(communication.score, 60);
    }

    #[test]
    fn heavy_first_person_usage_lifts_confidence() {
        let profile = analyze_personality(&answers(&["I did it. I own it. My call."]));
        let confidence = profile
            .traits
            .iter()
            .find(|t| t.name == "Confidence")
            .unwrap();
        assert_eq!(confidence.score, 60);
    }

    #[test]
    fn summary_and_tips_reference_ranked_trait_names() {
        let profile = analyze_personality(&answers(&[
            "I lead the team and inspire people with a clear vision and strategy",
        ]));
        assert_eq!(profile.dominant_traits.len(), 3);
        assert_eq!(profile.interview_tips.len(), 5);
        assert!(profile.summary.contains(&profile.dominant_traits[0]));
        assert!(profile
            .interview_tips[0]
            .contains(&profile.dominant_traits[0]));
    }

    #[test]
    fn multi_word_keywords_match_across_spaces() {
        let profile = analyze_personality(&answers(&["We pitched new ideas"]));
        let creative = profile.traits.iter().find(|t| t.name == "Creativity").unwrap();
        assert_eq!(creative.score, 55);
    }
}
