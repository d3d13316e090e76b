//! Per-kind scoring ladders and the deterministic feedback statements tied
//! to each signal branch.

use super::signals;
use super::AnswerMetrics;

pub(super) fn score_behavioral(
    content: &str,
    word_count: usize,
    metrics: &mut AnswerMetrics,
    strengths: &mut Vec<String>,
    improvements: &mut Vec<String>,
) {
    let signals = signals::behavioral(content);

    metrics.structure = if signals.has_context && signals.has_action && signals.has_result {
        85
    } else if (signals.has_context && signals.has_action)
        || (signals.has_action && signals.has_result)
    {
        65
    } else if signals.has_action {
        45
    } else {
        30
    };

    metrics.depth = if signals.has_specifics { 75 } else { 50 };

    if signals.has_context && signals.has_action && signals.has_result {
        strengths.push("Well-structured response using the STAR method".to_string());
    } else {
        improvements.push(
            "Structure your answer using the STAR method (Situation, Task, Action, Result)"
                .to_string(),
        );
    }

    if signals.has_specifics {
        strengths.push("Good use of specific details and metrics".to_string());
    } else {
        improvements
            .push("Include specific numbers and metrics to quantify your impact".to_string());
    }

    if word_count < 50 {
        improvements.push(
            "Expand your answer with more details about the situation and your actions"
                .to_string(),
        );
    } else if word_count > 300 {
        improvements.push(
            "Consider making your response more concise while maintaining key details"
                .to_string(),
        );
    } else {
        strengths.push("Good answer length - detailed but concise".to_string());
    }
}

pub(super) fn score_technical(
    content: &str,
    avg_sentence_length: f32,
    metrics: &mut AnswerMetrics,
    strengths: &mut Vec<String>,
    improvements: &mut Vec<String>,
) {
    let signals = signals::technical(content);

    metrics.depth = match (signals.has_terms, signals.has_explanation) {
        (true, true) => 80,
        (true, false) => 60,
        (false, true) => 50,
        (false, false) => 30,
    };

    if signals.has_terms {
        strengths.push("Good use of technical terminology".to_string());
    } else {
        improvements.push("Include more technical terms relevant to the question".to_string());
    }

    if signals.has_explanation {
        strengths.push("Clear explanations of technical concepts".to_string());
    } else {
        improvements.push(
            "Explain why and how technical concepts work, not just what they are".to_string(),
        );
    }

    if avg_sentence_length > 30.0 {
        improvements.push("Break down complex sentences for better clarity".to_string());
    }
}

pub(super) fn score_coding(
    content: &str,
    metrics: &mut AnswerMetrics,
    strengths: &mut Vec<String>,
    improvements: &mut Vec<String>,
) {
    let signals = signals::coding(content);

    let mut depth: u32 = 20;
    if signals.has_comments {
        depth += 25;
    }
    if signals.has_error_handling {
        depth += 25;
    }
    if signals.has_optimization {
        depth += 30;
    }
    metrics.depth = depth.min(100) as u8;

    if signals.has_comments {
        strengths.push("Good code documentation with comments".to_string());
    } else {
        improvements
            .push("Add comments to explain your approach and key parts of the code".to_string());
    }

    if signals.has_error_handling {
        strengths.push("Includes error handling for robustness".to_string());
    } else {
        improvements.push("Consider adding error handling for edge cases".to_string());
    }

    if signals.has_optimization {
        strengths.push("Shows awareness of code optimization and complexity".to_string());
    } else {
        improvements.push("Discuss the time and space complexity of your solution".to_string());
    }
}
