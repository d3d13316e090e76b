//! Token overlap relevance and frequency-ranked keyword extraction.

use std::collections::{HashMap, HashSet};

/// Stop words excluded from keyword extraction.
const STOP_WORDS: [&str; 13] = [
    "the", "and", "that", "this", "with", "for", "was", "were", "have", "had", "not", "are",
    "from",
];

fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric() && c != '_')
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Overlap-based relevance: the fraction of question tokens longer than
/// three characters that also appear in the answer, scaled to 0-100 with a
/// +20 offset and capped at 100. A question with no qualifying tokens
/// yields zero.
pub(super) fn relevance(question: &str, content: &str) -> u8 {
    let question_tokens: Vec<String> = tokenize(question)
        .into_iter()
        .filter(|token| token.len() > 3)
        .collect();

    if question_tokens.is_empty() {
        return 0;
    }

    let answer_tokens: HashSet<String> = tokenize(content).into_iter().collect();
    let matching = question_tokens
        .iter()
        .filter(|token| answer_tokens.contains(*token))
        .count();

    let scaled = (matching as f32 / question_tokens.len() as f32 * 100.0).round() as u32;
    (scaled + 20).min(100) as u8
}

/// Top `limit` keywords by frequency. Tokens of four characters or fewer
/// and common stop words are dropped; ties keep first-seen order.
pub(super) fn top_keywords(content: &str, limit: usize) -> Vec<String> {
    let mut order: Vec<String> = Vec::new();
    let mut counts: HashMap<String, usize> = HashMap::new();

    for token in tokenize(content) {
        if token.len() <= 4 || STOP_WORDS.contains(&token.as_str()) {
            continue;
        }
        if !counts.contains_key(&token) {
            order.push(token.clone());
        }
        *counts.entry(token).or_insert(0) += 1;
    }

    // Stable sort keeps first-seen order among equal counts.
    order.sort_by(|a, b| counts[b].cmp(&counts[a]));
    order.truncate(limit);
    order
}
