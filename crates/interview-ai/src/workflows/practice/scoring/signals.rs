//! Regex presence checks backing the scoring rules. Patterns are compiled
//! once; all checks are case-insensitive substring probes over the raw
//! answer text.

use once_cell::sync::Lazy;
use regex::Regex;

fn pattern(raw: &str) -> Regex {
    Regex::new(raw).expect("static signal pattern compiles")
}

static CONTEXT: Lazy<Regex> = Lazy::new(|| pattern(r"(?i)situation|context|background"));
static ACTION: Lazy<Regex> = Lazy::new(|| pattern(r"(?i)action|approach|steps|implemented"));
static RESULT: Lazy<Regex> =
    Lazy::new(|| pattern(r"(?i)result|outcome|impact|improved|increased|decreased"));
static SPECIFICS: Lazy<Regex> = Lazy::new(|| {
    pattern(r"(?i)\d+%|\d+ percent|increased by|decreased by|improved|specific|exactly|precisely")
});

static TECHNICAL_TERMS: Lazy<Regex> = Lazy::new(|| {
    pattern(
        r"(?i)algorithm|framework|architecture|system|design|implementation|technology|concept|principle|cache|database|latency|throughput",
    )
});
static EXPLANATION: Lazy<Regex> = Lazy::new(|| {
    pattern(r"(?i)because|therefore|this means|as a result|consequently|due to|explains|clarifies")
});

static COMMENTS: Lazy<Regex> = Lazy::new(|| pattern(r"//|\*/|#|\*\*|--"));
static ERROR_HANDLING: Lazy<Regex> =
    Lazy::new(|| pattern(r"(?i)try|catch|if.*error|exception|throw|finally"));
static OPTIMIZATION: Lazy<Regex> = Lazy::new(|| {
    pattern(r"(?i)optimize|complexity|efficient|performance|O\(n\)|O\(log n\)")
});

/// STAR-style structure signals for behavioral answers.
pub(super) struct BehavioralSignals {
    pub has_context: bool,
    pub has_action: bool,
    pub has_result: bool,
    pub has_specifics: bool,
}

pub(super) fn behavioral(content: &str) -> BehavioralSignals {
    BehavioralSignals {
        has_context: CONTEXT.is_match(content),
        has_action: ACTION.is_match(content),
        has_result: RESULT.is_match(content),
        has_specifics: SPECIFICS.is_match(content),
    }
}

pub(super) struct TechnicalSignals {
    pub has_terms: bool,
    pub has_explanation: bool,
}

pub(super) fn technical(content: &str) -> TechnicalSignals {
    TechnicalSignals {
        has_terms: TECHNICAL_TERMS.is_match(content),
        has_explanation: EXPLANATION.is_match(content),
    }
}

pub(super) struct CodingSignals {
    pub has_comments: bool,
    pub has_error_handling: bool,
    pub has_optimization: bool,
}

pub(super) fn coding(content: &str) -> CodingSignals {
    CodingSignals {
        has_comments: COMMENTS.is_match(content),
        has_error_handling: ERROR_HANDLING.is_match(content),
        has_optimization: OPTIMIZATION.is_match(content),
    }
}
