use crate::infra::{
    InMemoryPreferenceStore, InMemorySessionRepository, PreferenceBackedQuestionSource,
};
use clap::Args;
use interview_ai::error::AppError;
use interview_ai::workflows::practice::questions::{
    fallback_questions, select_questions, technical_topics, QuestionSet,
};
use interview_ai::workflows::practice::session::generation::language_name;
use interview_ai::workflows::practice::session::{AnswerSheet, SessionRequest};
use interview_ai::workflows::practice::{AnswerKind, PracticeSessionService};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct QuestionsArgs {
    /// Role to draw questions for
    #[arg(long, default_value = "Software Engineer")]
    pub(crate) role: String,
    /// Number of questions to draw
    #[arg(long, default_value_t = 5)]
    pub(crate) count: usize,
    /// Restrict the draw to these categories (repeatable)
    #[arg(long = "category")]
    pub(crate) categories: Vec<String>,
    /// Seed the draw for reproducible output
    #[arg(long)]
    pub(crate) seed: Option<u64>,
    /// Draw from the generic fallback bank instead of the role catalog
    #[arg(long)]
    pub(crate) fallback_bank: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Role to practice for
    #[arg(long, default_value = "Software Engineer")]
    pub(crate) role: String,
    /// Number of questions in the demo session
    #[arg(long, default_value_t = 4)]
    pub(crate) count: usize,
    /// Language code for generated text (en, es, fr, ...)
    #[arg(long, default_value = "en")]
    pub(crate) language: String,
    /// Seed the draw for reproducible output
    #[arg(long)]
    pub(crate) seed: Option<u64>,
}

fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

pub(crate) fn run_questions(args: QuestionsArgs) -> Result<(), AppError> {
    let QuestionsArgs {
        role,
        count,
        categories,
        seed,
        fallback_bank,
    } = args;

    let mut rng = seeded_rng(seed);
    let set = if fallback_bank {
        fallback_questions(&role, count, &categories, &mut rng)
    } else {
        select_questions(&role, count, &categories, &mut rng)
    };

    println!("Question draw for {role}");
    render_question_set(&set);

    let topics = technical_topics(&role);
    if !topics.is_empty() {
        println!("\nSuggested preparation topics");
        for topic in topics {
            println!("- {topic}");
        }
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        role,
        count,
        language,
        seed,
    } = args;

    println!("Interview practice demo");
    println!("Feedback language: {}", language_name(&language));

    let repository = Arc::new(InMemorySessionRepository::default());
    let preferences = Arc::new(InMemoryPreferenceStore::default());
    let source = Arc::new(PreferenceBackedQuestionSource::new(preferences));
    let service = PracticeSessionService::with_rng(repository, source, seeded_rng(seed));

    let record = service.start(SessionRequest {
        role: role.clone(),
        count,
        categories: Vec::new(),
        difficulty: 3,
        language: language.clone(),
        resume_text: None,
        industry: None,
    })?;

    println!(
        "\nStarted session {} for {role} ({} questions)",
        record.session_id.0,
        record.questions.len()
    );
    render_question_set(&record.questions);

    let sheet = sample_answers(&record.questions);
    let completed = service.complete(&record.session_id, &sheet)?;

    let results = match completed.results {
        Some(results) => results,
        None => {
            println!("\nSession completed without results");
            return Ok(());
        }
    };

    println!("\nOverall score: {}", results.overall_score);
    println!("\nPer-answer breakdown");
    for analysis in &results.detailed_analysis {
        println!(
            "- [{}] {} | clarity {} | structure {} | depth {} | relevance {}",
            analysis.kind.label(),
            analysis.question,
            analysis.metrics.clarity,
            analysis.metrics.structure,
            analysis.metrics.depth,
            analysis.metrics.relevance
        );
        for strength in &analysis.strengths {
            println!("    + {strength}");
        }
        for improvement in &analysis.improvements {
            println!("    ~ {improvement}");
        }
    }

    println!("\nPersonality profile");
    println!("Dominant traits: {}", results.personality.dominant_traits.join(", "));
    println!("{}", results.personality.summary);
    println!("\nInterview tips");
    for tip in &results.personality.interview_tips {
        println!("- {tip}");
    }

    if let (Some(question), Some(answer)) =
        (record.questions.questions.first(), sheet.answers.first())
    {
        println!("\nCoaching feedback on the first answer");
        println!("{}", service.feedback(question, answer, &language));
    }

    if let Some(completed_at) = completed.completed_at {
        println!("\nCompleted at {completed_at}");
    }

    Ok(())
}

fn render_question_set(set: &QuestionSet) {
    for (question, kind) in set.questions.iter().zip(set.kinds.iter()) {
        println!("- [{kind}] {question}");
    }
}

/// Canned answers so the demo exercises every scoring branch: a STAR-shaped
/// behavioral story, commented code for coding prompts, and a term-heavy
/// explanation for technical prompts.
fn sample_answers(questions: &QuestionSet) -> AnswerSheet {
    let mut answers = Vec::new();
    let mut code_answers = Vec::new();
    let mut coding_languages = Vec::new();

    for kind in &questions.kinds {
        match AnswerKind::from_category(kind) {
            AnswerKind::Coding => {
                answers.push(String::new());
                code_answers.push(
                    "// iterate once and track the best candidate\n\
                     function solve(items) {\n  try {\n    return items.reduce(best);\n  } \
                     catch (error) {\n    return null;\n  }\n}\n\
                     // O(n) time, O(1) space"
                        .to_string(),
                );
                coding_languages.push("javascript".to_string());
            }
            AnswerKind::Technical => {
                answers.push(
                    "The architecture relies on a cache in front of the database because \
                     read latency dominates. This means the system degrades gracefully \
                     under load, and throughput improved by 40% in our benchmarks."
                        .to_string(),
                );
                code_answers.push(String::new());
                coding_languages.push(String::new());
            }
            AnswerKind::Behavioral => {
                answers.push(
                    "The situation was a missed release deadline that put the team under \
                     pressure. My approach was to break the work into daily increments and \
                     I implemented a shared tracker so everyone could see progress. The \
                     result was that we shipped two weeks later with quality intact, and \
                     on-time delivery improved by 30% in the following quarter."
                        .to_string(),
                );
                code_answers.push(String::new());
                coding_languages.push(String::new());
            }
        }
    }

    AnswerSheet {
        answers,
        code_answers,
        coding_languages,
    }
}
