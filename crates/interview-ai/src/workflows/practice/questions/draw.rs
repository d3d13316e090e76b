use rand::Rng;

use super::{bank, QuestionCategory, QuestionSet, RoleProfile};

/// Draw `count` questions from a profile using weighted roulette selection.
///
/// Categories are restricted to `preferred` when the intersection is
/// non-empty; otherwise every category participates. Within a category the
/// template is drawn uniformly among those not already in the result, so the
/// output is duplicate-free until the unique pool across the selected
/// categories runs dry. Once it does, repeat draws are permitted so the
/// result always carries exactly `count` entries.
pub fn draw_from_profile<R: Rng>(
    profile: &RoleProfile,
    count: usize,
    preferred: &[String],
    rng: &mut R,
) -> QuestionSet {
    let mut selected: Vec<&QuestionCategory> = profile
        .categories
        .iter()
        .filter(|category| !category.templates.is_empty())
        .filter(|category| preferred.contains(&category.name))
        .collect();

    if selected.is_empty() {
        selected = profile
            .categories
            .iter()
            .filter(|category| !category.templates.is_empty())
            .collect();
    }

    if selected.is_empty() {
        // No usable bank at all; fall back to the generic behavioral staples.
        let generic = bank::generic_questions();
        let questions: Vec<String> = generic.into_iter().take(count).collect();
        let kinds = vec!["behavioral".to_string(); questions.len()];
        return QuestionSet { questions, kinds };
    }

    let total_weight: u32 = selected.iter().map(|category| u32::from(category.weight)).sum();

    let mut questions: Vec<String> = Vec::with_capacity(count);
    let mut kinds: Vec<String> = Vec::with_capacity(count);

    while questions.len() < count {
        let category = roulette_pick(&selected, total_weight, rng);

        let unused: Vec<&String> = category
            .templates
            .iter()
            .filter(|template| !questions.iter().any(|q| q == *template))
            .collect();

        if !unused.is_empty() {
            let template = unused[rng.gen_range(0..unused.len())].clone();
            questions.push(template);
            kinds.push(category.name.clone());
        } else if pool_exhausted(&selected, &questions) {
            // Every selected bank is spent; allow a repeat so the draw
            // terminates with the requested count.
            let index = rng.gen_range(0..category.templates.len());
            questions.push(category.templates[index].clone());
            kinds.push(category.name.clone());
        }
        // Otherwise another category still has unused templates; redraw.
    }

    QuestionSet { questions, kinds }
}

/// Standard weighted roulette: walk the wheel subtracting weights until the
/// random remainder crosses zero. The first category absorbs any rounding
/// residue.
fn roulette_pick<'a, R: Rng>(
    selected: &[&'a QuestionCategory],
    total_weight: u32,
    rng: &mut R,
) -> &'a QuestionCategory {
    let mut remainder = rng.gen_range(0.0..f64::from(total_weight.max(1)));
    for category in selected {
        remainder -= f64::from(category.weight);
        if remainder <= 0.0 {
            return category;
        }
    }
    selected[0]
}

fn pool_exhausted(selected: &[&QuestionCategory], questions: &[String]) -> bool {
    selected.iter().all(|category| {
        category
            .templates
            .iter()
            .all(|template| questions.iter().any(|q| q == template))
    })
}
