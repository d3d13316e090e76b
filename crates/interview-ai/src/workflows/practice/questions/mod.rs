//! Role-aware question selection.
//!
//! A [`RoleCatalog`] maps job titles to weighted banks of question templates.
//! Draws use roulette-wheel selection across categories so higher-weight
//! categories contribute proportionally more questions, and templates never
//! repeat until the unique pool across the selected categories is exhausted.

mod bank;
mod catalog;
mod draw;
mod fallback;

pub use catalog::RoleCatalog;
pub use draw::draw_from_profile;
pub use fallback::fallback_questions;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Weighted bank of question templates for one category of a role profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionCategory {
    pub name: String,
    /// Sampling weight, 1-10. Higher draws more questions from this bank.
    pub weight: u8,
    pub templates: Vec<String>,
}

/// Question banks and reference material for one known role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleProfile {
    pub categories: Vec<QuestionCategory>,
    pub technical_topics: Vec<String>,
    pub coding_challenges: Vec<String>,
}

impl RoleProfile {
    /// Total number of distinct templates across the given category names,
    /// or across all categories when `names` is empty.
    pub fn unique_pool_size(&self, names: &[String]) -> usize {
        self.categories
            .iter()
            .filter(|category| names.is_empty() || names.contains(&category.name))
            .map(|category| category.templates.len())
            .sum()
    }
}

/// Ordered questions with a parallel list of the category each was drawn from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionSet {
    pub questions: Vec<String>,
    pub kinds: Vec<String>,
}

impl QuestionSet {
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Parallel-array invariant all producers must uphold.
    pub fn is_consistent(&self) -> bool {
        self.questions.len() == self.kinds.len()
    }
}

/// Select `count` questions for `role` from the standard catalog.
///
/// Unknown roles resolve to the default profile and unknown category names
/// are ignored, so this never fails for any input combination.
pub fn select_questions<R: Rng>(
    role: &str,
    count: usize,
    preferred_categories: &[String],
    rng: &mut R,
) -> QuestionSet {
    let profile = RoleCatalog::standard().resolve(role);
    draw::draw_from_profile(profile, count, preferred_categories, rng)
}

/// Reference topics associated with the resolved role profile.
pub fn technical_topics(role: &str) -> Vec<String> {
    RoleCatalog::standard().resolve(role).technical_topics.clone()
}

/// Coding challenge prompts associated with the resolved role profile.
pub fn coding_challenges(role: &str) -> Vec<String> {
    RoleCatalog::standard().resolve(role).coding_challenges.clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn select_questions_returns_parallel_arrays() {
        let mut rng = StdRng::seed_from_u64(7);
        let set = select_questions("software engineer", 6, &[], &mut rng);
        assert_eq!(set.questions.len(), 6);
        assert!(set.is_consistent());
    }

    #[test]
    fn unknown_role_resolves_to_default_profile() {
        let mut rng = StdRng::seed_from_u64(11);
        let set = select_questions("underwater basket weaver", 4, &[], &mut rng);
        assert_eq!(set.len(), 4);
        let default_names: Vec<String> = RoleCatalog::standard()
            .resolve("software engineer")
            .categories
            .iter()
            .map(|category| category.name.clone())
            .collect();
        assert!(set.kinds.iter().all(|kind| default_names.contains(kind)));
    }

    #[test]
    fn technical_topics_present_for_engineers_only() {
        assert!(!technical_topics("software engineer").is_empty());
        assert!(technical_topics("marketing manager").is_empty());
    }
}
