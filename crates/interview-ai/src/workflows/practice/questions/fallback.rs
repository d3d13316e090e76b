//! Role-parameterized fallback bank used when the richer generation backend
//! is unavailable or returns garbage. The templates interpolate the literal
//! role string; this is string substitution, not personalization.

use rand::Rng;

use super::{draw_from_profile, QuestionCategory, QuestionSet, RoleProfile};

fn role_category(name: &str, weight: u8, templates: Vec<String>) -> QuestionCategory {
    QuestionCategory {
        name: name.to_string(),
        weight,
        templates,
    }
}

fn fallback_profile(role: &str) -> RoleProfile {
    RoleProfile {
        categories: vec![
            role_category(
                "behavioral",
                6,
                vec![
                    format!("Tell me about a challenging situation you faced as a {role} and how you resolved it."),
                    format!("Describe a time when you had to make a difficult decision in your role as a {role}."),
                    format!("Share an example of when you had to adapt quickly to changes in a project as a {role}."),
                    format!("How have you handled disagreements with team members or stakeholders in your {role} position?"),
                    format!("What's the most innovative solution you've implemented as a {role}?"),
                    format!("Describe a situation where you had to work under pressure to meet a deadline in your {role} work."),
                    format!("Tell me about a time you received critical feedback as a {role} and how you responded to it."),
                    format!("How have you prioritized competing tasks and responsibilities in your {role} position?"),
                ],
            ),
            role_category(
                "technical",
                6,
                vec![
                    format!("What technical skills do you consider most important for a {role} and why?"),
                    format!("How do you stay updated with the latest technologies and methodologies relevant to the {role} position?"),
                    format!("Describe a technical challenge you encountered as a {role} and how you solved it."),
                    format!("What tools or frameworks do you find most effective in your work as a {role}?"),
                    "How would you explain a complex technical concept to a non-technical stakeholder?".to_string(),
                    format!("What's your approach to debugging a complex issue in a {role} context?"),
                    format!("How do you ensure quality and maintainability in your projects as a {role}?"),
                ],
            ),
            role_category(
                "coding",
                5,
                vec![
                    "Implement a function that finds all duplicate elements in an array.".to_string(),
                    "Write a function to determine if a string is a palindrome, considering only alphanumeric characters and ignoring case.".to_string(),
                    "Implement a function that merges two sorted arrays into a single sorted array.".to_string(),
                    "Create a function that returns the nth number in the Fibonacci sequence using an efficient approach.".to_string(),
                    "Write a function to find the longest substring without repeating characters.".to_string(),
                    "Implement a basic calculator that can perform addition, subtraction, multiplication, and division.".to_string(),
                    "Create a function that determines if a binary tree is balanced.".to_string(),
                ],
            ),
            role_category(
                "leadership",
                4,
                vec![
                    format!("Describe your leadership style and how it has evolved in your role as a {role}."),
                    "Tell me about a time when you had to lead a team through a difficult situation.".to_string(),
                    "How do you motivate team members who are struggling with their tasks?".to_string(),
                    "Describe a situation where you had to provide constructive feedback to a team member.".to_string(),
                    "How have you handled conflicts within your team?".to_string(),
                    "Tell me about a time when you had to make an unpopular decision as a leader.".to_string(),
                    "How do you delegate responsibilities effectively?".to_string(),
                    "Describe how you've mentored or developed someone on your team.".to_string(),
                ],
            ),
            role_category(
                "problemsolving",
                3,
                vec![
                    format!("Describe a complex problem you solved as a {role}."),
                    "How do you approach breaking down large problems into manageable tasks?".to_string(),
                    "Tell me about a time when you had to think outside the box to solve an issue.".to_string(),
                    "How do you validate your solutions to problems?".to_string(),
                ],
            ),
            role_category(
                "communication",
                3,
                vec![
                    "How do you ensure effective communication across different teams?".to_string(),
                    "Describe a situation where your communication skills helped resolve a conflict.".to_string(),
                    "How do you tailor your communication style for different audiences?".to_string(),
                    "Tell me about a time when miscommunication led to a problem and how you fixed it.".to_string(),
                ],
            ),
            role_category(
                "teamwork",
                3,
                vec![
                    "Describe your role in a successful team project.".to_string(),
                    "How do you contribute to creating a positive team environment?".to_string(),
                    "Tell me about a time when you had to work with someone difficult.".to_string(),
                    "How do you ensure everyone's voice is heard in a team setting?".to_string(),
                ],
            ),
            role_category(
                "projectmanagement",
                3,
                vec![
                    "How do you track progress on projects you manage?".to_string(),
                    "Describe how you handle scope changes in the middle of a project.".to_string(),
                    "How do you prioritize tasks when managing multiple projects?".to_string(),
                    "Tell me about a project that didn't go as planned and how you handled it.".to_string(),
                ],
            ),
            role_category(
                "systemdesign",
                3,
                vec![
                    format!("Describe how you would design a scalable system relevant to a {role}."),
                    "How do you approach making architectural decisions?".to_string(),
                    "Describe a system you designed and the trade-offs you considered.".to_string(),
                    "How do you ensure reliability and performance in your system designs?".to_string(),
                ],
            ),
            role_category(
                "cultural",
                3,
                vec![
                    "How do you contribute to a positive work culture?".to_string(),
                    "Describe how you've adapted to different company cultures in your career.".to_string(),
                    "What type of work environment brings out your best performance?".to_string(),
                    "How do you handle situations that conflict with your values?".to_string(),
                ],
            ),
        ],
        technical_topics: Vec::new(),
        coding_challenges: Vec::new(),
    }
}

/// Draw from the fixed fallback bank with the same weighted logic as the
/// catalog profiles. Category names outside the bank are ignored; an empty
/// intersection draws from every category.
pub fn fallback_questions<R: Rng>(
    role: &str,
    count: usize,
    categories: &[String],
    rng: &mut R,
) -> QuestionSet {
    let profile = fallback_profile(role);
    draw_from_profile(&profile, count, categories, rng)
}
