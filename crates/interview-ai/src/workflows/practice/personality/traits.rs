//! The ten fixed trait definitions and their keyword vocabularies.

/// Static definition of one personality trait.
pub(super) struct TraitDefinition {
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub strengths: [&'static str; 3],
    pub improvements: [&'static str; 3],
    pub keywords: [&'static str; 10],
}

pub(super) const TRAIT_DEFINITIONS: [TraitDefinition; 10] = [
    TraitDefinition {
        key: "analytical",
        name: "Analytical Thinking",
        description: "Your ability to examine information or situations methodically, breaking them down into components, and evaluating them logically.",
        strengths: [
            "Strong data-driven decision making",
            "Ability to identify patterns and insights",
            "Logical approach to problem-solving",
        ],
        improvements: [
            "Balance analysis with intuition when appropriate",
            "Communicate analytical findings in accessible ways",
            "Don't get lost in details at the expense of the big picture",
        ],
        keywords: [
            "analyze", "data", "logical", "research", "evaluate", "assessment", "metrics",
            "systematic", "objective", "rational",
        ],
    },
    TraitDefinition {
        key: "creative",
        name: "Creativity",
        description: "Your ability to generate original ideas, think outside conventional frameworks, and develop innovative solutions.",
        strengths: [
            "Innovative approach to challenges",
            "Ability to envision new possibilities",
            "Thinking beyond conventional solutions",
        ],
        improvements: [
            "Balance creativity with practicality",
            "Structure your creative process for better outcomes",
            "Communicate the value of creative solutions to stakeholders",
        ],
        keywords: [
            "creative", "innovative", "design", "new ideas", "imagination", "artistic", "unique",
            "original", "brainstorm", "vision",
        ],
    },
    TraitDefinition {
        key: "detail_oriented",
        name: "Detail Orientation",
        description: "Your capacity to pay close attention to small elements and ensure accuracy and thoroughness in your work.",
        strengths: [
            "Thorough and precise work output",
            "Ability to catch errors and inconsistencies",
            "Methodical approach to tasks",
        ],
        improvements: [
            "Balance attention to detail with efficiency",
            "Don't lose sight of the bigger picture",
            "Develop systems to manage details without becoming overwhelmed",
        ],
        keywords: [
            "detail", "thorough", "precise", "accurate", "meticulous", "organized", "careful",
            "methodical", "exact", "specific",
        ],
    },
    TraitDefinition {
        key: "leadership",
        name: "Leadership",
        description: "Your ability to guide, influence, and inspire others toward achieving goals and objectives.",
        strengths: [
            "Ability to motivate and inspire teams",
            "Strategic vision and direction-setting",
            "Decision-making capabilities",
        ],
        improvements: [
            "Develop a more inclusive leadership style",
            "Balance directing with empowering others",
            "Improve delegation skills",
        ],
        keywords: [
            "lead", "manage", "direct", "guide", "influence", "motivate", "inspire", "vision",
            "strategy", "decision",
        ],
    },
    TraitDefinition {
        key: "teamwork",
        name: "Teamwork",
        description: "Your ability to collaborate effectively with others, contribute to group efforts, and support collective goals.",
        strengths: [
            "Collaborative approach to projects",
            "Supportive of team members",
            "Ability to leverage diverse perspectives",
        ],
        improvements: [
            "Balance team consensus with timely decision-making",
            "Improve conflict resolution within teams",
            "Develop strategies for working with different personality types",
        ],
        keywords: [
            "team", "collaborate", "together", "cooperation", "collective", "partnership", "joint",
            "group", "support", "assist",
        ],
    },
    TraitDefinition {
        key: "communication",
        name: "Communication",
        description: "Your ability to convey information clearly, listen effectively, and adapt your communication style to different audiences.",
        strengths: [
            "Clear and articulate expression of ideas",
            "Ability to tailor communication to the audience",
            "Active listening skills",
        ],
        improvements: [
            "Practice more concise communication",
            "Improve non-verbal communication awareness",
            "Develop storytelling techniques for more engaging communication",
        ],
        keywords: [
            "communicate", "explain", "articulate", "present", "discuss", "convey", "express",
            "clarify", "dialogue", "conversation",
        ],
    },
    TraitDefinition {
        key: "adaptability",
        name: "Adaptability",
        description: "Your ability to adjust to new conditions, handle change effectively, and remain flexible in various situations.",
        strengths: [
            "Flexibility in changing circumstances",
            "Openness to new approaches and ideas",
            "Resilience in the face of challenges",
        ],
        improvements: [
            "Develop strategies for managing stress during change",
            "Balance adaptability with consistency where needed",
            "Improve anticipation of potential changes",
        ],
        keywords: [
            "adapt", "flexible", "adjust", "change", "versatile", "resilient", "agile", "pivot",
            "responsive", "dynamic",
        ],
    },
    TraitDefinition {
        key: "problem_solving",
        name: "Problem Solving",
        description: "Your ability to identify issues, develop solutions, and implement effective resolutions to challenges.",
        strengths: [
            "Methodical approach to addressing challenges",
            "Creative solution development",
            "Persistence in resolving complex issues",
        ],
        improvements: [
            "Consider a wider range of potential solutions",
            "Improve root cause analysis techniques",
            "Balance quick fixes with sustainable solutions",
        ],
        keywords: [
            "solve", "solution", "resolve", "address", "fix", "troubleshoot", "overcome", "tackle",
            "approach", "strategy",
        ],
    },
    TraitDefinition {
        key: "confidence",
        name: "Confidence",
        description: "Your self-assurance, conviction in your abilities, and comfort in expressing your views and taking action.",
        strengths: [
            "Self-assured presentation style",
            "Willingness to take on challenges",
            "Ability to make decisions with conviction",
        ],
        improvements: [
            "Balance confidence with openness to feedback",
            "Develop strategies for situations that challenge your confidence",
            "Practice authentic confidence rather than overcompensation",
        ],
        keywords: [
            "confident", "certain", "assured", "self-assured", "conviction", "decisive",
            "assertive", "bold", "strong", "sure",
        ],
    },
    TraitDefinition {
        key: "empathy",
        name: "Empathy",
        description: "Your ability to understand others' perspectives, recognize their feelings, and respond appropriately to their needs.",
        strengths: [
            "Strong understanding of others' perspectives",
            "Ability to build rapport and trust",
            "Sensitivity to team dynamics and individual needs",
        ],
        improvements: [
            "Balance empathy with necessary directness",
            "Develop boundaries to prevent emotional exhaustion",
            "Translate empathetic understanding into effective action",
        ],
        keywords: [
            "understand", "perspective", "feelings", "compassion", "empathize", "listen", "care",
            "sensitive", "considerate", "supportive",
        ],
    },
];
