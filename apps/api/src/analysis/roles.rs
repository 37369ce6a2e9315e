//! Role suggestion — declarative per-category rule tables over the found
//! skill set.
//!
//! New domains are added by registering a new rule table; the evaluator
//! never branches on category beyond table selection.

use crate::analysis::skills::Category;

/// A single suggestion rule. Fires iff every `requires_all` skill is in the
/// found set and, when `requires_any` is non-empty, at least one of those
/// is present too.
#[derive(Debug, Clone, Copy)]
pub struct RoleRule {
    pub label: &'static str,
    pub requires_all: &'static [&'static str],
    pub requires_any: &'static [&'static str],
}

/// Fallback when no rule fires. Role suggestions are never empty.
pub const FALLBACK_ROLE: &str = "Entry Level / Generalist";

const IT_RULES: &[RoleRule] = &[
    RoleRule {
        label: "Machine Learning Engineer",
        requires_all: &["python", "machine learning"],
        requires_any: &[],
    },
    RoleRule {
        label: "Data Analyst",
        requires_all: &["sql"],
        requires_any: &["excel", "power bi", "tableau", "data analysis"],
    },
    RoleRule {
        label: "Backend Developer",
        requires_all: &["python"],
        requires_any: &["django", "flask", "fastapi"],
    },
    RoleRule {
        label: "Java Backend Developer",
        requires_all: &["java", "spring boot"],
        requires_any: &[],
    },
    RoleRule {
        label: "Frontend Developer",
        requires_all: &["javascript"],
        requires_any: &["react", "angular", "vue"],
    },
    RoleRule {
        label: "Web Developer",
        requires_all: &["html", "css"],
        requires_any: &[],
    },
    RoleRule {
        label: "DevOps Engineer",
        requires_all: &["docker", "kubernetes"],
        requires_any: &[],
    },
    RoleRule {
        label: "Cloud Engineer",
        requires_all: &[],
        requires_any: &["aws", "azure", "gcp"],
    },
];

const PSYCHOLOGY_RULES: &[RoleRule] = &[
    RoleRule {
        label: "Clinical Psychology Trainee",
        requires_all: &["clinical psychology", "psychological assessment"],
        requires_any: &[],
    },
    RoleRule {
        label: "Counseling Associate",
        requires_all: &[],
        requires_any: &["counseling", "psychotherapy"],
    },
    RoleRule {
        label: "Research Assistant",
        requires_all: &["research methods"],
        requires_any: &["spss", "statistics", "data collection"],
    },
    RoleRule {
        label: "Child Development Associate",
        requires_all: &["child psychology"],
        requires_any: &[],
    },
    RoleRule {
        label: "Mental Health Case Worker",
        requires_all: &[],
        requires_any: &["case management", "crisis intervention"],
    },
];

fn rules_for(category: Category) -> &'static [RoleRule] {
    match category {
        Category::It => IT_RULES,
        Category::Psychology => PSYCHOLOGY_RULES,
    }
}

impl RoleRule {
    fn fires(&self, skills: &[String]) -> bool {
        let has = |needle: &str| skills.iter().any(|s| s == needle);
        self.requires_all.iter().all(|s| has(s))
            && (self.requires_any.is_empty() || self.requires_any.iter().any(|s| has(s)))
    }
}

/// Evaluates the category's rule table in declaration order and returns the
/// label of every rule that fires. Ties keep declaration order, not
/// alphabetical order. Falls back to a generic entry-level label so the
/// output is never empty.
pub fn suggest_roles(skills: &[String], category: Category) -> Vec<String> {
    let fired: Vec<String> = rules_for(category)
        .iter()
        .filter(|rule| rule.fires(skills))
        .map(|rule| rule.label.to_string())
        .collect();

    if fired.is_empty() {
        vec![FALLBACK_ROLE.to_string()]
    } else {
        fired
    }
}
