#![allow(dead_code)]

//! Skill matching — literal-substring scan of a configured vocabulary.
//!
//! The matcher has no semantic understanding: a skill is "found" when its
//! canonical phrase occurs anywhere in the text. Multi-word skills must
//! appear as an exact contiguous phrase.

use serde::{Deserialize, Serialize};

/// Domain selector. Picks both the skill vocabulary and the role rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    It,
    Psychology,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::It, Category::Psychology];

    /// Case-insensitive tag lookup. Returns `None` for an unknown tag so the
    /// caller can reject it instead of silently picking a default.
    pub fn parse(tag: &str) -> Option<Category> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "it" => Some(Category::It),
            "psychology" => Some(Category::Psychology),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::It => "it",
            Category::Psychology => "psychology",
        }
    }
}

/// An ordered list of canonical lowercase skill phrases.
///
/// Entries are matched as literal substrings, so vocabulary design favors
/// longer, more specific phrases ("golang" rather than "go", no
/// single-letter language names) to limit partial-token false positives.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    skills: Vec<String>,
}

impl Vocabulary {
    pub fn new<I, S>(skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            skills: skills
                .into_iter()
                .map(|s| s.as_ref().trim().to_lowercase())
                .filter(|s| !s.is_empty())
                .collect(),
        }
    }

    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    pub fn contains(&self, skill: &str) -> bool {
        self.skills.iter().any(|s| s == skill)
    }
}

/// Returns the vocabulary entries occurring as literal substrings of the
/// text, deduplicated and in lexicographic order (not vocabulary order) so
/// repeated runs over the same text are byte-identical.
pub fn match_skills(text: &str, vocabulary: &Vocabulary) -> Vec<String> {
    let mut found: Vec<String> = vocabulary
        .skills()
        .iter()
        .filter(|skill| text.contains(skill.as_str()))
        .cloned()
        .collect();
    found.sort();
    found.dedup();
    found
}

const IT_SKILLS: &[&str] = &[
    "python",
    "java",
    "javascript",
    "typescript",
    "rust",
    "golang",
    "c++",
    "c#",
    "sql",
    "mysql",
    "postgresql",
    "mongodb",
    "redis",
    "html",
    "css",
    "react",
    "angular",
    "vue",
    "node.js",
    "next.js",
    "django",
    "flask",
    "fastapi",
    "spring boot",
    "docker",
    "kubernetes",
    "terraform",
    "jenkins",
    "ci/cd",
    "aws",
    "azure",
    "gcp",
    "linux",
    "git",
    "machine learning",
    "deep learning",
    "natural language processing",
    "data analysis",
    "pandas",
    "numpy",
    "tensorflow",
    "pytorch",
    "rest api",
    "graphql",
    "excel",
    "power bi",
    "tableau",
];

const PSYCHOLOGY_SKILLS: &[&str] = &[
    "counseling",
    "psychotherapy",
    "cognitive behavioral therapy",
    "psychological assessment",
    "psychometrics",
    "case management",
    "crisis intervention",
    "group therapy",
    "child psychology",
    "clinical psychology",
    "neuropsychology",
    "behavioral analysis",
    "mental health",
    "research methods",
    "statistics",
    "spss",
    "data collection",
    "report writing",
    "active listening",
    "empathy",
];

/// Named skill-list configurations keyed by category. Immutable after
/// construction — handlers resolve a vocabulary per request instead of
/// reaching for process-wide tables.
#[derive(Debug, Clone)]
pub struct VocabularyStore {
    it: Vocabulary,
    psychology: Vocabulary,
}

impl VocabularyStore {
    pub fn builtin() -> Self {
        Self {
            it: Vocabulary::new(IT_SKILLS.iter().copied()),
            psychology: Vocabulary::new(PSYCHOLOGY_SKILLS.iter().copied()),
        }
    }

    pub fn get(&self, category: Category) -> &Vocabulary {
        match category {
            Category::It => &self.it,
            Category::Psychology => &self.psychology,
        }
    }

    /// All categories with their vocabularies, in `Category::ALL` order.
    pub fn categories(&self) -> impl Iterator<Item = (Category, &Vocabulary)> {
        Category::ALL.into_iter().map(move |c| (c, self.get(c)))
    }
}
