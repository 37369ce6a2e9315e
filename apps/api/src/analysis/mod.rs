// Rule-based resume analysis pipeline.
// Implements: entity extraction, section detection, skill matching,
// JD match scoring, role suggestion, ATS score aggregation.
// Every stage is a synchronous pure function of the normalized resume text.

pub mod entities;
pub mod handlers;
pub mod job_match;
pub mod roles;
pub mod score;
pub mod sections;
pub mod skills;
pub mod suggestions;

use serde::Serialize;

use crate::analysis::entities::ContactInfo;
use crate::analysis::job_match::JobMatchResult;
use crate::analysis::score::AtsScore;
use crate::analysis::sections::SectionPresence;
use crate::analysis::skills::{Category, Vocabulary};

/// Aggregate output of one analysis run. Derived synchronously and fully
/// from its inputs; nothing persists or mutates across calls.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    pub contact: ContactInfo,
    pub sections: SectionPresence,
    pub skills_found: Vec<String>,
    /// Absent when no job description was supplied.
    pub job_match: Option<JobMatchResult>,
    pub suggested_roles: Vec<String>,
    pub score: AtsScore,
    pub suggestions: Vec<String>,
}

/// Runs the full pipeline over normalized (lowercase) resume text.
///
/// The extractors, section detector, and skill matcher are independent of
/// each other; they run sequentially here because each is a fast scan and
/// the inputs are read-only.
pub fn analyze(
    resume_text: &str,
    job_description: Option<&str>,
    vocabulary: &Vocabulary,
    category: Category,
) -> AnalysisResult {
    let contact = entities::extract_contact_info(resume_text);
    let sections = sections::detect_sections(resume_text);
    let skills_found = skills::match_skills(resume_text, vocabulary);

    let job_match = job_description
        .map(str::trim)
        .filter(|jd| !jd.is_empty())
        .map(|jd| job_match::compute_job_match(&skills_found, jd, vocabulary));

    let suggested_roles = roles::suggest_roles(&skills_found, category);
    let score = score::compute_ats_score(&contact, &sections, &skills_found, job_match.as_ref());
    let suggestions = suggestions::build_suggestions(&contact, &sections, &skills_found);

    AnalysisResult {
        contact,
        sections,
        skills_found,
        job_match,
        suggested_roles,
        score,
        suggestions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::skills::Vocabulary;

    fn vocab(entries: &[&str]) -> Vocabulary {
        Vocabulary::new(entries.iter().copied())
    }

    #[test]
    fn test_full_pipeline_on_rich_resume() {
        let text = "contact: jane@example.com, +1 555-123-4567, \
                    github.com/janedoe, linkedin.com/in/janedoe, \
                    summary, education, projects, experience, skills: python, sql";
        let vocabulary = vocab(&["python", "sql", "java"]);

        let result = analyze(text, None, &vocabulary, Category::It);

        assert_eq!(result.contact.email.as_deref(), Some("jane@example.com"));
        assert!(result.contact.phone.is_some());
        assert_eq!(result.contact.github.as_deref(), Some("github.com/janedoe"));
        assert_eq!(
            result.contact.linkedin.as_deref(),
            Some("linkedin.com/in/janedoe")
        );

        assert!(result.sections.summary);
        assert!(result.sections.education);
        assert!(result.sections.projects);
        assert!(result.sections.experience);
        assert!(result.sections.skills);
        assert!(!result.sections.certifications);

        assert_eq!(result.skills_found, vec!["python", "sql"]);

        assert_eq!(result.score.breakdown.contact, 20);
        assert_eq!(result.score.breakdown.links, 10);
        assert_eq!(result.score.breakdown.sections, 45);
        assert_eq!(result.score.breakdown.skills, 0, "two skills are below the 5-skill tier");
        assert_eq!(result.score.total, 75);
    }

    #[test]
    fn test_empty_document_degrades_gracefully() {
        let vocabulary = vocab(&["python"]);
        let result = analyze("", None, &vocabulary, Category::It);

        assert!(result.contact.email.is_none());
        assert_eq!(result.sections.present_count(), 0);
        assert!(result.skills_found.is_empty());
        assert!(result.job_match.is_none());
        assert_eq!(result.score.total, 0);
        assert!(!result.suggested_roles.is_empty(), "fallback role expected");
    }

    #[test]
    fn test_job_match_absent_without_jd_even_for_blank_jd() {
        let vocabulary = vocab(&["python"]);
        let result = analyze("python", None, &vocabulary, Category::It);
        assert!(result.job_match.is_none());

        let result = analyze("python", Some("   "), &vocabulary, Category::It);
        assert!(result.job_match.is_none(), "whitespace-only JD is no JD");
    }

    #[test]
    fn test_job_match_present_with_jd() {
        let vocabulary = vocab(&["python", "django", "docker", "java"]);
        let result = analyze(
            "skills: python",
            Some("python, django, docker"),
            &vocabulary,
            Category::It,
        );

        let job_match = result.job_match.expect("JD supplied");
        assert_eq!(job_match.score, 33);
        assert_eq!(result.score.breakdown.jd_match_bonus, 0, "33% is below the 40% tier");
    }

    #[test]
    fn test_analysis_is_deterministic() {
        let text = "summary, python, sql, experience at github.com/janedoe";
        let vocabulary = vocab(&["python", "sql"]);
        let a = analyze(text, Some("python"), &vocabulary, Category::It);
        let b = analyze(text, Some("python"), &vocabulary, Category::It);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }
}
