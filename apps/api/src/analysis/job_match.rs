//! Job-description matching — overlap between the resume's skill set and
//! the skills a job description asks for.

use serde::Serialize;

use crate::analysis::skills::{match_skills, Vocabulary};

/// Result of scoring a resume against a job description. Only produced when
/// a job description was supplied; "no job description" is a distinct state
/// from "0% match".
#[derive(Debug, Clone, Serialize)]
pub struct JobMatchResult {
    /// Integer percentage in [0, 100].
    pub score: u32,
    /// JD skills the resume also has.
    pub matched: Vec<String>,
    /// JD skills the resume lacks.
    pub missing: Vec<String>,
    /// Every vocabulary term detected in the job description;
    /// `matched ∪ missing` partitions this set.
    pub job_skills: Vec<String>,
    /// Set when the job description contained no recognized vocabulary
    /// terms: the 0 score then means "no signal", not "bad match".
    pub low_confidence: bool,
}

/// Scans the job description with the same vocabulary matcher used on the
/// resume and partitions the result against the resume's skill set.
pub fn compute_job_match(
    resume_skills: &[String],
    job_description: &str,
    vocabulary: &Vocabulary,
) -> JobMatchResult {
    let jd_text = job_description.to_lowercase();
    let job_skills = match_skills(&jd_text, vocabulary);

    if job_skills.is_empty() {
        return JobMatchResult {
            score: 0,
            matched: Vec::new(),
            missing: Vec::new(),
            job_skills,
            low_confidence: true,
        };
    }

    let (matched, missing): (Vec<String>, Vec<String>) = job_skills
        .iter()
        .cloned()
        .partition(|skill| resume_skills.contains(skill));

    let score = (100.0 * matched.len() as f64 / job_skills.len() as f64).round() as u32;

    JobMatchResult {
        score,
        matched,
        missing,
        job_skills,
        low_confidence: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::skills::Vocabulary;

    fn vocab(entries: &[&str]) -> Vocabulary {
        Vocabulary::new(entries.iter().copied())
    }

    fn owned(skills: &[&str]) -> Vec<String> {
        skills.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_partial_match_rounds_percentage() {
        let vocabulary = vocab(&["python", "django", "docker", "java"]);
        let result = compute_job_match(
            &owned(&["python"]),
            "python, django, docker",
            &vocabulary,
        );
        assert_eq!(result.job_skills, owned(&["django", "docker", "python"]));
        assert_eq!(result.matched, owned(&["python"]));
        assert_eq!(result.missing, owned(&["django", "docker"]));
        assert_eq!(result.score, 33, "round(100 * 1/3)");
        assert!(!result.low_confidence);
    }

    #[test]
    fn test_matched_and_missing_partition_job_skills() {
        let vocabulary = vocab(&["python", "sql", "docker"]);
        let result = compute_job_match(
            &owned(&["sql"]),
            "need python, sql and docker",
            &vocabulary,
        );
        let mut reunion: Vec<String> = result
            .matched
            .iter()
            .chain(result.missing.iter())
            .cloned()
            .collect();
        reunion.sort();
        assert_eq!(reunion, result.job_skills);
        assert!(result.matched.iter().all(|s| !result.missing.contains(s)));
    }

    #[test]
    fn test_full_match_is_100() {
        let vocabulary = vocab(&["python", "sql"]);
        let result = compute_job_match(
            &owned(&["python", "sql"]),
            "python and sql",
            &vocabulary,
        );
        assert_eq!(result.score, 100);
        assert!(result.missing.is_empty());
    }

    #[test]
    fn test_degenerate_jd_is_zero_but_low_confidence() {
        let vocabulary = vocab(&["python"]);
        let result = compute_job_match(
            &owned(&["python"]),
            "we want a rockstar wizard ninja",
            &vocabulary,
        );
        assert_eq!(result.score, 0);
        assert!(result.low_confidence);
        assert!(result.job_skills.is_empty());
    }

    #[test]
    fn test_jd_is_case_folded_before_matching() {
        let vocabulary = vocab(&["python"]);
        let result = compute_job_match(&owned(&["python"]), "PYTHON required", &vocabulary);
        assert_eq!(result.score, 100);
    }
}
