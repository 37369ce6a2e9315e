//! Report rendering — one-shot, side-effect-free views of an
//! `AnalysisResult`.
//!
//! Placeholders are consistent per field type: "Not Found" for absent
//! contact fields, "None" for empty lists, "N/A" for an absent job match.

use std::fmt::Write as _;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::analysis::AnalysisResult;

const NOT_FOUND: &str = "Not Found";
const NONE_PLACEHOLDER: &str = "None";
const NOT_APPLICABLE: &str = "N/A";

fn or_not_found(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or(NOT_FOUND)
}

fn join_or_none(items: &[String]) -> String {
    if items.is_empty() {
        NONE_PLACEHOLDER.to_string()
    } else {
        items.join(", ")
    }
}

/// Renders the human-readable text report.
pub fn render_text_report(result: &AnalysisResult) -> String {
    let mut out = String::new();

    // Writing to a String cannot fail; the let bindings keep fmt::Write
    // happy without unwraps.
    let _ = writeln!(out, "=== Resume ATS Report ===");
    let _ = writeln!(out);
    let _ = writeln!(out, "ATS Score: {}/100", result.score.total);
    let _ = writeln!(out);
    let _ = writeln!(out, "Score Breakdown");
    let _ = writeln!(out, "  Contact:        {}", result.score.breakdown.contact);
    let _ = writeln!(out, "  Links:          {}", result.score.breakdown.links);
    let _ = writeln!(out, "  Sections:       {}", result.score.breakdown.sections);
    let _ = writeln!(out, "  Skills:         {}", result.score.breakdown.skills);
    let _ = writeln!(
        out,
        "  JD Match Bonus: {}",
        result.score.breakdown.jd_match_bonus
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "Contact");
    let _ = writeln!(out, "  Email:    {}", or_not_found(&result.contact.email));
    let _ = writeln!(out, "  Phone:    {}", or_not_found(&result.contact.phone));
    let _ = writeln!(out, "  GitHub:   {}", or_not_found(&result.contact.github));
    let _ = writeln!(out, "  LinkedIn: {}", or_not_found(&result.contact.linkedin));
    let _ = writeln!(out);
    let _ = writeln!(out, "Sections");
    for (section, present) in result.sections.entries() {
        let _ = writeln!(
            out,
            "  {}: {}",
            section.label(),
            if present { "Yes" } else { "No" }
        );
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Skills Found");
    let _ = writeln!(out, "  {}", join_or_none(&result.skills_found));
    let _ = writeln!(out);
    let _ = writeln!(out, "Suggested Roles");
    for role in &result.suggested_roles {
        let _ = writeln!(out, "  - {role}");
    }

    if let Some(job_match) = &result.job_match {
        let _ = writeln!(out);
        let _ = writeln!(out, "Job Description Match");
        if job_match.low_confidence {
            let _ = writeln!(
                out,
                "  Match Score: undefined (no recognized skills in the job description)"
            );
        } else {
            let _ = writeln!(out, "  Match Score: {}%", job_match.score);
        }
        let _ = writeln!(out, "  Matched Skills: {}", join_or_none(&job_match.matched));
        let _ = writeln!(out, "  Missing Skills: {}", join_or_none(&job_match.missing));
    }

    if !result.suggestions.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Suggestions");
        for suggestion in &result.suggestions {
            let _ = writeln!(out, "  - {suggestion}");
        }
    }

    out
}

/// Flat single-row record mirroring the report for spreadsheet export.
/// Field order is the CSV column order.
#[derive(Debug, Serialize)]
struct ReportRecord {
    final_score: u32,
    contact_score: u32,
    links_score: u32,
    sections_score: u32,
    skills_score: u32,
    jd_match_bonus: u32,
    email_found: bool,
    phone_found: bool,
    github_found: bool,
    linkedin_found: bool,
    summary: bool,
    education: bool,
    projects: bool,
    experience: bool,
    skills_section: bool,
    certifications: bool,
    skills_count: usize,
    skills: String,
    suggested_roles: String,
    job_match_score: String,
    job_match_low_confidence: bool,
    matched_skills: String,
    missing_skills: String,
}

impl ReportRecord {
    fn from_result(result: &AnalysisResult) -> Self {
        let (job_match_score, job_match_low_confidence, matched_skills, missing_skills) =
            match &result.job_match {
                Some(job_match) => (
                    job_match.score.to_string(),
                    job_match.low_confidence,
                    join_or_none(&job_match.matched),
                    join_or_none(&job_match.missing),
                ),
                None => (
                    NOT_APPLICABLE.to_string(),
                    false,
                    NOT_APPLICABLE.to_string(),
                    NOT_APPLICABLE.to_string(),
                ),
            };

        ReportRecord {
            final_score: result.score.total,
            contact_score: result.score.breakdown.contact,
            links_score: result.score.breakdown.links,
            sections_score: result.score.breakdown.sections,
            skills_score: result.score.breakdown.skills,
            jd_match_bonus: result.score.breakdown.jd_match_bonus,
            email_found: result.contact.email.is_some(),
            phone_found: result.contact.phone.is_some(),
            github_found: result.contact.github.is_some(),
            linkedin_found: result.contact.linkedin.is_some(),
            summary: result.sections.summary,
            education: result.sections.education,
            projects: result.sections.projects,
            experience: result.sections.experience,
            skills_section: result.sections.skills,
            certifications: result.sections.certifications,
            skills_count: result.skills_found.len(),
            skills: join_or_none(&result.skills_found),
            suggested_roles: result.suggested_roles.join(", "),
            job_match_score,
            job_match_low_confidence,
            matched_skills,
            missing_skills,
        }
    }
}

/// Renders the single-row CSV record (with a header row).
pub fn render_csv_record(result: &AnalysisResult) -> Result<String> {
    let mut writer = csv::WriterBuilder::new().from_writer(vec![]);
    writer
        .serialize(ReportRecord::from_result(result))
        .context("failed to serialize report record")?;
    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("failed to flush report record: {e}"))?;
    String::from_utf8(bytes).context("report record was not valid UTF-8")
}
