//! Improvement suggestions derived from the same signals that drive the
//! score — no new analysis, just the gaps spelled out.

use crate::analysis::entities::ContactInfo;
use crate::analysis::sections::SectionPresence;

const MIN_SKILLS: usize = 5;

pub fn build_suggestions(
    contact: &ContactInfo,
    sections: &SectionPresence,
    skills_found: &[String],
) -> Vec<String> {
    let mut suggestions = Vec::new();

    if contact.email.is_none() {
        suggestions.push("Add a valid email address.".to_string());
    }
    if contact.phone.is_none() {
        suggestions.push("Add a phone number.".to_string());
    }
    if contact.github.is_none() {
        suggestions.push("Link a GitHub profile to showcase your work.".to_string());
    }
    if contact.linkedin.is_none() {
        suggestions.push("Link a LinkedIn profile.".to_string());
    }
    if !sections.summary {
        suggestions.push("Add a Summary / Objective section.".to_string());
    }
    if !sections.education {
        suggestions.push("Add an Education section.".to_string());
    }
    if !sections.projects {
        suggestions.push("Add a Projects section.".to_string());
    }
    if !sections.experience {
        suggestions.push("Add an Experience / Internship section.".to_string());
    }
    if skills_found.len() < MIN_SKILLS {
        suggestions.push("Add more relevant technical skills.".to_string());
    }
    if !sections.certifications {
        suggestions.push("Add Certifications (optional but helpful).".to_string());
    }

    suggestions
}
