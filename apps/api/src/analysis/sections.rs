#![allow(dead_code)]

//! Section detection — which of the six canonical resume sections appear.

use serde::Serialize;

/// The six canonical resume sections, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Summary,
    Education,
    Projects,
    Experience,
    Skills,
    Certifications,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Summary,
        Section::Education,
        Section::Projects,
        Section::Experience,
        Section::Skills,
        Section::Certifications,
    ];

    /// Trigger keyword family for the section. A section counts as present
    /// if any keyword occurs as a literal substring — "project" also
    /// matches inside "projection", an accepted recall-over-precision
    /// choice.
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Section::Summary => &["summary", "objective"],
            Section::Education => &["education"],
            Section::Projects => &["project"],
            Section::Experience => &["experience", "internship"],
            Section::Skills => &["skills"],
            Section::Certifications => &["certification"],
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Summary => "Summary",
            Section::Education => "Education",
            Section::Projects => "Projects",
            Section::Experience => "Experience",
            Section::Skills => "Skills",
            Section::Certifications => "Certifications",
        }
    }
}

/// Presence flags for all six sections. The struct always carries exactly
/// six entries regardless of document content, including empty text.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SectionPresence {
    pub summary: bool,
    pub education: bool,
    pub projects: bool,
    pub experience: bool,
    pub skills: bool,
    pub certifications: bool,
}

impl SectionPresence {
    pub fn get(&self, section: Section) -> bool {
        match section {
            Section::Summary => self.summary,
            Section::Education => self.education,
            Section::Projects => self.projects,
            Section::Experience => self.experience,
            Section::Skills => self.skills,
            Section::Certifications => self.certifications,
        }
    }

    /// Fixed-order view for reports.
    pub fn entries(&self) -> [(Section, bool); 6] {
        Section::ALL.map(|section| (section, self.get(section)))
    }

    pub fn present_count(&self) -> usize {
        self.entries().iter().filter(|(_, present)| *present).count()
    }
}

/// Detects each section independently; a document can match all, none, or
/// any subset.
pub fn detect_sections(text: &str) -> SectionPresence {
    let found =
        |section: Section| section.keywords().iter().any(|keyword| text.contains(keyword));

    SectionPresence {
        summary: found(Section::Summary),
        education: found(Section::Education),
        projects: found(Section::Projects),
        experience: found(Section::Experience),
        skills: found(Section::Skills),
        certifications: found(Section::Certifications),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_has_all_six_keys_all_false() {
        let presence = detect_sections("");
        assert_eq!(presence.entries().len(), 6);
        assert_eq!(presence.present_count(), 0);
    }

    #[test]
    fn test_synonyms_trigger_section() {
        let presence = detect_sections("career objective: build things");
        assert!(presence.summary, "objective is a summary synonym");

        let presence = detect_sections("internship at acme corp");
        assert!(presence.experience, "internship is an experience synonym");
    }

    #[test]
    fn test_substring_matching_has_no_word_boundary() {
        // Accepted false positive: "projection" contains "project".
        let presence = detect_sections("sales projection models");
        assert!(presence.projects);
    }

    #[test]
    fn test_independent_detection() {
        let presence = detect_sections("education\nskills");
        assert!(presence.education);
        assert!(presence.skills);
        assert!(!presence.summary);
        assert!(!presence.projects);
        assert!(!presence.experience);
        assert!(!presence.certifications);
    }

    #[test]
    fn test_entries_in_fixed_report_order() {
        let order: Vec<Section> = detect_sections("")
            .entries()
            .iter()
            .map(|(section, _)| *section)
            .collect();
        assert_eq!(order, Section::ALL.to_vec());
    }
}
