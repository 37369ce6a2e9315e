//! ATS score aggregation.
//!
//! The point tables below are the canonical scoring policy; consumers
//! depend on these exact thresholds and values, so changes here are
//! breaking changes to report output.

use serde::Serialize;

use crate::analysis::entities::ContactInfo;
use crate::analysis::job_match::JobMatchResult;
use crate::analysis::sections::{Section, SectionPresence};

pub const MAX_SCORE: u32 = 100;

const EMAIL_POINTS: u32 = 10;
const PHONE_POINTS: u32 = 10;
const GITHUB_POINTS: u32 = 5;
const LINKEDIN_POINTS: u32 = 5;

/// Points per detected section.
const SECTION_POINTS: &[(Section, u32)] = &[
    (Section::Summary, 10),
    (Section::Education, 10),
    (Section::Projects, 10),
    (Section::Experience, 10),
    (Section::Skills, 5),
    (Section::Certifications, 5),
];

/// Skill-count thresholds, additive: ten found skills earn both tiers.
const SKILL_TIERS: &[(usize, u32)] = &[(5, 5), (10, 5)];

/// JD-match bonus thresholds; the highest tier at or below the match
/// percentage wins. Below 40%, or with no job description, the bonus is 0.
const JD_BONUS_TIERS: &[(u32, u32)] = &[(70, 10), (40, 5)];

/// Per-category sub-scores. The final score is the clamped sum.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScoreBreakdown {
    pub contact: u32,
    pub links: u32,
    pub sections: u32,
    pub skills: u32,
    pub jd_match_bonus: u32,
}

impl ScoreBreakdown {
    pub fn sum(&self) -> u32 {
        self.contact + self.links + self.sections + self.skills + self.jd_match_bonus
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AtsScore {
    /// `min(100, sum of the breakdown)`.
    pub total: u32,
    pub breakdown: ScoreBreakdown,
}

/// Every contribution is additive and the only operation after summing is
/// the clamp, so adding any individual signal never lowers the total.
pub fn compute_ats_score(
    contact: &ContactInfo,
    sections: &SectionPresence,
    skills_found: &[String],
    job_match: Option<&JobMatchResult>,
) -> AtsScore {
    let mut breakdown = ScoreBreakdown::default();

    if contact.email.is_some() {
        breakdown.contact += EMAIL_POINTS;
    }
    if contact.phone.is_some() {
        breakdown.contact += PHONE_POINTS;
    }
    if contact.github.is_some() {
        breakdown.links += GITHUB_POINTS;
    }
    if contact.linkedin.is_some() {
        breakdown.links += LINKEDIN_POINTS;
    }

    for (section, points) in SECTION_POINTS {
        if sections.get(*section) {
            breakdown.sections += points;
        }
    }

    for (threshold, points) in SKILL_TIERS {
        if skills_found.len() >= *threshold {
            breakdown.skills += points;
        }
    }

    if let Some(job_match) = job_match {
        breakdown.jd_match_bonus = JD_BONUS_TIERS
            .iter()
            .find(|(threshold, _)| job_match.score >= *threshold)
            .map(|(_, points)| *points)
            .unwrap_or(0);
    }

    AtsScore {
        total: breakdown.sum().min(MAX_SCORE),
        breakdown,
    }
}
