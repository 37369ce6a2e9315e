//! Entity extractors — first-match email, phone, and profile links.
//!
//! All patterns assume the already-lowercased text produced by the
//! normalizer; mixed-case URLs and addresses were folded before they got
//! here. Each extractor returns at most one match, the first in document
//! order, or nothing.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,}").expect("static regex must compile")
});

// Loose international-looking run: optional +, then 10+ digit/space/hyphen
// tokens bounded by digits. False-positives on long numeric IDs and date
// ranges are a known precision tradeoff, kept for output compatibility.
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\+?\d[\d\s\-]{8,}\d").expect("static regex must compile")
});

static GITHUB_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:https?://)?(?:www\.)?github\.com/[a-z0-9_-]+")
        .expect("static regex must compile")
});

static LINKEDIN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:https?://)?(?:www\.)?linkedin\.com/in/[a-z0-9_-]+")
        .expect("static regex must compile")
});

/// Contact details found in the resume. Each field is either found or not —
/// there are no partial-confidence values.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ContactInfo {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub github: Option<String>,
    pub linkedin: Option<String>,
}

fn first_match(re: &Regex, text: &str) -> Option<String> {
    re.find(text).map(|m| m.as_str().to_string())
}

pub fn extract_email(text: &str) -> Option<String> {
    first_match(&EMAIL_RE, text)
}

pub fn extract_phone(text: &str) -> Option<String> {
    first_match(&PHONE_RE, text)
}

/// Returns the matched substring verbatim, including whatever scheme or
/// `www.` prefix was present — not a normalized URL.
pub fn extract_github(text: &str) -> Option<String> {
    first_match(&GITHUB_RE, text)
}

pub fn extract_linkedin(text: &str) -> Option<String> {
    first_match(&LINKEDIN_RE, text)
}

pub fn extract_contact_info(text: &str) -> ContactInfo {
    ContactInfo {
        email: extract_email(text),
        phone: extract_phone(text),
        github: extract_github(text),
        linkedin: extract_linkedin(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_first_match_wins() {
        let text = "contact jane@example.com or backup jane.doe@example.org";
        assert_eq!(extract_email(text).as_deref(), Some("jane@example.com"));
    }

    #[test]
    fn test_email_requires_tld_of_two_letters() {
        assert!(extract_email("broken@host.x").is_none());
        assert_eq!(
            extract_email("ok@host.io").as_deref(),
            Some("ok@host.io")
        );
    }

    #[test]
    fn test_phone_with_plus_and_separators() {
        let text = "call me at +1 555-123-4567 anytime";
        assert_eq!(extract_phone(text).as_deref(), Some("+1 555-123-4567"));
    }

    #[test]
    fn test_phone_rejects_short_runs() {
        assert!(extract_phone("room 12345").is_none());
    }

    #[test]
    fn test_phone_accepts_plain_digit_run() {
        // Accepted limitation: any 10+ digit run looks like a phone number.
        assert_eq!(extract_phone("id 9876543210").as_deref(), Some("9876543210"));
    }

    #[test]
    fn test_github_verbatim_with_prefix() {
        assert_eq!(
            extract_github("see https://github.com/janedoe for code").as_deref(),
            Some("https://github.com/janedoe")
        );
        assert_eq!(
            extract_github("see github.com/janedoe for code").as_deref(),
            Some("github.com/janedoe")
        );
    }

    #[test]
    fn test_linkedin_requires_in_path() {
        assert_eq!(
            extract_linkedin("www.linkedin.com/in/jane-doe").as_deref(),
            Some("www.linkedin.com/in/jane-doe")
        );
        assert!(extract_linkedin("linkedin.com/company/acme").is_none());
    }

    #[test]
    fn test_contact_info_absent_on_empty_text() {
        let contact = extract_contact_info("");
        assert!(contact.email.is_none());
        assert!(contact.phone.is_none());
        assert!(contact.github.is_none());
        assert!(contact.linkedin.is_none());
    }
}
