//! Section Categorizer — buckets raw resume lines into six fixed sections
//! using header-pattern detection.

use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

/// The six fixed resume sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Skills,
    Education,
    Experience,
    Projects,
    Achievements,
    Certifications,
}

/// Lines grouped per section, in insertion order. Duplicate lines are kept.
/// Serializes as a six-key JSON object; sections with no lines are empty
/// arrays, never absent.
#[derive(Debug, Default, Clone, Serialize)]
pub struct SectionBuckets {
    pub education: Vec<String>,
    pub skills: Vec<String>,
    pub experience: Vec<String>,
    pub projects: Vec<String>,
    pub achievements: Vec<String>,
    pub certifications: Vec<String>,
}

impl SectionBuckets {
    fn push(&mut self, category: Category, line: &str) {
        let bucket = match category {
            Category::Education => &mut self.education,
            Category::Skills => &mut self.skills,
            Category::Experience => &mut self.experience,
            Category::Projects => &mut self.projects,
            Category::Achievements => &mut self.achievements,
            Category::Certifications => &mut self.certifications,
        };
        bucket.push(line.to_string());
    }
}

/// How header detection treats a line once a section is already active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeaderMatching {
    /// Historical behavior: the first header pattern that fails sends the
    /// line to the active section, without trying the remaining patterns.
    /// A later-listed header can therefore be swallowed by the section
    /// before it.
    #[default]
    FirstPatternFallthrough,
    /// Corrected behavior: every header pattern is tried; the line falls back
    /// to the active section only when none match.
    Exhaustive,
}

/// Header patterns in their fixed iteration order. The order is load-bearing
/// under `FirstPatternFallthrough`: once a section is active, only the first
/// entry here can start a new section.
fn header_patterns() -> &'static [(Category, Regex)] {
    static PATTERNS: OnceLock<Vec<(Category, Regex)>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        let pattern = |re| Regex::new(re).expect("valid header pattern");
        vec![
            (
                Category::Skills,
                pattern(r"(?i)\b(skills|technical skills|technologies|tech stack)\b"),
            ),
            (
                Category::Education,
                pattern(r"(?i)\b(education|academic|qualifications?)\b"),
            ),
            (
                Category::Experience,
                pattern(r"(?i)\b(experience|work history|employment)\b"),
            ),
            (Category::Projects, pattern(r"(?i)\b(projects?|portfolio)\b")),
            (
                Category::Achievements,
                pattern(r"(?i)\b(achievements?|accomplishments?|awards?|honors?)\b"),
            ),
            (
                Category::Certifications,
                pattern(r"(?i)\b(certifications?|certificates?|licenses?|courses?)\b"),
            ),
        ]
    })
}

/// Buckets `text` line-by-line using the historical matching behavior.
pub fn categorize(text: &str) -> SectionBuckets {
    categorize_with(text, HeaderMatching::default())
}

/// Buckets `text` line-by-line under the given matching mode.
///
/// Lines are trimmed; blank lines are skipped; lines seen before the first
/// recognized header are dropped. A line lands in at most one bucket.
pub fn categorize_with(text: &str, mode: HeaderMatching) -> SectionBuckets {
    let mut buckets = SectionBuckets::default();
    let mut current: Option<Category> = None;

    for raw in text.lines() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let mut assigned = false;
        for (category, pattern) in header_patterns() {
            if pattern.is_match(line) {
                current = Some(*category);
                buckets.push(*category, line);
                assigned = true;
                break;
            }
            if mode == HeaderMatching::FirstPatternFallthrough {
                if let Some(active) = current {
                    buckets.push(active, line);
                    assigned = true;
                    break;
                }
            }
        }

        // Exhaustive mode: no header matched, append to the active section.
        if !assigned {
            if let Some(active) = current {
                buckets.push(active, line);
            }
        }
    }

    buckets
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_buckets(buckets: &SectionBuckets) -> [&Vec<String>; 6] {
        [
            &buckets.education,
            &buckets.skills,
            &buckets.experience,
            &buckets.projects,
            &buckets.achievements,
            &buckets.certifications,
        ]
    }

    #[test]
    fn test_empty_text_yields_six_empty_buckets() {
        let buckets = categorize("");
        assert!(all_buckets(&buckets).iter().all(|b| b.is_empty()));
    }

    #[test]
    fn test_no_recognizable_header_yields_empty_buckets() {
        let buckets = categorize("John Doe\njohn@example.com\n555-0100\nSeattle, WA");
        assert!(all_buckets(&buckets).iter().all(|b| b.is_empty()));
    }

    #[test]
    fn test_serialized_mapping_always_has_six_keys() {
        let value = serde_json::to_value(categorize("")).unwrap();
        let map = value.as_object().unwrap();
        assert_eq!(map.len(), 6);
        for key in [
            "education",
            "skills",
            "experience",
            "projects",
            "achievements",
            "certifications",
        ] {
            assert!(map[key].as_array().unwrap().is_empty());
        }
    }

    #[test]
    fn test_education_then_skills_assignment() {
        let buckets = categorize("Education\nBS Computer Science\nSkills\nGo, Rust");
        assert_eq!(buckets.education, vec!["Education", "BS Computer Science"]);
        assert_eq!(buckets.skills, vec!["Skills", "Go, Rust"]);
        assert!(buckets.experience.is_empty());
    }

    #[test]
    fn test_later_header_is_swallowed_by_active_section() {
        // Once "Skills" is active, each line is tested against the skills
        // pattern only; the "Experience" header never starts its own bucket.
        let buckets = categorize("Skills\nRust\nExperience\nAcme Corp");
        assert_eq!(buckets.skills, vec!["Skills", "Rust", "Experience", "Acme Corp"]);
        assert!(buckets.experience.is_empty());
    }

    #[test]
    fn test_exhaustive_mode_recognizes_every_header() {
        let buckets = categorize_with(
            "Skills\nRust\nExperience\nAcme Corp",
            HeaderMatching::Exhaustive,
        );
        assert_eq!(buckets.skills, vec!["Skills", "Rust"]);
        assert_eq!(buckets.experience, vec!["Experience", "Acme Corp"]);
    }

    #[test]
    fn test_lines_before_first_header_are_dropped() {
        let buckets = categorize("Jane Smith\nSenior Engineer\nSkills\nRust");
        assert_eq!(buckets.skills, vec!["Skills", "Rust"]);
        assert!(buckets.education.is_empty());
    }

    #[test]
    fn test_blank_lines_skipped_and_lines_trimmed() {
        let buckets = categorize("  Skills  \n\n   \n  Rust  ");
        assert_eq!(buckets.skills, vec!["Skills", "Rust"]);
    }

    #[test]
    fn test_duplicate_lines_are_kept_in_order() {
        let buckets = categorize("Skills\nRust\nRust");
        assert_eq!(buckets.skills, vec!["Skills", "Rust", "Rust"]);
    }

    #[test]
    fn test_headers_are_case_insensitive() {
        let buckets = categorize("EDUCATION\nMS Statistics");
        assert_eq!(buckets.education, vec!["EDUCATION", "MS Statistics"]);
    }
}
