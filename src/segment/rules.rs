//! Header detection rules
//!
//! Each rule is an independent predicate over a trimmed line. A line is a
//! header if any rule matches; rules are evaluated in priority order.

use regex::Regex;
use std::sync::OnceLock;

static RE_LABELED: OnceLock<Regex> = OnceLock::new();
static RE_STRUCTURAL: OnceLock<Regex> = OnceLock::new();

/// Prioritized header rules evaluated in order
pub const HEADER_RULES: &[fn(&str) -> bool] = &[
    is_all_caps_heading,
    is_labeled_heading,
    is_structural_heading,
];

/// True if any header rule matches the trimmed line
pub fn is_header_line(trimmed: &str) -> bool {
    HEADER_RULES.iter().any(|rule| rule(trimmed))
}

/// An all-caps line longer than 10 characters, e.g. "EMPLOYEE BENEFITS"
pub fn is_all_caps_heading(trimmed: &str) -> bool {
    trimmed.chars().count() > 10 && trimmed.to_uppercase() == trimmed
}

/// A label followed by a colon, e.g. "Vacation Policy:"
pub fn is_labeled_heading(trimmed: &str) -> bool {
    let re = RE_LABELED.get_or_init(|| Regex::new(r"^[A-Z][\w\s-]+:").unwrap());
    re.is_match(trimmed)
}

/// A numbered or structural heading, e.g. "SECTION One Overview" or "3. Leave"
pub fn is_structural_heading(trimmed: &str) -> bool {
    let re = RE_STRUCTURAL
        .get_or_init(|| Regex::new(r"(?i)^(?:SECTION|ARTICLE|CHAPTER|[0-9]+\.)\s+[A-Z]").unwrap());
    re.is_match(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_caps_heading() {
        assert!(is_all_caps_heading("EMPLOYEE BENEFITS OVERVIEW"));
        assert!(is_all_caps_heading("WORKPLACE SAFETY"));
        // Too short
        assert!(!is_all_caps_heading("BENEFITS"));
        // Mixed case
        assert!(!is_all_caps_heading("Employee Benefits Overview"));
        // Digits and punctuation count as "caps"
        assert!(is_all_caps_heading("401K PLAN - DETAILS"));
    }

    #[test]
    fn test_labeled_heading() {
        assert!(is_labeled_heading("Vacation Policy:"));
        assert!(is_labeled_heading("Sick Leave: what you need to know"));
        assert!(is_labeled_heading("Work-Life Balance:"));
        assert!(!is_labeled_heading("vacation policy:"));
        assert!(!is_labeled_heading("No colon here"));
    }

    #[test]
    fn test_structural_heading() {
        assert!(is_structural_heading("SECTION One Overview"));
        assert!(is_structural_heading("section four Benefits"));
        // The keyword must be followed by a word, not a bare number
        assert!(!is_structural_heading("SECTION 2 Overview"));
        assert!(is_structural_heading("Article III Conduct"));
        assert!(is_structural_heading("CHAPTER One Introduction"));
        assert!(is_structural_heading("3. Leave of Absence"));
        assert!(!is_structural_heading("3 Leave of Absence"));
        assert!(!is_structural_heading("Sectional planning"));
    }

    #[test]
    fn test_body_lines_are_not_headers() {
        assert!(!is_header_line("Employees accrue vacation monthly."));
        assert!(!is_header_line(""));
    }
}
