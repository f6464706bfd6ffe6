//! The `"CODE Title (N credits)"` strings a plan stores per semester.
//!
//! Plans keep whatever text the client sent; these helpers only read codes and
//! credits back out of it.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CREDITS: i32 = 4;
/// Largest credit value a single plan entry may claim.
pub const MAX_COURSE_CREDITS: i32 = 20;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseEntry {
    pub course_code: String,
    pub title: String,
    pub credits: i32,
}

lazy_static! {
    static ref FULL_RE: Regex =
        Regex::new(r"^([A-Z]+-[A-Z]{2}[.\s]?\d+)\s+(.+?)\s+\((\d+)\s+credits?\)$").unwrap();
    static ref SIMPLE_RE: Regex =
        Regex::new(r"^([A-Z]+-[A-Z]{2}[.\s]?\d+)\s+(.+?)(?:\s+\((\d+)\))?$").unwrap();
}

fn normalize_code(code: &str) -> String {
    code.split_whitespace().collect::<Vec<_>>().join(".")
}

/// Parses `"CSCI-UA.0101 Introduction to Computer Science (4 credits)"`.
/// Also accepts `(1 credit)`, `(4)` or no credit suffix at all (4 credits).
pub fn parse(s: &str) -> Option<CourseEntry> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Some(caps) = FULL_RE.captures(s) {
        return Some(CourseEntry {
            course_code: normalize_code(&caps[1]),
            title: caps[2].trim().to_string(),
            credits: caps[3].parse().ok()?,
        });
    }

    let caps = SIMPLE_RE.captures(s)?;
    let credits = match caps.get(3) {
        Some(m) => m.as_str().parse().ok()?,
        None => DEFAULT_CREDITS,
    };
    Some(CourseEntry {
        course_code: normalize_code(&caps[1]),
        title: caps[2].trim().to_string(),
        credits,
    })
}

/// Best-effort course code of a plan string: the parsed code, else the first
/// whitespace-separated token.
pub fn course_code_of(s: &str) -> Option<String> {
    parse(s)
        .map(|c| c.course_code)
        .or_else(|| s.split_whitespace().next().map(str::to_string))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_format() {
        let c = parse("CSCI-UA.0101 Introduction to Computer Science (4 credits)").unwrap();
        assert_eq!(c.course_code, "CSCI-UA.0101");
        assert_eq!(c.title, "Introduction to Computer Science");
        assert_eq!(c.credits, 4);
    }

    #[test]
    fn parses_singular_credit() {
        let c = parse("MATH-UA.0120 Discrete Mathematics (1 credit)").unwrap();
        assert_eq!(c.credits, 1);
        assert_eq!(c.title, "Discrete Mathematics");
    }

    #[test]
    fn defaults_credits_without_suffix() {
        let c = parse("CSCI-UA.0101 Introduction to Computer Science").unwrap();
        assert_eq!(c.title, "Introduction to Computer Science");
        assert_eq!(c.credits, DEFAULT_CREDITS);

        let c = parse("CSCI-UA.0102 Data Structures (2)").unwrap();
        assert_eq!(c.credits, 2);
    }

    #[test]
    fn normalizes_space_in_code() {
        let c = parse("CSCI-UA 0101 Intro to CS (4 credits)").unwrap();
        assert_eq!(c.course_code, "CSCI-UA.0101");
        assert_eq!(c.title, "Intro to CS");
    }

    #[test]
    fn rejects_free_text() {
        assert_eq!(parse(""), None);
        assert_eq!(parse("   "), None);
        assert_eq!(parse("Some elective I have not picked"), None);
    }

    #[test]
    fn course_code_falls_back_to_first_token() {
        assert_eq!(
            course_code_of("CSCI-UA.0201 Computer Systems Organization (4 credits)").as_deref(),
            Some("CSCI-UA.0201")
        );
        assert_eq!(course_code_of("HIST-101 Something").as_deref(), Some("HIST-101"));
        assert_eq!(course_code_of("  "), None);
    }
}
