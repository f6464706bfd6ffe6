use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::plans::Term;

/// Catalog entry. Reference data: written by the seeder, read by everything
/// else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Course {
    pub course_code: String,
    pub title: String,
    pub subject: String,
    pub category: String,
    pub credits: i32,
    pub difficulty: i32,
    #[serde(default)]
    pub prerequisites: Vec<String>, // informational, never enforced
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub semesters_offered: Vec<String>, // "Fall" | "Spring" | "Summer"
}

impl Course {
    pub fn offered_in(&self, term: Term) -> bool {
        self.semesters_offered
            .iter()
            .any(|s| s.eq_ignore_ascii_case(term.as_str()))
    }
}

/// What search returns per match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct CourseSummary {
    pub course_code: String,
    pub title: String,
    pub credits: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(offered: &[&str]) -> Course {
        Course {
            course_code: "CSCI-UA.0202".into(),
            title: "Operating Systems".into(),
            subject: "CSCI-UA".into(),
            category: "CS Requirement".into(),
            credits: 4,
            difficulty: 5,
            prerequisites: vec!["CSCI-UA.0201".into()],
            description: String::new(),
            semesters_offered: offered.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn offered_in_matches_term_labels() {
        let c = course(&["Fall", "summer"]);
        assert!(c.offered_in(Term::Fall));
        assert!(!c.offered_in(Term::Spring));
        assert!(!course(&[]).offered_in(Term::Fall));
    }
}
