//! Degree requirements per major and a student's progress against them.
//!
//! Progress is informational: it feeds the recommendation prompt and never
//! blocks a plan.

mod computer_science;

use std::collections::BTreeSet;

use crate::courses::Course;

#[derive(Debug)]
pub struct RequiredCourse {
    pub course_code: &'static str,
    pub name: &'static str,
    pub prerequisites: &'static [&'static str],
    pub semesters_offered: &'static [&'static str],
    pub notes: &'static str,
}

#[derive(Debug)]
pub struct NamedCourse {
    pub course_code: &'static str,
    pub name: &'static str,
}

/// `count` courses matching `pattern`; up to `max_substitutions` of them may
/// be replaced by courses from `substitutions`.
#[derive(Debug)]
pub struct ElectiveRule {
    pub count: usize,
    pub pattern: &'static str,
    pub substitutions: &'static [NamedCourse],
    pub max_substitutions: usize,
}

#[derive(Debug)]
pub struct MajorRequirements {
    pub name: &'static str,
    pub total_courses_required: usize,
    pub total_credits_required: u32,
    pub core: &'static [RequiredCourse],
    pub electives: ElectiveRule,
}

static ALL: &[&MajorRequirements] = &[&computer_science::REQUIREMENTS];

/// Case-insensitive lookup by major name.
pub fn requirements_for(major: &str) -> Option<&'static MajorRequirements> {
    let major = major.trim();
    ALL.iter()
        .copied()
        .find(|r| r.name.eq_ignore_ascii_case(major))
}

/// Matches a course code against a requirement pattern: an exact code,
/// `CSCI-UA.04xx` (any two trailing digits) or `MATH-UA.0121+` (same prefix,
/// number at least 121).
pub fn matches_pattern(code: &str, pattern: &str) -> bool {
    if code == pattern {
        return true;
    }
    if let Some(prefix) = pattern.strip_suffix("xx") {
        return code.len() == pattern.len()
            && code.starts_with(prefix)
            && code[prefix.len()..].bytes().all(|b| b.is_ascii_digit());
    }
    if let Some(base) = pattern.strip_suffix('+') {
        let (Some((code_prefix, code_num)), Some((min_prefix, min_num))) =
            (code.rsplit_once('.'), base.rsplit_once('.'))
        else {
            return false;
        };
        return match (code_num.parse::<u32>(), min_num.parse::<u32>()) {
            (Ok(n), Ok(min)) => code_prefix == min_prefix && n >= min,
            _ => false,
        };
    }
    false
}

#[derive(Debug)]
pub struct MajorProgress {
    pub requirements: &'static MajorRequirements,
    pub core_completed: Vec<&'static str>,
    pub core_remaining: Vec<&'static RequiredCourse>,
    /// Catalog courses matching the elective pattern, then accepted substitutes.
    pub electives_completed: Vec<String>,
    pub substitutions_used: Vec<&'static str>,
    pub electives_remaining: usize,
}

impl MajorRequirements {
    /// Progress given the codes already taken or planned. Regular electives
    /// only count when the catalog knows them.
    pub fn progress(&'static self, done: &BTreeSet<String>, catalog: &[Course]) -> MajorProgress {
        let (core_completed, core_remaining): (Vec<_>, Vec<_>) = self
            .core
            .iter()
            .partition(|req| done.contains(req.course_code));

        let mut electives_completed: Vec<String> = catalog
            .iter()
            .filter(|c| done.contains(&c.course_code))
            .filter(|c| matches_pattern(&c.course_code, self.electives.pattern))
            .map(|c| c.course_code.clone())
            .collect();

        let substitutions_used: Vec<&'static str> = self
            .electives
            .substitutions
            .iter()
            .map(|s| s.course_code)
            .filter(|code| done.contains(*code))
            .take(self.electives.max_substitutions)
            .collect();
        electives_completed.extend(substitutions_used.iter().map(|c| c.to_string()));

        MajorProgress {
            requirements: self,
            core_completed: core_completed.into_iter().map(|r| r.course_code).collect(),
            core_remaining,
            electives_remaining: self.electives.count.saturating_sub(electives_completed.len()),
            electives_completed,
            substitutions_used,
        }
    }
}

impl MajorProgress {
    /// Core plus elective courses counted toward the major.
    pub fn courses_completed(&self) -> usize {
        self.core_completed.len() + self.electives_completed.len()
    }

    pub fn percentage(&self) -> f64 {
        let required = self.requirements.total_courses_required;
        if required == 0 {
            return 0.0;
        }
        let counted = self.courses_completed().min(required);
        counted as f64 * 100.0 / required as f64
    }
}
