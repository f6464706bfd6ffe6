use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One of the eight semesters of a four-year plan. Declaration order is
/// chronological, so `Ord` sorts a plan from first to last semester.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Semester {
    #[serde(rename = "Freshman Fall")]
    FreshmanFall,
    #[serde(rename = "Freshman Spring")]
    FreshmanSpring,
    #[serde(rename = "Sophomore Fall")]
    SophomoreFall,
    #[serde(rename = "Sophomore Spring")]
    SophomoreSpring,
    #[serde(rename = "Junior Fall")]
    JuniorFall,
    #[serde(rename = "Junior Spring")]
    JuniorSpring,
    #[serde(rename = "Senior Fall")]
    SeniorFall,
    #[serde(rename = "Senior Spring")]
    SeniorSpring,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Term {
    Fall,
    Spring,
}

impl Term {
    /// Label used in the catalog's `semesters_offered`.
    pub fn as_str(self) -> &'static str {
        match self {
            Term::Fall => "Fall",
            Term::Spring => "Spring",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown semester '{0}'")]
pub struct UnknownSemester(pub String);

impl Semester {
    pub const ALL: [Semester; 8] = [
        Semester::FreshmanFall,
        Semester::FreshmanSpring,
        Semester::SophomoreFall,
        Semester::SophomoreSpring,
        Semester::JuniorFall,
        Semester::JuniorSpring,
        Semester::SeniorFall,
        Semester::SeniorSpring,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Semester::FreshmanFall => "Freshman Fall",
            Semester::FreshmanSpring => "Freshman Spring",
            Semester::SophomoreFall => "Sophomore Fall",
            Semester::SophomoreSpring => "Sophomore Spring",
            Semester::JuniorFall => "Junior Fall",
            Semester::JuniorSpring => "Junior Spring",
            Semester::SeniorFall => "Senior Fall",
            Semester::SeniorSpring => "Senior Spring",
        }
    }

    /// Position in the plan, 0..=7.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn term(self) -> Term {
        if self.index() % 2 == 0 {
            Term::Fall
        } else {
            Term::Spring
        }
    }
}

impl fmt::Display for Semester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Semester {
    type Err = UnknownSemester;

    /// Case-insensitive; runs of whitespace count as one space.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.split_whitespace().collect::<Vec<_>>().join(" ");
        Semester::ALL
            .into_iter()
            .find(|sem| sem.label().eq_ignore_ascii_case(&normalized))
            .ok_or_else(|| UnknownSemester(s.to_string()))
    }
}
