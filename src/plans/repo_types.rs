use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use super::{course_string, semester::Semester};

/// The per-user plan document stored in `plans.semesters` (JSONB): semester
/// label → ordered course strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlanDocument(pub BTreeMap<Semester, Vec<String>>);

impl PlanDocument {
    pub fn set(&mut self, semester: Semester, courses: Vec<String>) {
        self.0.insert(semester, courses);
    }

    /// Course codes found anywhere in the plan.
    pub fn planned_codes(&self) -> HashSet<String> {
        self.0
            .values()
            .flatten()
            .filter_map(|s| course_string::course_code_of(s))
            .collect()
    }

    /// Every semester present, unsaved ones as empty lists.
    pub fn with_all_semesters(mut self) -> Self {
        for semester in Semester::ALL {
            self.0.entry(semester).or_default();
        }
        self
    }
}
