use std::collections::{BTreeSet, HashSet};

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::{
    courses::Course,
    llm::{strip_json_fences, CompletionClient, LlmError},
    majors::{requirements_for, MajorProgress},
    plans::{PlanDocument, Semester},
};

use super::{
    dto::RecommendedCourse,
    prompts::{build_user_prompt, StudentContext, SYSTEM_PROMPT},
};

/// Completed courses plus every code planned in any semester, sorted.
pub fn excluded_codes(completed: &[String], plan: &PlanDocument) -> BTreeSet<String> {
    completed
        .iter()
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty())
        .chain(plan.planned_codes())
        .collect()
}

/// Catalog entries offered in the semester's term that are not excluded.
/// Prerequisites are not checked.
pub fn available_courses(
    catalog: Vec<Course>,
    excluded: &BTreeSet<String>,
    semester: Semester,
) -> Vec<Course> {
    let term = semester.term();
    catalog
        .into_iter()
        .filter(|c| c.offered_in(term) && !excluded.contains(&c.course_code))
        .collect()
}

/// Progress toward the student's major, when its requirements are known.
/// Courses taken or planned both count.
pub fn major_progress(
    major: &str,
    excluded: &BTreeSet<String>,
    catalog: &[Course],
) -> Option<MajorProgress> {
    requirements_for(major).map(|reqs| reqs.progress(excluded, catalog))
}

#[derive(Debug, Deserialize)]
struct RawReply {
    #[serde(default)]
    courses: Vec<Value>,
}

fn credits_of(value: Option<&Value>) -> i32 {
    match value {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .and_then(|n| i32::try_from(n).ok())
            .unwrap_or(0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
        _ => 0,
    }
}

fn str_field(entry: &Value, key: &str) -> String {
    entry
        .get(key)
        .and_then(Value::as_str)
        .map(|s| s.trim().to_string())
        .unwrap_or_default()
}

/// Lenient reading of the model's reply. Entries without a course code,
/// excluded codes and repeats are dropped; nothing usable is an error.
pub fn parse_recommendations(
    raw: &str,
    excluded: &BTreeSet<String>,
) -> Result<Vec<RecommendedCourse>, LlmError> {
    let reply: RawReply = serde_json::from_str(strip_json_fences(raw))?;

    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for entry in &reply.courses {
        let course_code = str_field(entry, "course_code");
        if course_code.is_empty() {
            continue;
        }
        if excluded.contains(&course_code) {
            warn!(%course_code, "model recommended an excluded course");
            continue;
        }
        if !seen.insert(course_code.clone()) {
            continue;
        }
        out.push(RecommendedCourse {
            title: str_field(entry, "title"),
            credits: credits_of(entry.get("credits")),
            reasoning: str_field(entry, "reasoning"),
            course_code,
        });
    }

    if out.is_empty() {
        return Err(LlmError::NoCourses);
    }
    Ok(out)
}

/// One completion call, no retry.
#[instrument(skip_all, fields(%semester, candidates = candidates.len()))]
pub async fn generate(
    llm: &dyn CompletionClient,
    student: &StudentContext<'_>,
    semester: Semester,
    candidates: &[Course],
    excluded: &BTreeSet<String>,
) -> Result<Vec<RecommendedCourse>, LlmError> {
    let prompt = build_user_prompt(student, semester, candidates);
    let raw = llm.complete_json(SYSTEM_PROMPT, &prompt).await?;
    let courses = parse_recommendations(&raw, excluded)?;
    debug!(count = courses.len(), "recommendations parsed");
    Ok(courses)
}
