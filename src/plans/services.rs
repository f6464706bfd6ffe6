use crate::errors::AppError;

use super::{course_string, dto::SavePlanRequest, semester::Semester};

pub const MAX_COURSES_PER_SEMESTER: usize = 12;
pub const MAX_COURSE_STRING_LEN: usize = 200;

/// Checks a save request. Course strings are stored verbatim.
pub fn validate_save(req: SavePlanRequest) -> Result<(Semester, Vec<String>), AppError> {
    if req.semester.trim().is_empty() {
        return Err(AppError::Validation("Missing required field: semester".into()));
    }
    let semester: Semester = req
        .semester
        .parse()
        .map_err(|e: super::semester::UnknownSemester| AppError::Validation(e.to_string()))?;

    if req.courses.len() > MAX_COURSES_PER_SEMESTER {
        return Err(AppError::Validation(format!(
            "at most {MAX_COURSES_PER_SEMESTER} courses per semester"
        )));
    }
    if let Some(long) = req
        .courses
        .iter()
        .find(|c| c.chars().count() > MAX_COURSE_STRING_LEN)
    {
        return Err(AppError::Validation(format!(
            "course entry longer than {MAX_COURSE_STRING_LEN} characters: '{}...'",
            long.chars().take(40).collect::<String>()
        )));
    }

    if let Some(entry) = req
        .courses
        .iter()
        .filter_map(|c| course_string::parse(c))
        .find(|c| c.credits > course_string::MAX_COURSE_CREDITS)
    {
        return Err(AppError::Validation(format!(
            "{} claims {} credits; at most {} per course",
            entry.course_code,
            entry.credits,
            course_string::MAX_COURSE_CREDITS
        )));
    }

    Ok((semester, req.courses))
}

/// Credits of the entries that parse as course strings; free text counts 0.
pub fn total_credits(courses: &[String]) -> i32 {
    courses
        .iter()
        .filter_map(|c| course_string::parse(c))
        .fold(0i32, |total, c| total.saturating_add(c.credits))
}
