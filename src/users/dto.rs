use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Profile as returned to the client. No credentials.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub netid: String,
    pub major: String,
    pub year: String,
    pub interests: Vec<String>,
    pub completed_courses: Vec<String>,
}

/// Partial update; absent fields are left unchanged.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateProfileRequest {
    pub major: Option<String>,
    pub year: Option<String>,
    pub interests: Option<Vec<String>>,
}

impl UpdateProfileRequest {
    pub fn is_empty(&self) -> bool {
        self.major.is_none() && self.year.is_none() && self.interests.is_none()
    }
}

#[derive(Debug, Serialize)]
pub struct UpdateProfileResponse {
    pub message: &'static str,
    pub profile: Profile,
}

#[derive(Debug, Deserialize)]
pub struct CompletedCoursesRequest {
    pub completed_courses: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct CompletedCoursesResponse {
    pub message: &'static str,
    pub completed_courses: Vec<String>,
}

/// Trims, drops blanks and removes duplicates, keeping first occurrences.
pub fn normalize_list(items: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(items.len());
    for item in items {
        let item = item.trim();
        if !item.is_empty() && !out.iter().any(|seen| seen == item) {
            out.push(item.to_string());
        }
    }
    out
}
