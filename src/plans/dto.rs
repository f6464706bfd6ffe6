use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct SavePlanRequest {
    pub semester: String,
    #[serde(default)]
    pub courses: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct SavePlanResponse {
    pub message: &'static str,
    pub semester: String,
    pub courses_count: usize,
    pub total_credits: i32,
}
