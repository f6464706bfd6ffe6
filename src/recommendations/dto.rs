use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub semester: String,
    #[serde(default)]
    pub career_path: String,
    #[serde(default)]
    pub side_interests: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecommendedCourse {
    pub course_code: String,
    pub title: String,
    pub credits: i32,
    pub reasoning: String,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub courses: Vec<RecommendedCourse>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_fields_default() {
        let req: GenerateRequest = serde_json::from_str(r#"{"semester":"Junior Fall"}"#).unwrap();
        assert_eq!(req.semester, "Junior Fall");
        assert!(req.career_path.is_empty());
        assert!(req.side_interests.is_empty());
    }
}
