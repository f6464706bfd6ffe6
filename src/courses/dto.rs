use serde::{Deserialize, Serialize};

use super::repo_types::CourseSummary;

pub const DEFAULT_SEARCH_LIMIT: i64 = 20;
pub const MAX_SEARCH_LIMIT: i64 = 100;

/// `?q=&limit=`. `limit` stays a string so a bad value becomes our own 400.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
    pub limit: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub courses: Vec<CourseSummary>,
}

impl SearchParams {
    /// `None` when `limit` is present but not an integer. Otherwise clamped to
    /// `1..=MAX_SEARCH_LIMIT`.
    pub fn effective_limit(&self) -> Option<i64> {
        match self.limit.as_deref().map(str::trim) {
            None | Some("") => Some(DEFAULT_SEARCH_LIMIT),
            Some(raw) => raw
                .parse::<i64>()
                .ok()
                .map(|n| n.clamp(1, MAX_SEARCH_LIMIT)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(limit: Option<&str>) -> SearchParams {
        SearchParams {
            q: "cs".into(),
            limit: limit.map(str::to_string),
        }
    }

    #[test]
    fn limit_defaults_and_clamps() {
        assert_eq!(params(None).effective_limit(), Some(DEFAULT_SEARCH_LIMIT));
        assert_eq!(params(Some("")).effective_limit(), Some(DEFAULT_SEARCH_LIMIT));
        assert_eq!(params(Some("5")).effective_limit(), Some(5));
        assert_eq!(params(Some("0")).effective_limit(), Some(1));
        assert_eq!(params(Some("-3")).effective_limit(), Some(1));
        assert_eq!(params(Some("5000")).effective_limit(), Some(MAX_SEARCH_LIMIT));
        assert_eq!(params(Some("ten")).effective_limit(), None);
    }
}
