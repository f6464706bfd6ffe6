use axum::{
    extract::State,
    routing::get,
    Json, Router,
};
use tracing::{debug, instrument};

use crate::{
    errors::{ApiQuery, AppError},
    state::AppState,
};

use super::{
    dto::{SearchParams, SearchResponse},
    repo,
};

pub fn course_routes() -> Router<AppState> {
    Router::new().route("/courses/search", get(search_courses))
}

/// GET /courses/search?q=&limit=
///
/// A blank query answers with an empty list without touching the database.
#[instrument(skip(state))]
pub async fn search_courses(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<SearchParams>,
) -> Result<Json<SearchResponse>, AppError> {
    let limit = params
        .effective_limit()
        .ok_or_else(|| AppError::Validation("limit must be an integer".into()))?;

    let query = params.q.trim();
    if query.is_empty() {
        return Ok(Json(SearchResponse { courses: vec![] }));
    }

    let courses = repo::search(&state.db, query, limit).await?;
    debug!(query, hits = courses.len(), "course search");
    Ok(Json(SearchResponse { courses }))
}
