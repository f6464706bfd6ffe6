use axum::{extract::State, routing::post, Json, Router};
use tracing::{info, instrument, warn};

use crate::{
    auth::AuthUser,
    courses,
    errors::{ApiJson, AppError},
    plans::{self, Semester},
    state::AppState,
    users,
};

use super::{
    dto::{GenerateRequest, GenerateResponse},
    prompts::StudentContext,
    services::{available_courses, excluded_codes, generate, major_progress},
};

pub fn recommendation_routes() -> Router<AppState> {
    Router::new().route("/recommendations/generate", post(generate_recommendations))
}

/// POST /recommendations/generate { semester, career_path?, side_interests? }
#[instrument(skip(state, payload))]
pub async fn generate_recommendations(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    ApiJson(payload): ApiJson<GenerateRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    let semester: Semester = payload.semester.parse().map_err(|e| {
        warn!(%user_id, error = %e, "rejected recommendation request");
        AppError::Validation(format!("{e}"))
    })?;

    let profile = users::repo::find_profile(&state.db, user_id)
        .await?
        .ok_or_else(|| AppError::Unauthorized("Unauthorized: User not found".into()))?;
    let plan = plans::repo::load(&state.db, user_id).await?;
    let catalog = courses::repo::list_all(&state.db).await?;
    let catalog_size = catalog.len();

    let excluded = excluded_codes(&profile.completed_courses, &plan);
    let progress = major_progress(&profile.major, &excluded, &catalog);
    let candidates = available_courses(catalog, &excluded, semester);

    if candidates.is_empty() {
        warn!(%user_id, %semester, catalog_size, excluded = excluded.len(), "no candidate courses");
        let reason = if catalog_size == 0 {
            "The course catalog is empty."
        } else {
            "Every course offered that term is already completed or planned."
        };
        return Err(AppError::NotFound(format!(
            "No available courses found for {semester}. {reason}"
        )));
    }

    let excluded_list: Vec<String> = excluded.iter().cloned().collect();
    let side_interests: Vec<String> = payload
        .side_interests
        .iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();
    let student = StudentContext {
        name: &profile.name,
        major: &profile.major,
        year: &profile.year,
        interests: &profile.interests,
        career_path: payload.career_path.trim(),
        side_interests: &side_interests,
        excluded: &excluded_list,
        progress: progress.as_ref(),
    };

    let courses = generate(
        state.llm.as_ref(),
        &student,
        semester,
        &candidates,
        &excluded,
    )
    .await?;

    info!(%user_id, %semester, count = courses.len(), "recommendations generated");
    Ok(Json(GenerateResponse { courses }))
}
