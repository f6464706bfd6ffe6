use axum::{
    extract::State,
    routing::{get, put},
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    auth::AuthUser,
    errors::{ApiJson, AppError},
    state::AppState,
};

use super::{
    dto::{
        normalize_list, CompletedCoursesRequest, CompletedCoursesResponse, Profile,
        UpdateProfileRequest, UpdateProfileResponse,
    },
    repo,
};

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/profile", get(get_profile).put(update_profile))
        .route("/users/completed-courses", put(update_completed_courses))
}

/// A valid token whose account is gone, answered like the auth extractor would.
fn user_not_found() -> AppError {
    AppError::Unauthorized("Unauthorized: User not found".into())
}

/// GET /users/profile
#[instrument(skip(state))]
pub async fn get_profile(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Profile>, AppError> {
    let profile = repo::find_profile(&state.db, user_id)
        .await?
        .ok_or_else(user_not_found)?;
    Ok(Json(profile))
}

/// PUT /users/profile { major?, year?, interests? }
#[instrument(skip(state, payload))]
pub async fn update_profile(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    ApiJson(payload): ApiJson<UpdateProfileRequest>,
) -> Result<Json<UpdateProfileResponse>, AppError> {
    if payload.is_empty() {
        warn!(%user_id, "empty profile update");
        return Err(AppError::Validation("No profile fields provided".into()));
    }

    let major = payload.major.as_deref().map(str::trim);
    let year = payload.year.as_deref().map(str::trim);
    let interests = payload.interests.map(normalize_list);

    let profile = repo::update_profile(&state.db, user_id, major, year, interests.as_deref())
        .await?
        .ok_or_else(user_not_found)?;

    info!(%user_id, "profile updated");
    Ok(Json(UpdateProfileResponse {
        message: "Profile updated successfully",
        profile,
    }))
}

/// PUT /users/completed-courses { completed_courses: [..] }
#[instrument(skip(state, payload))]
pub async fn update_completed_courses(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    ApiJson(payload): ApiJson<CompletedCoursesRequest>,
) -> Result<Json<CompletedCoursesResponse>, AppError> {
    let codes = normalize_list(payload.completed_courses);

    if !repo::set_completed_courses(&state.db, user_id, &codes).await? {
        return Err(user_not_found());
    }

    info!(%user_id, count = codes.len(), "completed courses updated");
    Ok(Json(CompletedCoursesResponse {
        message: "Completed courses updated successfully",
        completed_courses: codes,
    }))
}
