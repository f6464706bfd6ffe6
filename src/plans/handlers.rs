use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    auth::{require_user, AuthUser},
    errors::{ApiJson, AppError},
    state::AppState,
};

use super::{
    dto::{SavePlanRequest, SavePlanResponse},
    repo,
    repo_types::PlanDocument,
    services::{total_credits, validate_save},
};

pub fn plan_routes() -> Router<AppState> {
    Router::new()
        .route("/plans/load", get(load_plans))
        .route("/plans/save", post(save_plan))
}

/// GET /plans/load
#[instrument(skip(state))]
pub async fn load_plans(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<PlanDocument>, AppError> {
    require_user(&state.db, user_id).await?;
    let doc = repo::load(&state.db, user_id).await?;
    Ok(Json(doc.with_all_semesters()))
}

/// POST /plans/save { semester, courses: [..] }
#[instrument(skip(state, payload))]
pub async fn save_plan(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    ApiJson(payload): ApiJson<SavePlanRequest>,
) -> Result<Json<SavePlanResponse>, AppError> {
    let (semester, courses) = validate_save(payload).map_err(|e| {
        warn!(%user_id, error = %e, "rejected plan save");
        e
    })?;
    let credits = total_credits(&courses);

    require_user(&state.db, user_id).await?;
    repo::save_semester(&state.db, user_id, semester, &courses).await?;

    info!(%user_id, %semester, count = courses.len(), credits, "semester plan saved");
    Ok(Json(SavePlanResponse {
        message: "Semester plan saved successfully",
        semester: semester.label().to_string(),
        courses_count: courses.len(),
        total_credits: credits,
    }))
}
