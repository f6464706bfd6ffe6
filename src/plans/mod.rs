pub mod course_string;
mod dto;
pub mod handlers;
pub mod repo;
pub mod repo_types;
pub mod semester;
mod services;

use crate::state::AppState;
use axum::Router;

pub use repo_types::PlanDocument;
pub use semester::{Semester, Term};

pub fn router() -> Router<AppState> {
    Router::new().merge(handlers::plan_routes())
}
