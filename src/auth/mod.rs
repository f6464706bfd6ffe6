use crate::state::AppState;
use axum::Router;

mod dto;
pub mod handlers;
pub mod repo;
mod repo_types;
pub mod services;
pub mod tokens;

pub use services::{require_user, AuthUser};

pub fn router() -> Router<AppState> {
    Router::new().merge(handlers::auth_routes())
}
