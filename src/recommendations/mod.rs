mod dto;
pub mod handlers;
pub mod prompts;
pub mod services;

use crate::state::AppState;
use axum::Router;

pub fn router() -> Router<AppState> {
    Router::new().merge(handlers::recommendation_routes())
}
