pub mod health;
pub mod parse;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/parse-resume/", post(parse::handle_parse_resume))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
