use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/fetch", post(handlers::fetch_page))
        .route("/validate", post(handlers::validate_url))
        .route("/cache/stats", get(handlers::get_cache_stats))
        .route("/cache/clear", post(handlers::clear_cache))
        .route("/admission/stats", get(handlers::get_admission_stats))
        .route("/admission/clear", post(handlers::clear_admission))
        .with_state(state)
}
