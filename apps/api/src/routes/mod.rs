pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::recommendation::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Profile
        .route(
            "/api/v1/profile/completion",
            post(handlers::handle_profile_completion),
        )
        // Candidate catalog
        .route("/api/v1/candidates", get(handlers::handle_list_candidates))
        .route("/api/v1/candidates/:id", get(handlers::handle_get_candidate))
        .route(
            "/api/v1/candidates/:id/explain",
            post(handlers::handle_explain),
        )
        // Recommendations
        .route(
            "/api/v1/recommendations",
            post(handlers::handle_recommendations),
        )
        .with_state(state)
}
