// HTTP routes configuration

use crate::core::state::AppState;
use crate::handlers::{fallback, health, users};
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/users", get(users::list_users).post(users::create_user))
        .route(
            "/users/{id}",
            get(users::get_user).patch(users::update_user).post(users::update_user),
        )
        .route("/users/{id}/deactivate", post(users::deactivate_user))
        .route("/health", get(health::health_handler))

        // JSON 404 for all unmatched routes
        .fallback(fallback::fallback_handler)

        .with_state(state)
}
