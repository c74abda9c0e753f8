//! API endpoints.

pub mod user;

use std::sync::Arc;

use axum::{Router, routing::get, routing::post};
use user_store::UserStore;

use crate::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router<S: UserStore + 'static>() -> Router<Arc<AppState<S>>> {
    Router::new()
        // User record endpoints
        .route("/api/users", post(user::create_user).get(user::list_users))
        .route(
            "/api/users/:id",
            get(user::get_user)
                .patch(user::update_user)
                .delete(user::delete_user),
        )
        // Health check
        .route("/health", get(health_check))
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
