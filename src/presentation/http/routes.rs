//! Verb+path to handler mapping.

use axum::{
    routing::{get, patch, post},
    Router,
};
use tower_http::services::ServeDir;

use super::handlers;
use crate::startup::AppState;

/// Assemble the full router: the versioned API, liveness, and static
/// files out of the configured directory.
pub fn create_router(state: AppState) -> Router {
    let static_dir = state.settings.server.static_dir.clone();

    Router::new()
        .nest("/api/v1", api_routes())
        .route("/health", get(handlers::health::health_check))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/messages", message_routes())
        .nest("/user", user_routes())
}

fn message_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::message::get_messages).post(handlers::message::create_message),
        )
        .route("/{id}", patch(handlers::message::update_message))
}

fn user_routes() -> Router<AppState> {
    Router::new().route("/", post(handlers::user::create_user))
}
