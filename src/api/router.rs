use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use super::health;
use super::state::AppState;
use super::users;

/// Create the application router with its state attached
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // User management pages
        .route("/", get(users::index))
        .route("/criar", get(users::criar_form).post(users::criar))
        .route("/editar/{id}", get(users::editar_form).post(users::editar))
        .route("/excluir/{id}", get(users::excluir))
        // Health endpoints
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        // Add state and middleware
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
