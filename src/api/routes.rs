use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::handlers;
use crate::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Folders
        .route("/folders", get(handlers::list_folders))
        .route("/folders/:folder", get(handlers::get_folder))
        // Notes
        .route("/folders/:folder/notes", get(handlers::list_notes))
        .route("/folders/:folder/notes/:note", get(handlers::get_note))
        // Internal
        .route("/_internal/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
