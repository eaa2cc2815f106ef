use axum::extract::State;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::api::response::{Data, PrettyJson};
use crate::storage::Database;
use crate::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Whether the notes database was created at startup
    pub database: bool,
}

pub async fn health(State(state): State<Arc<AppState>>) -> PrettyJson<Data<HealthResponse>> {
    let database = state.db.as_ref().is_some_and(Database::is_initialized);

    Data::success(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database,
    })
}
