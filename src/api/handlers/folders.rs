use axum::extract::{Path, State};
use std::sync::Arc;

use crate::api::response::{ApiError, Data, PrettyJson};
use crate::catalog::models::{Folder, Note};
use crate::AppState;

// ============================================================================
// Handlers
// ============================================================================

/// Route: GET /folders
pub async fn list_folders(
    State(state): State<Arc<AppState>>,
) -> Result<PrettyJson<Data<Vec<Folder>>>, ApiError> {
    let folders = state.catalog.list_folders()?;
    Ok(Data::success(folders.to_vec()))
}

/// Route: GET /folders/:folder
///
/// `folder` is an id when it parses as an integer, otherwise a name.
pub async fn get_folder(
    State(state): State<Arc<AppState>>,
    Path(folder): Path<String>,
) -> Result<PrettyJson<Data<Folder>>, ApiError> {
    let found = state.catalog.resolve_folder(&folder)?;
    Ok(Data::success(found.clone()))
}

/// Route: GET /folders/:folder/notes
pub async fn list_notes(
    State(state): State<Arc<AppState>>,
    Path(folder): Path<String>,
) -> Result<PrettyJson<Data<Vec<Note>>>, ApiError> {
    let notes = state.catalog.resolve_notes(&folder)?;
    Ok(Data::success(notes.to_vec()))
}

/// Route: GET /folders/:folder/notes/:note
pub async fn get_note(
    State(state): State<Arc<AppState>>,
    Path((folder, note)): Path<(String, String)>,
) -> Result<PrettyJson<Data<Note>>, ApiError> {
    let found = state.catalog.resolve_note(&folder, &note)?;
    Ok(Data::success(found.clone()))
}
