//! The in-memory folder/note catalog.
//!
//! A [`Catalog`] is built once at startup, either from the built-in seed data
//! or from a JSON file, and is never mutated afterwards. Lookups are linear
//! scans; folders reference their notes collection by database key.

pub mod models;
mod seed;

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use models::{Folder, FolderRef, Note, NoteDecodeError};

/// Lookup misses. The `Display` text is the message returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("No folders")]
    NoFolders,
    #[error("Folder ID {0} not found")]
    FolderIdNotFound(String),
    #[error("Folder {0} not found")]
    FolderNotFound(String),
    #[error("Note ID {0} not found")]
    NoteIdNotFound(String),
}

#[derive(Debug, Error)]
pub enum CatalogLoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed catalog: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Note {note_id} in {database} has undecodable data: {source}")]
    InvalidNote {
        database: String,
        note_id: i64,
        source: NoteDecodeError,
    },
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Catalog {
    folders: Vec<Folder>,
    #[serde(default)]
    notes: HashMap<String, Vec<Note>>,
}

impl Catalog {
    pub fn new(folders: Vec<Folder>, notes: HashMap<String, Vec<Note>>) -> Self {
        Self { folders, notes }
    }

    /// Parse a catalog from its JSON form:
    /// `{"folders": [...], "notes": {"<dbase>": [...]}}`.
    pub fn from_json(json: &str) -> Result<Self, CatalogLoadError> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.check()?;
        Ok(catalog)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, CatalogLoadError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    fn check(&self) -> Result<(), CatalogLoadError> {
        for (database, notes) in &self.notes {
            for note in notes {
                note.markdown()
                    .map_err(|source| CatalogLoadError::InvalidNote {
                        database: database.clone(),
                        note_id: note.id,
                        source,
                    })?;
            }
        }

        for folder in &self.folders {
            if !self.notes.contains_key(&folder.database) {
                tracing::warn!(
                    folder_id = folder.id,
                    database = %folder.database,
                    "Folder has no notes collection; its notes will not be found"
                );
            }
        }

        Ok(())
    }

    // ========================================================================
    // Lookups
    // ========================================================================

    /// All folders. An empty catalog is reported as a miss, not an empty list.
    pub fn list_folders(&self) -> Result<&[Folder], CatalogError> {
        if self.folders.is_empty() {
            return Err(CatalogError::NoFolders);
        }
        Ok(&self.folders)
    }

    pub fn folder_by_id(&self, id: i64) -> Option<&Folder> {
        self.folders.iter().find(|f| f.id == id)
    }

    pub fn folder_by_name(&self, name: &str) -> Option<&Folder> {
        self.folders.iter().find(|f| f.name == name)
    }

    pub fn notes_for_folder_id(&self, id: i64) -> Option<&[Note]> {
        self.folder_by_id(id).and_then(|f| self.notes_for(f))
    }

    pub fn notes_for_folder_name(&self, name: &str) -> Option<&[Note]> {
        self.folder_by_name(name).and_then(|f| self.notes_for(f))
    }

    pub fn note_by_id(&self, folder_id: i64, note_id: i64) -> Option<&Note> {
        self.notes_for_folder_id(folder_id)?
            .iter()
            .find(|n| n.id == note_id)
    }

    fn notes_for(&self, folder: &Folder) -> Option<&[Note]> {
        self.notes.get(&folder.database).map(Vec::as_slice)
    }

    // ========================================================================
    // Path-segment resolution (integer id, falling back to name)
    // ========================================================================

    pub fn resolve_folder(&self, segment: &str) -> Result<&Folder, CatalogError> {
        match FolderRef::parse(segment) {
            FolderRef::Id(id) => self
                .folder_by_id(id)
                .ok_or_else(|| CatalogError::FolderIdNotFound(segment.to_string())),
            FolderRef::Name(name) => self
                .folder_by_name(&name)
                .ok_or(CatalogError::FolderNotFound(name)),
        }
    }

    pub fn resolve_notes(&self, segment: &str) -> Result<&[Note], CatalogError> {
        match FolderRef::parse(segment) {
            FolderRef::Id(id) => self
                .notes_for_folder_id(id)
                .ok_or_else(|| CatalogError::FolderIdNotFound(segment.to_string())),
            FolderRef::Name(name) => self
                .notes_for_folder_name(&name)
                .ok_or(CatalogError::FolderNotFound(name)),
        }
    }

    /// A note id that is not an integer can never match, so it is a plain miss.
    pub fn resolve_note(
        &self,
        folder_segment: &str,
        note_segment: &str,
    ) -> Result<&Note, CatalogError> {
        let notes = self.resolve_notes(folder_segment)?;
        note_segment
            .parse::<i64>()
            .ok()
            .and_then(|id| notes.iter().find(|n| n.id == id))
            .ok_or_else(|| CatalogError::NoteIdNotFound(note_segment.to_string()))
    }
}
