//! folder-notes - A small read-only HTTP API over folders of markdown notes
//!
//! This crate provides:
//! - An immutable in-memory catalog of folders and base64-encoded notes
//! - Folder lookup by integer id, falling back to name
//! - A redb database stub created at startup
//! - JSON endpoints with uniform `data` / `error` envelopes

pub mod api;
pub mod catalog;
pub mod config;
pub mod storage;
#[cfg(test)]
pub mod testutil;

use std::sync::Arc;

use catalog::Catalog;
use config::Config;
use storage::Database;

/// Shared application state
pub struct AppState {
    pub config: Config,
    pub catalog: Arc<Catalog>,
    /// `None` when the database could not be opened at startup
    pub db: Option<Database>,
}
