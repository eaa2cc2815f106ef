//! Shared test helpers for in-crate router tests.

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::config::{Config, DatabaseConfig};
use crate::storage::Database;
use crate::AppState;

/// Create a test AppState serving `catalog`, with a database in a temporary directory.
pub fn test_state(temp_dir: &tempfile::TempDir, catalog: Catalog) -> Arc<AppState> {
    let data_dir = temp_dir.path().join("data");

    let config = Config {
        database: DatabaseConfig {
            data_dir: data_dir.to_string_lossy().to_string(),
            ..Default::default()
        },
        ..Default::default()
    };

    let db = Database::open(&data_dir, &config.database.file_name)
        .expect("Failed to open test database");

    Arc::new(AppState {
        config,
        catalog: Arc::new(catalog),
        db: Some(db),
    })
}
