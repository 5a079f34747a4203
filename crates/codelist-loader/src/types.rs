//! Loader-specific types: errors, configuration and the load report.

use std::path::PathBuf;

use thiserror::Error;

use codelist_types::DatasetId;

/// Errors raised by a record store implementation.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Underlying SQLite error.
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Entry payload could not be serialized.
    #[error("Failed to serialize entry payload: {0}")]
    Serialize(#[from] serde_json::Error),

    /// A stored identifier was not a valid UUID.
    #[error("Invalid UUID in store: {value}")]
    InvalidId {
        /// The invalid value that was encountered.
        value: String,
    },

    /// A stored timestamp was not valid RFC 3339.
    #[error("Invalid timestamp in store: {value}")]
    InvalidTimestamp {
        /// The invalid value that was encountered.
        value: String,
    },
}

/// Result type for record store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur during a dataset load.
#[derive(Error, Debug)]
pub enum LoadError {
    /// I/O error reading a cleaned file.
    #[error("IO error reading cleaned file: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing error in a cleaned file.
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// Cleaned file not found.
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Record store failure that aborts the load.
    #[error("Record store error: {0}")]
    Store(#[from] StoreError),
}

/// Result type for loader operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Connection settings for the SQLite-backed record store.
///
/// Passed to [`SqliteStore::open`](crate::SqliteStore::open); there is no
/// process-wide store configuration.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Path of the database file.
    pub path: PathBuf,
}

impl StoreConfig {
    /// Creates a config for a database file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

/// Metadata describing one dataset to be loaded.
#[derive(Debug, Clone)]
pub struct DatasetSpec {
    /// Display name, e.g. `"ICD-10-CM 2025"`.
    pub name: String,
    /// Free-text description of the code list.
    pub description: String,
    /// Path of the cleaned file the records came from.
    pub source_path: String,
}

impl DatasetSpec {
    /// Creates a dataset spec.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        source_path: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            source_path: source_path.into(),
        }
    }
}

/// Outcome of one dataset load run.
///
/// `inserted` counts successful entry inserts only; `failed` counts
/// per-entry failures that were logged and skipped. `attempted` is always
/// `inserted + failed`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    /// The dataset the entries were attached to.
    pub dataset_id: DatasetId,
    /// Number of entry inserts attempted.
    pub attempted: usize,
    /// Number of entries actually inserted.
    pub inserted: usize,
    /// Number of entry inserts that failed.
    pub failed: usize,
}

impl LoadReport {
    /// Returns true if every attempted entry was inserted.
    pub fn all_inserted(&self) -> bool {
        self.failed == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_load_report_all_inserted() {
        let clean = LoadReport {
            dataset_id: Uuid::new_v4(),
            attempted: 3,
            inserted: 3,
            failed: 0,
        };
        let partial = LoadReport {
            failed: 1,
            inserted: 2,
            ..clean.clone()
        };

        assert!(clean.all_inserted());
        assert!(!partial.all_inserted());
    }

    #[test]
    fn test_store_config_path() {
        let config = StoreConfig::new("codelists.db");
        assert_eq!(config.path, PathBuf::from("codelists.db"));
    }
}
