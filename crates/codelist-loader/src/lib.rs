//! # codelist-loader
//!
//! Dataset loader for cleaned medical code-list records.
//!
//! Given a cleaned `code<TAB>description` file and dataset metadata, this
//! crate creates one dataset row and one entry row per record in a
//! relational store, attributed to an uploading user (synthesized with
//! placeholder credentials if the store is empty). Loading is append-only:
//! best-effort per row, committed once per run.
//!
//! The store is an abstraction ([`RecordStore`]) with two implementations:
//! [`MemoryStore`] for tests and embedding, and [`SqliteStore`] for
//! durable storage.
//!
//! ## Usage
//!
//! ```no_run
//! use codelist_loader::{
//!     read_cleaned_file, DatasetLoader, DatasetSpec, SqliteStore, StoreConfig,
//! };
//!
//! let records = read_cleaned_file("icd10cm_codes_2025_standardized.txt")?;
//! let store = SqliteStore::open(&StoreConfig::new("codelists.db"))?;
//! let mut loader = DatasetLoader::new(store);
//!
//! let report = loader.load(
//!     &DatasetSpec::new(
//!         "ICD-10-CM 2025",
//!         "International Classification of Diseases, 10th Revision, Clinical Modification",
//!         "icd10cm_codes_2025_standardized.txt",
//!     ),
//!     &records,
//! )?;
//! println!("inserted {} of {} entries", report.inserted, report.attempted);
//! # Ok::<(), codelist_loader::LoadError>(())
//! ```

#![warn(missing_docs)]

mod cleaned;
mod loader;
mod sqlite;
mod store;
mod types;

pub use cleaned::read_cleaned_file;
pub use loader::DatasetLoader;
pub use sqlite::SqliteStore;
pub use store::{MemoryStore, RecordStore};
pub use types::{
    DatasetSpec, LoadError, LoadReport, LoadResult, StoreConfig, StoreError, StoreResult,
};

// Re-export codelist-types for convenience
pub use codelist_types;
