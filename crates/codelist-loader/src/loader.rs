//! Dataset load operation.

use codelist_types::{CodeRecord, Dataset, DatasetEntry, User, UserId};

use crate::store::RecordStore;
use crate::types::{DatasetSpec, LoadReport, LoadResult};

/// Loads cleaned records into a record store as one dataset per run.
///
/// The loader is best-effort per row and transactional at the batch level:
/// a failed entry insert is logged and skipped, and everything written in
/// one run is committed together at the end.
///
/// # Example
///
/// ```
/// use codelist_loader::{DatasetLoader, DatasetSpec, MemoryStore};
/// use codelist_types::CodeRecord;
///
/// let mut loader = DatasetLoader::new(MemoryStore::new());
/// let spec = DatasetSpec::new("ICD-10-CM 2025", "diagnosis codes", "icd.txt");
/// let records = vec![CodeRecord::new("M54.5", "Low back pain, unspecified")];
///
/// let report = loader.load(&spec, &records)?;
/// assert_eq!(report.inserted, 1);
/// # Ok::<(), codelist_loader::LoadError>(())
/// ```
pub struct DatasetLoader<S: RecordStore> {
    store: S,
}

impl<S: RecordStore> DatasetLoader<S> {
    /// Creates a loader over a record store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Consumes the loader and returns the underlying store.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Loads one batch of cleaned records as a new dataset.
    ///
    /// Resolves the uploading user (creating the placeholder user if the
    /// store is empty), creates the dataset row, inserts one entry per
    /// record, and commits once. Per-entry insert failures are logged with
    /// the entry's index and content and do not abort the batch.
    ///
    /// # Errors
    /// Returns an error if the user lookup, user/dataset creation, or the
    /// final commit fails.
    pub fn load(&mut self, spec: &DatasetSpec, records: &[CodeRecord]) -> LoadResult<LoadReport> {
        let uploaded_by = self.ensure_user()?;

        let dataset = Dataset::new(&spec.name, &spec.description, &spec.source_path, uploaded_by);
        let dataset_id = self.store.create_dataset(&dataset)?;
        tracing::info!("Created dataset '{}' with id {}", spec.name, dataset_id);

        let mut inserted = 0;
        let mut failed = 0;
        for (index, record) in records.iter().enumerate() {
            let entry = DatasetEntry::new(dataset_id, record.clone());
            match self.store.create_dataset_entry(&entry) {
                Ok(_) => inserted += 1,
                Err(e) => {
                    failed += 1;
                    tracing::warn!(
                        "Failed to insert entry {} ({} / {}): {}",
                        index + 1,
                        record.code,
                        record.description,
                        e
                    );
                }
            }
        }

        self.store.commit()?;

        Ok(LoadReport {
            dataset_id,
            attempted: records.len(),
            inserted,
            failed,
        })
    }

    /// Returns the id of an existing user, creating the placeholder user
    /// if the store holds none.
    fn ensure_user(&mut self) -> LoadResult<UserId> {
        if let Some(user) = self.store.find_any_user()? {
            return Ok(user.id);
        }

        let user = User::placeholder();
        let id = self.store.create_user(&user)?;
        tracing::info!("Created default user with id {}", id);
        Ok(id)
    }
}
