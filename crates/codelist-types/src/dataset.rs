//! Dataset and dataset-entry types.
//!
//! A `Dataset` is the metadata row for one batch load; a `DatasetEntry` is
//! one persisted code/description record belonging to it. Both are created
//! during a load run and never updated afterwards.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{CodeRecord, DatasetId, EntryId, UserId};

/// A named, described collection of code/description pairs loaded in one
/// batch.
///
/// # Examples
///
/// ```
/// use codelist_types::{Dataset, User};
///
/// let user = User::placeholder();
/// let dataset = Dataset::new(
///     "ICD-10-CM 2025",
///     "International Classification of Diseases, 10th Revision, Clinical Modification",
///     "icd10cm_codes_2025_standardized.txt",
///     user.id,
/// );
///
/// assert_eq!(dataset.uploaded_by, user.id);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dataset {
    /// Unique identifier for this dataset.
    pub id: DatasetId,
    /// Display name, e.g. `"ICD-10-CM 2025"`.
    pub name: String,
    /// Free-text description of the code list.
    pub description: String,
    /// Path of the cleaned file this dataset was loaded from.
    pub source_path: String,
    /// The user this dataset is attributed to.
    pub uploaded_by: UserId,
    /// When this dataset was created.
    pub uploaded_at: DateTime<Utc>,
}

impl Dataset {
    /// Creates a dataset with a fresh identifier and the current time.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        source_path: impl Into<String>,
        uploaded_by: UserId,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: description.into(),
            source_path: source_path.into(),
            uploaded_by,
            uploaded_at: Utc::now(),
        }
    }
}

/// One persisted code/description record belonging to a [`Dataset`].
///
/// The payload is stored as structured key-value data by record stores
/// (a JSON object with `code` and `description` keys).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DatasetEntry {
    /// Unique identifier for this entry.
    pub id: EntryId,
    /// The dataset this entry belongs to.
    pub dataset_id: DatasetId,
    /// The cleaned record carried by this entry.
    pub payload: CodeRecord,
    /// When this entry was created.
    pub created_at: DateTime<Utc>,
}

impl DatasetEntry {
    /// Creates an entry with a fresh identifier and the current time.
    pub fn new(dataset_id: DatasetId, payload: CodeRecord) -> Self {
        Self {
            id: Uuid::new_v4(),
            dataset_id,
            payload,
            created_at: Utc::now(),
        }
    }
}
