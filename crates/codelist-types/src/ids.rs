//! Identifier aliases for persisted records.
//!
//! Every persisted row (user, dataset, dataset entry) is keyed by a
//! version 4 UUID minted at creation time.

use uuid::Uuid;

/// Identifier of a [`User`](crate::User) row.
pub type UserId = Uuid;

/// Identifier of a [`Dataset`](crate::Dataset) row.
///
/// # Examples
///
/// ```
/// use codelist_types::DatasetId;
///
/// let id: DatasetId = uuid::Uuid::new_v4();
/// assert_eq!(id.get_version_num(), 4);
/// ```
pub type DatasetId = Uuid;

/// Identifier of a [`DatasetEntry`](crate::DatasetEntry) row.
pub type EntryId = Uuid;
