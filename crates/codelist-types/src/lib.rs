//! # codelist-types
//!
//! Type definitions for medical code-list datasets.
//!
//! This crate provides the data types shared by the code-list normalizer
//! and the dataset loader: the cleaned `(code, description)` record, the
//! dataset and dataset-entry rows, the uploading user, and the standard
//! reject-phrase list for source boilerplate.
//!
//! ## Features
//!
//! - `serde` (default): Enables serialization/deserialization support via serde.
//!
//! ## Usage
//!
//! ```rust
//! use codelist_types::{CodeRecord, Dataset, DatasetEntry, User};
//!
//! let user = User::placeholder();
//! let dataset = Dataset::new(
//!     "ICD-10-CM 2025",
//!     "International Classification of Diseases, 10th Revision, Clinical Modification",
//!     "icd10cm_codes_2025_standardized.txt",
//!     user.id,
//! );
//! let entry = DatasetEntry::new(
//!     dataset.id,
//!     CodeRecord::new("M54.5", "Low back pain, unspecified"),
//! );
//!
//! assert!(entry.payload.is_well_formed());
//! ```

#![warn(missing_docs)]

mod dataset;
mod ids;
mod record;
pub mod reject_phrases;
mod user;

// Re-export all public types at crate root
pub use dataset::{Dataset, DatasetEntry};
pub use ids::{DatasetId, EntryId, UserId};
pub use record::CodeRecord;
pub use user::User;
