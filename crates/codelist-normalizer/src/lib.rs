//! # codelist-normalizer
//!
//! Line normalizer and filter for flat-file medical code lists.
//!
//! Raw ICD-10-CM and HCPCS distributions mix `code  description` data
//! lines with headers, legal boilerplate and paragraph notes, in varying
//! encodings and with variable spacing. This crate decodes such a file,
//! decides line by line whether it is a genuine `(code, description)`
//! record, and emits the accepted records in a normalized tab-delimited
//! form.
//!
//! ## Usage
//!
//! ```no_run
//! use codelist_normalizer::{normalize_file, FilterConfig};
//!
//! let stats = normalize_file(
//!     "icd10cm_codes_2025.txt",
//!     "icd10cm_codes_2025_standardized.txt",
//!     &FilterConfig::default(),
//! )?;
//! println!("accepted {} of {} lines", stats.accepted, stats.lines_read);
//! # Ok::<(), codelist_normalizer::NormalizeError>(())
//! ```

#![warn(missing_docs)]

mod classify;
mod encoding;
mod filter;
mod normalize;
mod types;

pub use classify::{classify, LineClass};
pub use encoding::decode_file;
pub use filter::LineFilter;
pub use normalize::normalize_file;
pub use types::{FilterConfig, NormalizeError, NormalizeResult, NormalizeStats};

// Re-export codelist-types for convenience
pub use codelist_types;
