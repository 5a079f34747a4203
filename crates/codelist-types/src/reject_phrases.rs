//! Standard reject-phrase list for code-list sources.
//!
//! CMS flat-file distributions of ICD-10-CM and HCPCS code lists mix data
//! lines with legal boilerplate, copyright notices and section headings.
//! Any line containing one of these phrases (case-insensitive substring
//! match) is boilerplate, never a code record.
//!
//! # Examples
//!
//! ```
//! use codelist_types::reject_phrases;
//!
//! assert!(reject_phrases::STANDARD.contains(&"INCLUDE"));
//! ```

/// Phrases that mark a line as source boilerplate rather than data.
pub const STANDARD: &[&str] = &[
    "future CPT",
    "the physician",
    "INCLUDE",
    "following codes",
    "vaccine codes",
    "eligible for use",
    "1CPT codes, descriptions and other data only are copyright",
    "EPO AND OTHER DIALYSIS-RELATED DRUGS",
    "This code list is effective January 1, 2025",
    "LIST OF CPT1/HCPCS CODES USED TO DEFINE CERTAIN DESIGNATED HEALTH SERVICE CATEGORIES2 UNDER SECTION 1877 OF THE SOCIAL SECURITY ACT",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_list_is_populated() {
        assert_eq!(STANDARD.len(), 10);
        assert!(STANDARD.contains(&"vaccine codes"));
    }
}
