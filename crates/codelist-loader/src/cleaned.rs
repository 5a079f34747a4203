//! Reader for normalized `code<TAB>description` files.

use std::path::Path;

use csv::ReaderBuilder;

use codelist_types::CodeRecord;

use crate::types::{LoadError, LoadResult};

/// Reads a cleaned tab-delimited file into records.
///
/// Rows that do not have exactly two fields are logged and skipped; the
/// rest of the file still loads.
///
/// # Errors
/// Returns an error if the file does not exist or cannot be read.
pub fn read_cleaned_file<P: AsRef<Path>>(path: P) -> LoadResult<Vec<CodeRecord>> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(LoadError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let mut reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_path(path)?;

    let mut records = Vec::new();
    for (index, result) in reader.records().enumerate() {
        let row = result?;
        if row.len() != 2 {
            tracing::warn!(
                "Skipping line {} of {}: expected 2 fields, found {}",
                index + 1,
                path.display(),
                row.len()
            );
            continue;
        }
        records.push(CodeRecord::new(
            row.get(0).unwrap_or(""),
            row.get(1).unwrap_or(""),
        ));
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_read_cleaned_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cleaned.txt");
        fs::write(
            &path,
            "M54.5\tLow back pain, unspecified\nE11.9\tType 2 diabetes mellitus without complications\n",
        )
        .unwrap();

        let records = read_cleaned_file(&path).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], CodeRecord::new("M54.5", "Low back pain, unspecified"));
        assert_eq!(records[1].code, "E11.9");
    }

    #[test]
    fn test_rows_with_wrong_field_count_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cleaned.txt");
        fs::write(&path, "M54.5\tLow back pain\nstray-token\nA00\tCholera\tdue to\n").unwrap();

        let records = read_cleaned_file(&path).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].code, "M54.5");
    }

    #[test]
    fn test_missing_file() {
        let err = read_cleaned_file("no_such_cleaned_file.txt").unwrap_err();
        assert!(matches!(err, LoadError::FileNotFound { .. }));
    }

    #[test]
    fn test_empty_file_yields_no_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cleaned.txt");
        fs::write(&path, "").unwrap();

        assert!(read_cleaned_file(&path).unwrap().is_empty());
    }
}
