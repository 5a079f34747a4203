//! Normalizer-specific types for code-list file processing.

use thiserror::Error;

use codelist_types::{reject_phrases, CodeRecord};

/// Errors that can occur while normalizing a code-list file.
#[derive(Error, Debug)]
pub enum NormalizeError {
    /// I/O error reading or writing a code-list file.
    #[error("IO error processing code-list file: {0}")]
    Io(#[from] std::io::Error),

    /// Input file not found.
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Input bytes could not be decoded under the detected encoding.
    #[error("Cannot decode {path} as {encoding}")]
    Decode {
        /// The file that failed to decode.
        path: String,
        /// The encoding that was attempted.
        encoding: String,
    },
}

/// Result type for normalizer operations.
pub type NormalizeResult<T> = Result<T, NormalizeError>;

/// Configuration for line classification.
///
/// The defaults reproduce the standard code-list filter: the boilerplate
/// phrase list from [`codelist_types::reject_phrases`], codes of at most
/// 7 characters, and descriptions of at least 3 words.
#[derive(Debug, Clone)]
pub struct FilterConfig {
    /// Phrases that mark a line as boilerplate (case-insensitive
    /// substring match).
    pub reject_phrases: Vec<String>,
    /// Maximum length of a code token, in characters.
    pub max_code_chars: usize,
    /// Minimum number of whitespace-delimited words in a description.
    pub min_description_words: usize,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            reject_phrases: reject_phrases::STANDARD
                .iter()
                .map(|p| p.to_string())
                .collect(),
            max_code_chars: CodeRecord::MAX_CODE_CHARS,
            min_description_words: CodeRecord::MIN_DESCRIPTION_WORDS,
        }
    }
}

impl FilterConfig {
    /// Creates a config with a custom reject-phrase list and default shape
    /// thresholds.
    pub fn with_phrases<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            reject_phrases: phrases.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// Returns true if the line contains any reject phrase, ignoring case.
    pub fn matches_reject_phrase(&self, line: &str) -> bool {
        let lower = line.to_lowercase();
        self.reject_phrases
            .iter()
            .any(|phrase| lower.contains(&phrase.to_lowercase()))
    }
}

/// Statistics from one normalization pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizeStats {
    /// Total lines read from the input.
    pub lines_read: usize,
    /// Lines accepted as code records.
    pub accepted: usize,
    /// Blank or whitespace-only lines skipped.
    pub skipped_empty: usize,
    /// Boilerplate lines skipped via the reject-phrase list.
    pub skipped_boilerplate: usize,
    /// Lines with code/description shape that failed the length heuristics.
    pub skipped_narrative: usize,
    /// Single-token lines reported as malformed.
    pub malformed: usize,
}

impl NormalizeStats {
    /// Returns the percentage of lines that were accepted.
    pub fn accept_rate(&self) -> f64 {
        if self.lines_read == 0 {
            0.0
        } else {
            (self.accepted as f64 / self.lines_read as f64) * 100.0
        }
    }
}
