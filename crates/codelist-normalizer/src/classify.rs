//! Per-line classification for code-list files.
//!
//! Decides whether one raw line is a `(code, description)` data line,
//! skippable noise, or malformed.

use codelist_types::CodeRecord;

use crate::types::FilterConfig;

/// Classification outcome for one raw input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass {
    /// A valid data line, split into code and description.
    Record(CodeRecord),
    /// Blank or whitespace-only line.
    Empty,
    /// Line containing a reject phrase (legal text, headings, notices).
    Boilerplate,
    /// Line with code/description shape that fails the length heuristics
    /// (overlong code, or a description of too few words) — headers,
    /// continuation text, or paragraph-style notes.
    Narrative,
    /// Single token with no whitespace; cannot be split into code and
    /// description. Reported, not fatal.
    Malformed,
}

/// Classifies a raw line.
///
/// Rules are applied in order: trim, empty check, reject-phrase check,
/// split at the first whitespace run, then the shape heuristics from
/// `config` (code length, description word count).
///
/// # Examples
///
/// ```
/// use codelist_normalizer::{classify, FilterConfig, LineClass};
///
/// let config = FilterConfig::default();
/// match classify("M54.5   Low back pain, unspecified", &config) {
///     LineClass::Record(record) => {
///         assert_eq!(record.code, "M54.5");
///         assert_eq!(record.description, "Low back pain, unspecified");
///     }
///     other => panic!("expected a record, got {:?}", other),
/// }
/// ```
pub fn classify(raw: &str, config: &FilterConfig) -> LineClass {
    let line = raw.trim();

    if line.is_empty() {
        return LineClass::Empty;
    }

    if config.matches_reject_phrase(line) {
        return LineClass::Boilerplate;
    }

    let Some(split_at) = line.find(char::is_whitespace) else {
        return LineClass::Malformed;
    };

    let code = &line[..split_at];
    // Everything after the first whitespace run, interior spacing intact
    let description = line[split_at..].trim_start();

    if code.chars().count() <= config.max_code_chars
        && description.split_whitespace().count() >= config.min_description_words
    {
        LineClass::Record(CodeRecord::new(code, description))
    } else {
        LineClass::Narrative
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(line: &str) -> CodeRecord {
        match classify(line, &FilterConfig::default()) {
            LineClass::Record(record) => record,
            other => panic!("expected record for {:?}, got {:?}", line, other),
        }
    }

    #[test]
    fn test_data_line_accepted_verbatim() {
        let record = record("M54.5   Low back pain, unspecified");
        assert_eq!(record.code, "M54.5");
        assert_eq!(record.description, "Low back pain, unspecified");
    }

    #[test]
    fn test_leading_whitespace_trimmed() {
        let record = record("  A0021\tOutside state ambulance service  ");
        assert_eq!(record.code, "A0021");
        assert_eq!(record.description, "Outside state ambulance service");
    }

    #[test]
    fn test_interior_spacing_preserved() {
        let record = record("E11.9  Type 2 diabetes  mellitus without complications");
        assert_eq!(
            record.description,
            "Type 2 diabetes  mellitus without complications"
        );
    }

    #[test]
    fn test_blank_lines_rejected() {
        let config = FilterConfig::default();
        assert_eq!(classify("", &config), LineClass::Empty);
        assert_eq!(classify("   \t  ", &config), LineClass::Empty);
    }

    #[test]
    fn test_reject_phrase_beats_structure() {
        let config = FilterConfig::default();
        // Shaped like a data line, but contains a reject phrase
        assert_eq!(
            classify("A0021 vaccine codes effective this year", &config),
            LineClass::Boilerplate
        );
        assert_eq!(
            classify("INCLUDE this additional note about billing", &config),
            LineClass::Boilerplate
        );
    }

    #[test]
    fn test_single_token_is_malformed() {
        let config = FilterConfig::default();
        assert_eq!(classify("A", &config), LineClass::Malformed);
        assert_eq!(classify("  A0021  ", &config), LineClass::Malformed);
    }

    #[test]
    fn test_code_length_boundary() {
        let config = FilterConfig::default();
        assert!(matches!(
            classify("A123456 three word description", &config),
            LineClass::Record(_)
        ));
        assert_eq!(
            classify("A1234567 three word description", &config),
            LineClass::Narrative
        );
    }

    #[test]
    fn test_short_description_is_narrative() {
        let config = FilterConfig::default();
        assert_eq!(classify("M54.5 back pain", &config), LineClass::Narrative);
        assert!(matches!(
            classify("M54.5 low back pain", &config),
            LineClass::Record(_)
        ));
    }

    #[test]
    fn test_paragraph_text_is_narrative() {
        let config = FilterConfig::default();
        assert_eq!(
            classify(
                "Unspecified codes should only be reported when documentation is unavailable",
                &config
            ),
            LineClass::Narrative
        );
    }
}
