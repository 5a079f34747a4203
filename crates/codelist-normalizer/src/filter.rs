//! Streaming line filter.
//!
//! Wraps any iterator of raw lines and yields the accepted `CodeRecord`s
//! in input order, counting everything it skips.

use codelist_types::CodeRecord;

use crate::classify::{classify, LineClass};
use crate::types::{FilterConfig, NormalizeStats};

/// A streaming filter over raw code-list lines.
///
/// Yields accepted records in input order. Skipped lines are tallied in
/// [`NormalizeStats`]; malformed lines (a single token with no
/// description) are additionally reported via a warning log.
///
/// # Example
///
/// ```
/// use codelist_normalizer::{FilterConfig, LineFilter};
///
/// let lines = [
///     "M54.5   Low back pain, unspecified",
///     "",
///     "INCLUDE this additional note about billing",
/// ];
/// let mut filter = LineFilter::new(lines.into_iter(), FilterConfig::default());
///
/// let records: Vec<_> = filter.by_ref().collect();
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].code, "M54.5");
/// assert_eq!(filter.stats().lines_read, 3);
/// ```
pub struct LineFilter<I> {
    lines: I,
    config: FilterConfig,
    stats: NormalizeStats,
}

impl<I> LineFilter<I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    /// Creates a new filter over an iterator of raw lines.
    pub fn new(lines: I, config: FilterConfig) -> Self {
        Self {
            lines,
            config,
            stats: NormalizeStats::default(),
        }
    }

    /// Returns the statistics accumulated so far.
    pub fn stats(&self) -> &NormalizeStats {
        &self.stats
    }

    /// Consumes the filter and returns the final statistics.
    pub fn into_stats(self) -> NormalizeStats {
        self.stats
    }
}

impl<I> Iterator for LineFilter<I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    type Item = CodeRecord;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = self.lines.next()?;
            let line = line.as_ref();
            self.stats.lines_read += 1;

            match classify(line, &self.config) {
                LineClass::Record(record) => {
                    self.stats.accepted += 1;
                    return Some(record);
                }
                LineClass::Empty => self.stats.skipped_empty += 1,
                LineClass::Boilerplate => self.stats.skipped_boilerplate += 1,
                LineClass::Narrative => self.stats.skipped_narrative += 1,
                LineClass::Malformed => {
                    self.stats.malformed += 1;
                    tracing::warn!("Skipping malformed line: {}", line.trim());
                }
            }
        }
    }
}
