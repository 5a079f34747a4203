//! Whole-file normalization pass.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::encoding::decode_file;
use crate::filter::LineFilter;
use crate::types::{FilterConfig, NormalizeError, NormalizeResult, NormalizeStats};

/// Normalizes one code-list file.
///
/// Reads and decodes the input in full, classifies every line, and writes
/// the accepted records to `output` as UTF-8 `code<TAB>description` lines
/// in input order. The output file is only created after the input has
/// decoded successfully, so a read or decode failure never leaves a
/// partial output file behind.
///
/// The pass is idempotent: the same input and config produce a
/// byte-identical output file.
///
/// # Errors
/// Returns an error if the input cannot be opened or decoded, or if the
/// output cannot be written.
pub fn normalize_file<P, Q>(
    input: P,
    output: Q,
    config: &FilterConfig,
) -> NormalizeResult<NormalizeStats>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let input = input.as_ref();
    let output = output.as_ref();

    if !input.exists() {
        return Err(NormalizeError::FileNotFound {
            path: input.display().to_string(),
        });
    }

    let content = decode_file(input)?;

    let file = File::create(output)?;
    let mut writer = BufWriter::new(file);
    let mut filter = LineFilter::new(content.lines(), config.clone());

    for record in filter.by_ref() {
        writeln!(writer, "{}\t{}", record.code, record.description)?;
    }
    writer.flush()?;

    let stats = filter.into_stats();
    tracing::info!(
        "Wrote {} of {} lines from {} to {}",
        stats.accepted,
        stats.lines_read,
        input.display(),
        output.display()
    );

    Ok(stats)
}
