//! Output persistence for core-area summaries.
//!
//! Rows are written without a header and without CSV quoting, so the title
//! keeps the literal quotes it was rendered with.

use std::fs::File;
use std::path::Path;

use csv::{QuoteStyle, Terminator, Writer, WriterBuilder};
use tracing::debug;

use crate::error::{RollupError, RollupResult};
use crate::rollup::types::CoreAreaSummary;

/// Logs a summary using Rust's debug pretty-print format.
pub fn print_pretty(summary: &CoreAreaSummary) {
    debug!("{:#?}", summary);
}

/// Creates (or truncates) the output file.
pub fn create_writer(path: &Path, delimiter: u8) -> RollupResult<Writer<File>> {
    WriterBuilder::new()
        .has_headers(false)
        .delimiter(delimiter)
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_path(path)
        .map_err(RollupError::WriteOutput)
}

/// Writes every summary as it is produced, then flushes. Returns the row count.
///
/// Stops at the first summary that failed to render; rows before it stay written.
pub fn write_summaries<W, I>(writer: &mut Writer<W>, summaries: I) -> RollupResult<usize>
where
    W: std::io::Write,
    I: IntoIterator<Item = RollupResult<CoreAreaSummary>>,
{
    let mut written = 0;
    for summary in summaries {
        let summary = summary?;
        print_pretty(&summary);
        writer.serialize(&summary).map_err(RollupError::WriteOutput)?;
        written += 1;
    }
    writer.flush().map_err(RollupError::write_io)?;
    Ok(written)
}
