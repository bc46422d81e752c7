//! Row extraction from delimited statement sources
//!
//! Tokenizes comma-delimited text into rows, drops exactly the first row
//! (assumed to be the header) and returns the remainder verbatim, in order.
//! Fields are not trimmed or otherwise rewritten.
//!
//! A source with zero rows and a source with only a header row both yield an
//! empty sequence; neither is an error.

use crate::types::DigestError;
use csv::{ReaderBuilder, StringRecord};
use std::io::Read;

/// Read all data rows from a delimited source
///
/// The reader accepts rows of varying width (`flexible`) so that short rows
/// reach the transaction parser, which reports them as row-level failures
/// rather than tokenization failures.
///
/// # Errors
///
/// Returns [`DigestError::MalformedInput`] if the text cannot be tokenized
/// (invalid UTF-8, I/O failure mid-read), carrying the reported line when
/// the underlying reader knows it.
pub fn extract_rows<R: Read>(source: R) -> Result<Vec<StringRecord>, DigestError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(source);

    let mut rows = Vec::new();
    for result in reader.records() {
        rows.push(result?);
    }

    Ok(rows)
}
