//! Pipeline orchestration
//!
//! Composes the core stages in sequence: extract rows, parse transactions,
//! aggregate, format. The first failing stage aborts the run and its error
//! is surfaced as-is; no partial output is ever returned.
//!
//! The orchestrator holds no state between invocations. Separate triggering
//! events may run it repeatedly, including in parallel, because every
//! invocation's transaction list, summary, and message are local to that
//! invocation.

use crate::core::aggregator::summarize;
use crate::core::formatter::render_message;
use crate::io::{extract_rows, parse_transactions};
use crate::types::{DigestError, Summary};
use std::io::Read;

/// Compute the summary for a statement source
///
/// Runs extraction, parsing, and aggregation, stopping at the first error.
pub fn summarize_source<R: Read>(source: R) -> Result<Summary, DigestError> {
    let rows = extract_rows(source)?;
    let transactions = parse_transactions(&rows)?;
    Ok(summarize(&transactions))
}

/// Run the full pipeline and produce the delivery-ready message
pub fn run<R: Read>(source: R) -> Result<String, DigestError> {
    let summary = summarize_source(source)?;
    Ok(render_message(&summary))
}
