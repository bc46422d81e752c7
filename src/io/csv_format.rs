//! Statement row to transaction conversion
//!
//! This module centralizes the statement layout: field 0 is the identifier,
//! field 1 the `month/day` date, field 2 the signed decimal amount. Extra
//! fields are ignored. All functions are pure (no I/O) for easy testing.

use crate::types::{DigestError, MonthDay, Transaction};
use csv::StringRecord;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Minimum number of fields a data row must carry
const REQUIRED_FIELDS: usize = 3;

/// Convert extracted rows into transaction records
///
/// All-or-nothing: the first row that cannot be converted aborts the whole
/// parse and partial results are discarded. On success the output has the
/// same length and order as the input.
///
/// # Errors
///
/// * [`DigestError::MalformedRow`] for a row with fewer than 3 fields
/// * [`DigestError::DateFormat`] for an unparseable date field
/// * [`DigestError::AmountFormat`] for an unparseable amount field
///
/// Errors carry the 1-based CSV file line (the header is line 1).
pub fn parse_transactions(rows: &[StringRecord]) -> Result<Vec<Transaction>, DigestError> {
    let mut transactions = Vec::with_capacity(rows.len());

    for (index, row) in rows.iter().enumerate() {
        // Rows that came through the reader know their file line; rows
        // built by hand (tests) fall back to index counting past the header.
        let line = row
            .position()
            .map(|pos| pos.line())
            .unwrap_or(index as u64 + 2);

        transactions.push(convert_row(row, line)?);
    }

    Ok(transactions)
}

/// Convert a single row into a transaction record
pub fn convert_row(row: &StringRecord, line: u64) -> Result<Transaction, DigestError> {
    if row.len() < REQUIRED_FIELDS {
        return Err(DigestError::malformed_row(line, row.len()));
    }

    let date = row[1]
        .parse::<MonthDay>()
        .map_err(|_| DigestError::date_format(line, &row[1]))?;

    let amount = Decimal::from_str(&row[2])
        .map_err(|_| DigestError::amount_format(line, &row[2]))?;

    Ok(Transaction {
        id: row[0].to_string(),
        date,
        amount,
    })
}
