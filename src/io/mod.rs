//! I/O module
//!
//! Handles statement tokenization and row conversion.
//!
//! # Components
//!
//! - `reader` - Row extraction (tokenize, drop header, keep the rest)
//! - `csv_format` - Statement layout handling (row to transaction conversion)

pub mod csv_format;
pub mod reader;

pub use csv_format::{convert_row, parse_transactions};
pub use reader::extract_rows;
