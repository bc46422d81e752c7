//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `transaction`: Transaction records and the year-less statement date
//! - `summary`: Aggregate results (summary and monthly counts)
//! - `error`: Error types for the statement digest

pub mod error;
pub mod summary;
pub mod transaction;

pub use error::{DigestError, Stage};
pub use summary::{MonthlyCounts, Summary};
pub use transaction::{MonthDay, Transaction};
