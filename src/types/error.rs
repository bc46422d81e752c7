//! Error types for the statement digest pipeline
//!
//! This module defines all error kinds that can occur while turning a raw
//! statement into a delivered summary.
//!
//! # Error Categories
//!
//! - **Structural errors**: the delimited text itself cannot be tokenized
//! - **Row errors**: a data row is too short or a field fails to parse
//! - **Collaborator errors**: object retrieval or mail delivery failed
//! - **Configuration errors**: the startup configuration is unusable
//!
//! Every core-generated error is terminal for its invocation: the pipeline
//! is all-or-nothing and never returns a partial summary.

use thiserror::Error;

/// Pipeline stage that produced an error
///
/// Used to tag failures so callers can report where an invocation stopped
/// without matching on every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Tokenizing the delimited source into rows
    Extract,
    /// Converting rows into transaction records
    Parse,
    /// Fetching the source object from storage
    Retrieval,
    /// Handing the formatted message to the mail transport
    Delivery,
    /// Startup configuration
    Config,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Stage::Extract => "extract",
            Stage::Parse => "parse",
            Stage::Retrieval => "retrieval",
            Stage::Delivery => "delivery",
            Stage::Config => "config",
        };
        f.write_str(name)
    }
}

/// Main error type for the statement digest
///
/// Each variant carries enough context to identify which stage and, for
/// row-level failures, which CSV line triggered it. Line numbers are
/// 1-based file lines, so the header is line 1 and the first data row is
/// line 2.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DigestError {
    /// The delimited text could not be tokenized at all
    ///
    /// Raised for invalid UTF-8, I/O failures mid-read, or an unreadable
    /// notification document. Fatal for the invocation.
    #[error("Malformed statement input{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    MalformedInput {
        /// Line where tokenization failed (if known)
        line: Option<u64>,
        /// Description of the failure
        message: String,
    },

    /// A data row has fewer fields than the statement layout requires
    #[error("Line {line}: expected at least 3 fields, found {fields}")]
    MalformedRow {
        /// CSV file line of the offending row
        line: u64,
        /// Number of fields actually present
        fields: usize,
    },

    /// The date field of a row is not a valid month/day value
    #[error("Line {line}: invalid transaction date '{value}' (expected month/day)")]
    DateFormat {
        /// CSV file line of the offending row
        line: u64,
        /// The raw field value
        value: String,
    },

    /// The amount field of a row is not a valid signed decimal
    #[error("Line {line}: invalid transaction amount '{value}'")]
    AmountFormat {
        /// CSV file line of the offending row
        line: u64,
        /// The raw field value
        value: String,
    },

    /// The source object could not be retrieved
    ///
    /// Propagated from the object source collaborator; fatal for this item
    /// only, never for the rest of a batch.
    #[error("Failed to retrieve object '{key}': {message}")]
    Retrieval {
        /// Object key that was requested
        key: String,
        /// Description of the retrieval failure
        message: String,
    },

    /// The formatted message could not be delivered
    ///
    /// Propagated from the mail transport collaborator. Never retried here;
    /// retries, if desired, belong to the trigger adapter.
    #[error("Failed to deliver summary to '{recipient}': {message}")]
    Delivery {
        /// Destination address
        recipient: String,
        /// Description of the delivery failure
        message: String,
    },

    /// The startup configuration is missing or inconsistent
    #[error("Invalid configuration: {message}")]
    Config {
        /// Description of the configuration problem
        message: String,
    },
}

// Conversion from csv::Error to DigestError
impl From<csv::Error> for DigestError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        DigestError::MalformedInput {
            line,
            message: error.to_string(),
        }
    }
}

impl DigestError {
    /// The pipeline stage this error belongs to
    pub fn stage(&self) -> Stage {
        match self {
            DigestError::MalformedInput { .. } => Stage::Extract,
            DigestError::MalformedRow { .. }
            | DigestError::DateFormat { .. }
            | DigestError::AmountFormat { .. } => Stage::Parse,
            DigestError::Retrieval { .. } => Stage::Retrieval,
            DigestError::Delivery { .. } => Stage::Delivery,
            DigestError::Config { .. } => Stage::Config,
        }
    }

    /// Create a MalformedRow error
    pub fn malformed_row(line: u64, fields: usize) -> Self {
        DigestError::MalformedRow { line, fields }
    }

    /// Create a DateFormat error
    pub fn date_format(line: u64, value: &str) -> Self {
        DigestError::DateFormat {
            line,
            value: value.to_string(),
        }
    }

    /// Create an AmountFormat error
    pub fn amount_format(line: u64, value: &str) -> Self {
        DigestError::AmountFormat {
            line,
            value: value.to_string(),
        }
    }

    /// Create a Retrieval error
    pub fn retrieval(key: &str, message: impl ToString) -> Self {
        DigestError::Retrieval {
            key: key.to_string(),
            message: message.to_string(),
        }
    }

    /// Create a Delivery error
    pub fn delivery(recipient: &str, message: impl ToString) -> Self {
        DigestError::Delivery {
            recipient: recipient.to_string(),
            message: message.to_string(),
        }
    }

    /// Create a Config error
    pub fn config(message: impl ToString) -> Self {
        DigestError::Config {
            message: message.to_string(),
        }
    }
}
