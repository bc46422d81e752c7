//! Startup configuration
//!
//! All environment access happens here, in one explicit step at process
//! start. The resulting values are threaded into the collaborators that
//! need them; nothing in the core pipeline reads the environment.

use crate::types::DigestError;
use std::env;

/// Mail transport configuration
///
/// Constructed once and handed to the mailer at construction time.
#[derive(Debug, Clone, PartialEq)]
pub struct MailConfig {
    /// HTTP mail-API endpoint that accepts outbound messages
    pub endpoint: String,
    /// Bearer token for the mail endpoint
    pub api_key: String,
    /// Sender address
    pub from_address: String,
}

impl MailConfig {
    /// Load the mail configuration from the environment
    ///
    /// # Errors
    ///
    /// Returns [`DigestError::Config`] naming the first missing variable.
    pub fn from_env() -> Result<Self, DigestError> {
        Ok(MailConfig {
            endpoint: require("DIGEST_MAIL_ENDPOINT")?,
            api_key: require("DIGEST_MAIL_API_KEY")?,
            from_address: require("DIGEST_MAIL_FROM")?,
        })
    }
}

fn require(name: &str) -> Result<String, DigestError> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(DigestError::config(format!("{} is not set", name))),
    }
}

/// Configuration for batch processing of notification events
#[derive(Clone, Debug, PartialEq)]
pub struct BatchConfig {
    /// Maximum number of items processed concurrently
    pub max_concurrent: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            max_concurrent: num_cpus::get(),
        }
    }
}

impl BatchConfig {
    /// Create a BatchConfig, falling back to the default on a zero value
    pub fn new(max_concurrent: usize) -> Self {
        let default = Self::default();

        let max_concurrent = if max_concurrent == 0 {
            tracing::warn!(
                "invalid max_concurrent (0), using default ({})",
                default.max_concurrent
            );
            default.max_concurrent
        } else {
            max_concurrent
        };

        Self { max_concurrent }
    }
}
