//! Concurrent batch processing of notified objects
//!
//! Each object key runs the full fetch → summarize → deliver sequence as an
//! isolated unit of work. Units run concurrently up to a configured limit;
//! a failing unit is logged and recorded in the outcome while the remaining
//! units proceed. No unit is retried.

use crate::core::pipeline;
use crate::delivery::MailTransport;
use crate::source::ObjectSource;
use crate::types::DigestError;
use futures::StreamExt;
use tracing::{info, warn};

/// Result of one batch run
#[derive(Debug, Default)]
pub struct BatchOutcome {
    /// Keys whose summaries were delivered
    pub delivered: Vec<String>,
    /// Keys that failed, with the error that stopped them
    pub failures: Vec<(String, DigestError)>,
}

impl BatchOutcome {
    /// True when every unit was delivered
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Process every notified key, delivering one summary per key
///
/// Units are independent and may complete in any order; `max_concurrent`
/// bounds how many are in flight at once (a zero is treated as one).
pub async fn process_batch<S, M>(
    source: &S,
    mailer: &M,
    keys: &[String],
    recipient: &str,
    max_concurrent: usize,
) -> BatchOutcome
where
    S: ObjectSource,
    M: MailTransport,
{
    let results: Vec<(String, Result<(), DigestError>)> =
        futures::stream::iter(keys.iter().map(|key| async move {
            let result = process_one(source, mailer, key, recipient).await;
            (key.clone(), result)
        }))
        .buffer_unordered(max_concurrent.max(1))
        .collect()
        .await;

    let mut outcome = BatchOutcome::default();
    for (key, result) in results {
        match result {
            Ok(()) => {
                info!(key = %key, "summary delivered");
                outcome.delivered.push(key);
            }
            Err(error) => {
                warn!(key = %key, stage = %error.stage(), %error, "unit failed");
                outcome.failures.push((key, error));
            }
        }
    }

    outcome
}

async fn process_one<S, M>(
    source: &S,
    mailer: &M,
    key: &str,
    recipient: &str,
) -> Result<(), DigestError>
where
    S: ObjectSource,
    M: MailTransport,
{
    let bytes = source.fetch(key).await?;
    let message = pipeline::run(bytes.as_slice())?;
    mailer.send(&message, recipient).await
}
