//! Event trigger adapter
//!
//! Connects object-storage "new file" notifications to the pipeline. A
//! notification document names one or more object keys; each key becomes an
//! independent unit of work: fetch, summarize, deliver. One unit's failure
//! is reported and never aborts the others.
//!
//! # Components
//!
//! - `event` - Notification document parsing
//! - `batch` - Concurrent per-key processing with failure isolation

pub mod batch;
pub mod event;

pub use batch::{process_batch, BatchOutcome};
pub use event::NotificationDocument;
