//! Statement Digest Library
//! # Overview
//!
//! This library ingests a bank-statement CSV, computes aggregate statistics,
//! formats them into a plain-text summary message, and delivers that message
//! over email. It can be triggered by a direct local invocation or by an
//! object-storage notification naming one or more statement objects.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Transaction, Summary, DigestError)
//! - [`cli`] - CLI argument parsing
//! - [`io`] - Statement tokenization and row conversion:
//!   - [`io::reader`] - Row extraction (drop header, keep the rest)
//!   - [`io::csv_format`] - Row to transaction conversion
//! - [`core`] - The statistics pipeline:
//!   - [`core::aggregator`] - Summary computation
//!   - [`core::formatter`] - Message rendering
//!   - [`core::pipeline`] - Stage orchestration
//! - [`config`] - Explicit startup configuration
//! - [`source`] - Object retrieval collaborator
//! - [`delivery`] - Mail delivery collaborator
//! - [`trigger`] - Notification parsing and batch processing
//!
//! # Pipeline
//!
//! Data flows strictly left to right, one stage at a time:
//!
//! raw source → rows → transactions → summary → message → delivery
//!
//! Every core-generated error is terminal for its invocation; a batch of
//! independent sources isolates each unit's failure from the rest.

// Module declarations
pub mod cli;
pub mod config;
pub mod core;
pub mod delivery;
pub mod io;
pub mod source;
pub mod trigger;
pub mod types;

pub use crate::core::{render_message, run, summarize, summarize_source};
pub use config::{BatchConfig, MailConfig};
pub use delivery::{HttpMailer, MailTransport};
pub use source::{LocalDirSource, ObjectSource};
pub use trigger::{process_batch, BatchOutcome, NotificationDocument};
pub use types::{DigestError, MonthDay, MonthlyCounts, Stage, Summary, Transaction};
