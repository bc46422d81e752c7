//! Core statistics pipeline
//!
//! This module contains the pure computation stages:
//! - `aggregator` - Summary computation over parsed transactions
//! - `formatter` - Fixed-template message rendering
//! - `pipeline` - Stage orchestration (extract, parse, aggregate, format)

pub mod aggregator;
pub mod formatter;
pub mod pipeline;

pub use aggregator::summarize;
pub use formatter::render_message;
pub use pipeline::{run, summarize_source};
