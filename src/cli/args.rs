use crate::config::BatchConfig;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Summarize bank statement CSVs and deliver the digest by email
#[derive(Parser, Debug)]
#[command(name = "statement-digest")]
#[command(about = "Summarize bank statement CSVs and deliver the digest by email", long_about = None)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

/// Available triggers
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Summarize a local statement file
    Summarize {
        /// Path to the input CSV file
        #[arg(value_name = "INPUT", help = "Path to the input CSV file")]
        input: PathBuf,

        /// Print the summary as JSON instead of the message text
        #[arg(long, help = "Print the summary as JSON instead of the message text")]
        json: bool,

        /// Deliver the message to this address instead of printing it
        #[arg(
            long,
            value_name = "ADDRESS",
            conflicts_with = "json",
            help = "Deliver the message to this address instead of printing it"
        )]
        to: Option<String>,
    },

    /// Process an object-storage notification document
    Notify {
        /// Path to the notification JSON document
        #[arg(value_name = "EVENTS", help = "Path to the notification JSON document")]
        events: PathBuf,

        /// Directory that backs the object store
        #[arg(
            long,
            value_name = "DIR",
            default_value = ".",
            help = "Directory that backs the object store"
        )]
        root: PathBuf,

        /// Recipient address for delivered summaries
        #[arg(
            long,
            value_name = "ADDRESS",
            help = "Recipient address for delivered summaries"
        )]
        to: String,

        /// Maximum number of units processed concurrently
        #[arg(
            long = "max-concurrent",
            value_name = "COUNT",
            help = "Maximum number of units processed concurrently (default: CPU cores)"
        )]
        max_concurrent: Option<usize>,
    },
}

impl Command {
    /// Create a BatchConfig from CLI arguments
    ///
    /// Uses the provided concurrency limit if one was given, falling back to
    /// the default otherwise. Only meaningful for the notify trigger.
    pub fn to_batch_config(&self) -> BatchConfig {
        match self {
            Command::Notify {
                max_concurrent: Some(limit),
                ..
            } => BatchConfig::new(*limit),
            _ => BatchConfig::default(),
        }
    }
}
