//! Statement Digest CLI
//!
//! Command-line interface for summarizing bank statement CSVs and delivering
//! the digest by email.
//!
//! # Usage
//!
//! ```bash
//! # Print the summary message for a local statement
//! cargo run -- summarize statement.csv
//!
//! # Print the summary as JSON
//! cargo run -- summarize --json statement.csv
//!
//! # Deliver the summary by email
//! cargo run -- summarize --to customer@example.com statement.csv
//!
//! # Process an object-storage notification (one summary per object key)
//! cargo run -- notify --root /var/objects --to customer@example.com events.json
//! ```
//!
//! Delivery reads the mail endpoint configuration from the environment once
//! at startup: `DIGEST_MAIL_ENDPOINT`, `DIGEST_MAIL_API_KEY`,
//! `DIGEST_MAIL_FROM`.
//!
//! # Exit Codes
//!
//! - 0: Success (a notify run with isolated unit failures still exits 0;
//!   the failures are reported on stderr)
//! - 1: Error (bad arguments, unreadable input, invalid configuration, etc.)

use statement_digest::cli::{self, Command};
use statement_digest::config::{BatchConfig, MailConfig};
use statement_digest::core::{pipeline, render_message};
use statement_digest::delivery::{HttpMailer, MailTransport};
use statement_digest::source::LocalDirSource;
use statement_digest::trigger::{process_batch, NotificationDocument};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::process;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = cli::parse_args();
    let batch_config = args.command.to_batch_config();

    if let Err(e) = execute(args.command, batch_config) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn execute(command: Command, batch_config: BatchConfig) -> Result<(), String> {
    match command {
        Command::Summarize { input, json, to } => summarize_file(&input, json, to.as_deref()),
        Command::Notify {
            events, root, to, ..
        } => notify(&events, root, &to, batch_config),
    }
}

/// Run the pipeline on a local statement file
fn summarize_file(input: &Path, json: bool, to: Option<&str>) -> Result<(), String> {
    let file = File::open(input)
        .map_err(|e| format!("Failed to open file '{}': {}", input.display(), e))?;

    let summary = pipeline::summarize_source(file).map_err(|e| e.to_string())?;

    match (to, json) {
        (Some(recipient), _) => deliver(&render_message(&summary), recipient),
        (None, true) => {
            let rendered = serde_json::to_string_pretty(&summary).map_err(|e| e.to_string())?;
            println!("{}", rendered);
            Ok(())
        }
        (None, false) => {
            print!("{}", render_message(&summary));
            Ok(())
        }
    }
}

/// Deliver a single message over the configured mail transport
fn deliver(message: &str, recipient: &str) -> Result<(), String> {
    let mail_config = MailConfig::from_env().map_err(|e| e.to_string())?;
    let mailer = HttpMailer::new(mail_config);

    let runtime = runtime(1)?;
    runtime
        .block_on(mailer.send(message, recipient))
        .map_err(|e| e.to_string())
}

/// Process a notification document, one summary per object key
fn notify(
    events: &Path,
    root: PathBuf,
    recipient: &str,
    batch_config: BatchConfig,
) -> Result<(), String> {
    let bytes = std::fs::read(events)
        .map_err(|e| format!("Failed to read '{}': {}", events.display(), e))?;
    let document = NotificationDocument::from_slice(&bytes).map_err(|e| e.to_string())?;

    let mail_config = MailConfig::from_env().map_err(|e| e.to_string())?;
    let mailer = HttpMailer::new(mail_config);
    let source = LocalDirSource::new(root);
    let keys = document.keys();

    let runtime = runtime(batch_config.max_concurrent)?;
    let outcome = runtime.block_on(process_batch(
        &source,
        &mailer,
        &keys,
        recipient,
        batch_config.max_concurrent,
    ));

    println!(
        "Delivered {} of {} summaries",
        outcome.delivered.len(),
        keys.len()
    );
    for (key, error) in &outcome.failures {
        eprintln!("  {}: {}", key, error);
    }

    Ok(())
}

fn runtime(worker_threads: usize) -> Result<tokio::runtime::Runtime, String> {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(worker_threads.max(1))
        .enable_all()
        .build()
        .map_err(|e| format!("Failed to create tokio runtime: {}", e))
}
