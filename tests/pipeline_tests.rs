//! End-to-end integration tests
//!
//! These tests validate the complete digest pipeline through the public
//! library surface:
//! 1. Statement bytes (file or object) go through extract → parse →
//!    aggregate → format
//! 2. Formatted messages are handed to a mail transport
//! 3. Batch runs driven by a notification document isolate unit failures
//!
//! The mail transport is replaced by an in-memory recorder; everything else
//! runs for real against temporary files.

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use statement_digest::{
        process_batch, run, DigestError, LocalDirSource, MailTransport, NotificationDocument,
        Stage,
    };
    use std::fs::{self, File};
    use std::io::Write;
    use std::sync::Mutex;
    use tempfile::{NamedTempFile, TempDir};

    const RECIPIENT: &str = "customer@example.test";

    /// Mail transport that records every message instead of sending it
    #[derive(Default)]
    struct RecordingMailer {
        sent: Mutex<Vec<(String, String)>>,
    }

    impl MailTransport for RecordingMailer {
        async fn send(&self, message: &str, recipient: &str) -> Result<(), DigestError> {
            self.sent
                .lock()
                .unwrap()
                .push((recipient.to_string(), message.to_string()));
            Ok(())
        }
    }

    /// Helper function to create a temporary CSV file for testing
    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    #[test]
    fn test_reference_statement_end_to_end() {
        let file = create_temp_csv(
            "Id,Date,Transaction\n\
             0,1/5,100.00\n\
             1,1/20,-50.00\n\
             2,2/1,25.50\n",
        );

        let message = run(File::open(file.path()).unwrap()).unwrap();

        assert_eq!(
            message,
            "Subject: Your transaction summary\n\
             \n\
             Hi there, here's a summary of your recent account activity:\n\
             \n\
             Total balance: 75.50\n\
             Average debit amount: -50.00\n\
             Average credit amount: 62.75\n\
             Transactions by month:\n\
             January: 2\n\
             February: 1\n"
        );
    }

    #[test]
    fn test_pipeline_is_idempotent() {
        let content = "Id,Date,Transaction\n0,3/14,12.34\n1,3/15,-5.00\n";
        let file = create_temp_csv(content);

        let first = run(File::open(file.path()).unwrap()).unwrap();
        let second = run(File::open(file.path()).unwrap()).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_header_only_statement_renders_without_crashing() {
        let file = create_temp_csv("Id,Date,Transaction\n");

        let message = run(File::open(file.path()).unwrap()).unwrap();

        assert!(message.contains("Total balance: 0.00"));
        assert!(message.contains("Average debit amount: N/A"));
        assert!(message.contains("Average credit amount: N/A"));
        assert!(message.ends_with("Transactions by month:\n"));
    }

    #[rstest]
    #[case::bad_amount("Id,Date,Transaction\n0,1/5,oops\n", Stage::Parse)]
    #[case::bad_date("Id,Date,Transaction\n0,1/5/2024,10\n", Stage::Parse)]
    #[case::short_row("Id,Date,Transaction\n0,1/5\n", Stage::Parse)]
    fn test_malformed_statement_produces_no_message(
        #[case] content: &str,
        #[case] expected_stage: Stage,
    ) {
        let file = create_temp_csv(content);

        let result = run(File::open(file.path()).unwrap());

        assert_eq!(result.unwrap_err().stage(), expected_stage);
    }

    #[test]
    fn test_bad_amount_is_reported_with_its_line() {
        let file = create_temp_csv("Id,Date,Transaction\n0,1/5,10\n1,1/6,oops\n");

        let err = run(File::open(file.path()).unwrap()).unwrap_err();

        assert_eq!(
            err,
            DigestError::AmountFormat {
                line: 3,
                value: "oops".to_string()
            }
        );
    }

    /// A 3-unit batch where unit 2's retrieval fails still delivers units
    /// 1 and 3 and reports unit 2.
    #[tokio::test]
    async fn test_notification_batch_isolates_failed_unit() {
        let dir = TempDir::new().unwrap();
        let statement = "Id,Date,Transaction\n0,1/5,100.00\n";
        fs::write(dir.path().join("unit1.csv"), statement).unwrap();
        fs::write(dir.path().join("unit3.csv"), statement).unwrap();

        let document = NotificationDocument::from_slice(
            br#"{"records": [
                {"key": "unit1.csv"},
                {"key": "unit2.csv"},
                {"key": "unit3.csv"}
            ]}"#,
        )
        .unwrap();

        let source = LocalDirSource::new(dir.path());
        let mailer = RecordingMailer::default();

        let outcome = process_batch(&source, &mailer, &document.keys(), RECIPIENT, 3).await;

        let mut delivered = outcome.delivered.clone();
        delivered.sort();
        assert_eq!(delivered, vec!["unit1.csv", "unit3.csv"]);

        assert_eq!(outcome.failures.len(), 1);
        assert_eq!(outcome.failures[0].0, "unit2.csv");
        assert_eq!(outcome.failures[0].1.stage(), Stage::Retrieval);

        let sent = mailer.sent.lock().unwrap();
        assert_eq!(sent.len(), 2);
        assert!(sent.iter().all(|(to, _)| to == RECIPIENT));
        assert!(sent
            .iter()
            .all(|(_, message)| message.contains("Total balance: 100.00")));
    }

    #[tokio::test]
    async fn test_batch_units_get_independent_summaries() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("jan.csv"),
            "Id,Date,Transaction\n0,1/5,10.00\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("jun.csv"),
            "Id,Date,Transaction\n0,6/5,-4.00\n",
        )
        .unwrap();

        let document = NotificationDocument::from_slice(
            br#"{"records": [{"key": "jan.csv"}, {"key": "jun.csv"}]}"#,
        )
        .unwrap();

        let source = LocalDirSource::new(dir.path());
        let mailer = RecordingMailer::default();

        let outcome = process_batch(&source, &mailer, &document.keys(), RECIPIENT, 2).await;
        assert!(outcome.is_clean());

        let sent = mailer.sent.lock().unwrap();
        let january = sent.iter().find(|(_, m)| m.contains("January: 1"));
        let june = sent.iter().find(|(_, m)| m.contains("June: 1"));

        assert!(january.is_some());
        assert!(june.is_some());
        assert!(january.unwrap().1.contains("Average credit amount: 10.00"));
        assert!(june.unwrap().1.contains("Average debit amount: -4.00"));
    }
}
