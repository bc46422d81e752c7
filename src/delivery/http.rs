//! HTTP mail-API transport
//!
//! Posts outbound messages as JSON to a configured mail endpoint with
//! bearer authentication. The endpoint, credentials, and sender address are
//! injected at construction via [`MailConfig`]; nothing is read from the
//! environment here.

use crate::config::MailConfig;
use crate::delivery::MailTransport;
use crate::types::DigestError;
use serde::Serialize;

/// Payload accepted by the mail endpoint
#[derive(Debug, Serialize)]
struct OutboundMessage<'a> {
    from: &'a str,
    to: &'a str,
    text: &'a str,
}

/// Mail transport over an HTTP mail API
#[derive(Debug, Clone)]
pub struct HttpMailer {
    client: reqwest::Client,
    config: MailConfig,
}

impl HttpMailer {
    /// Create a mailer for the configured endpoint
    pub fn new(config: MailConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }
}

impl MailTransport for HttpMailer {
    async fn send(&self, message: &str, recipient: &str) -> Result<(), DigestError> {
        let payload = OutboundMessage {
            from: &self.config.from_address,
            to: recipient,
            text: message,
        };

        let response = self
            .client
            .post(&self.config.endpoint)
            .bearer_auth(&self.config.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| DigestError::delivery(recipient, e))?;

        if !response.status().is_success() {
            return Err(DigestError::delivery(
                recipient,
                format!("mail endpoint returned {}", response.status()),
            ));
        }

        Ok(())
    }
}
