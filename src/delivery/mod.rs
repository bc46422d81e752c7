//! Mail delivery collaborator
//!
//! The core hands a finished message and a destination address to a
//! [`MailTransport`] and treats delivery as a single external call: success
//! or a [`DigestError::Delivery`], never retried here.
//!
//! # Components
//!
//! - `http` - Mail transport over an HTTP mail API

use crate::types::DigestError;

pub mod http;

pub use http::HttpMailer;

/// Outbound mail transport
pub trait MailTransport {
    /// Deliver a formatted message to the recipient
    ///
    /// # Errors
    ///
    /// Returns [`DigestError::Delivery`] if the transport rejects or cannot
    /// reach the destination. The message is not resent.
    fn send(
        &self,
        message: &str,
        recipient: &str,
    ) -> impl std::future::Future<Output = Result<(), DigestError>> + Send;
}
