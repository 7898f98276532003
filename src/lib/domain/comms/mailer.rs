//! Notification gateway port

use async_trait::async_trait;

#[cfg(test)]
use mockall::mock;

use crate::domain::comms::{errors::MailerError, mailer::message::Message};

pub mod message;

/// Notification dispatch capability
///
/// The sole suspension point of the submission pipeline. Implementations own
/// any timeout policy; a reported failure is a normal outcome, not a fault.
#[async_trait]
pub trait Mailer: Clone + Send + Sync + 'static {
    /// Dispatch one message
    ///
    /// # Arguments
    /// * `message` - The composed [`Message`] to dispatch.
    ///
    /// # Returns
    /// A [`Result`] indicating whether the gateway accepted the message.
    async fn send(&self, message: &Message) -> Result<(), MailerError>;
}

#[cfg(test)]
mock! {
    pub Mailer {}

    impl Clone for Mailer {
        fn clone(&self) -> Self;
    }

    #[async_trait]
    impl Mailer for Mailer {
        async fn send(&self, message: &Message) -> Result<(), MailerError>;
    }
}
