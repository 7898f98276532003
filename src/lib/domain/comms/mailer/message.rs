//! Notification message

use crate::domain::comms::value_objects::email_address::EmailAddress;

/// A composed notification, ready for dispatch
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    /// The recipient of the email
    pub to: EmailAddress,

    /// Reply-to address, as typed by the visitor
    ///
    /// Left unvalidated here; the transport parses it at dispatch time.
    pub reply_to: String,

    /// The subject of the email
    pub subject: String,

    /// The HTML body of the email
    pub html_body: String,

    /// The plain text body of the email
    pub plain_body: String,
}
