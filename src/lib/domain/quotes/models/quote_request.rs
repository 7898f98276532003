//! Quote request model

/// A visitor's quote request, as captured by the contact form
///
/// Required-ness and email syntax are enforced by the browser's native form
/// constraints before a draft ever reaches the pipeline; nothing here
/// re-validates them. An empty `phone` means "not provided".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuoteRequest {
    /// The visitor's name
    pub name: String,

    /// The visitor's email address, used as the reply-to of the notification
    pub email: String,

    /// Optional phone number; an empty string when not provided
    pub phone: String,

    /// The establishment the quote is for
    pub establishment: String,

    /// Free-form project description; may contain line breaks
    pub message: String,
}

/// Selector for a single [`QuoteRequest`] field
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuoteField {
    /// The visitor's name
    Name,

    /// The visitor's email address
    Email,

    /// The visitor's phone number
    Phone,

    /// The establishment name
    Establishment,

    /// The message body
    Message,
}
