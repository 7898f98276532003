//! Outbound communication: the notification gateway port and its message types

pub mod errors;
pub mod mailer;
pub mod value_objects;
