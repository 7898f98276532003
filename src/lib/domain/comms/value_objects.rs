//! Communication value objects

pub mod email_address;
