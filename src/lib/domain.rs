//! Domain modules

pub mod comms;
pub mod quotes;
