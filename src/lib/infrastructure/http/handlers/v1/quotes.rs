//! Quote intake handlers

pub mod submission_state;
pub mod submit_quote;
