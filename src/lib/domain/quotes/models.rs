//! Quote models

pub mod quote_request;
