//! Quote email templates

pub mod quote_request;
