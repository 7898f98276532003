//! Quote-request intake: form state, templating and submission control

pub mod emails;
pub mod form;
pub mod models;
pub mod service;
