#![warn(
    missing_debug_implementations,
    rust_2018_idioms,
    missing_docs,
    rustdoc::broken_intra_doc_links,
    rustdoc::missing_crate_level_docs
)]

//! Quote-request intake and notification pipeline for the Wine Maker site

pub mod domain;
pub mod infrastructure;
