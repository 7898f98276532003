#![warn(
    missing_debug_implementations,
    rust_2018_idioms,
    missing_docs,
    rustdoc::broken_intra_doc_links,
    rustdoc::missing_crate_level_docs
)]

//! Quote intake server for the Wine Maker site

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use wine_maker::{
    domain::{comms::value_objects::email_address::EmailAddress, quotes::service::QuoteIntakeImpl},
    infrastructure::{
        email::smtp::{SMTPConfig, SMTPMailer},
        http::{HttpServer, HttpServerConfig},
    },
};

/// Command-line arguments / environment variables
#[derive(Debug, Parser)]
pub struct Args {
    /// The HTTP server configuration
    #[clap(flatten)]
    pub server: HttpServerConfig,

    /// The SMTP configuration
    #[clap(flatten)]
    pub smtp: SMTPConfig,

    /// The inbox receiving quote requests
    #[clap(long, env = "QUOTE_RECIPIENT")]
    pub quote_recipient: String,
}

#[mutants::skip]
#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("No environment file loaded: {}", e);
    }

    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let recipient = EmailAddress::new(&args.quote_recipient)?;
    let mailer = Arc::new(SMTPMailer::new(args.smtp));
    let quotes = QuoteIntakeImpl::new(mailer, recipient);

    HttpServer::new(quotes, args.server).await?.run().await
}
