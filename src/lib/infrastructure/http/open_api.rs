//! OpenAPI module

use utoipa::OpenApi;

use crate::infrastructure::http::{errors::ErrorResponse, handlers::v1::*};

#[derive(Debug, OpenApi)]
#[openapi(
    info(title = "Wine Maker"),
    paths(
        quotes::submit_quote::handler,
        quotes::submission_state::handler,
        uptime::handler
    ),
    components(schemas(
        quotes::submit_quote::SubmitQuoteBody,
        quotes::submit_quote::SubmitQuoteResponse,
        quotes::submission_state::SubmissionStateResponse,
        uptime::UptimeResponse,
        ErrorResponse,
    ))
)]
pub struct ApiDocs;
