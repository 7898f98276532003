//! Submit quote request handler

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    domain::quotes::{
        models::quote_request::QuoteField,
        service::{QuoteIntake, SubmissionOutcome},
    },
    infrastructure::http::{errors::ApiError, state::AppState},
};

/// Confirmation shown to the visitor after a successful dispatch
pub const CONFIRMATION_MESSAGE: &str =
    "Merci pour votre demande ! Je vous recontacterai rapidement.";

/// Message shown when a submission is already in flight
const ALREADY_IN_FLIGHT_MESSAGE: &str = "Un envoi est déjà en cours, merci de patienter.";

/// Submit quote request body
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct SubmitQuoteBody {
    /// The visitor's name
    #[schema(example = "Alice")]
    name: String,

    /// The visitor's email address
    #[schema(example = "alice@example.com")]
    email: String,

    /// Optional phone number
    #[serde(default)]
    #[schema(example = "06 12 34 56 78")]
    phone: String,

    /// The establishment the quote is for
    #[schema(example = "Le Bistro")]
    establishment: String,

    /// Free-form project description
    #[schema(example = "Je souhaite une nouvelle carte des vins.")]
    message: String,
}

/// Submit quote response body
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SubmitQuoteResponse {
    /// The confirmation message to display
    #[schema(example = "Merci pour votre demande ! Je vous recontacterai rapidement.")]
    pub message: String,
}

/// Submit a quote request
#[utoipa::path(
    post,
    operation_id = "submit_quote",
    tag = "Quotes",
    path = "/api/v1/quotes",
    request_body = SubmitQuoteBody,
    responses(
        (status = StatusCode::OK, description = "Quote request sent", body = SubmitQuoteResponse),
        (status = StatusCode::CONFLICT, description = "A submission is already in flight", body = ErrorResponse),
        (status = StatusCode::BAD_GATEWAY, description = "The notification could not be dispatched", body = ErrorResponse),
    )
)]
pub async fn handler<Q: QuoteIntake>(
    State(state): State<AppState<Q>>,
    request: Result<Json<SubmitQuoteBody>, JsonRejection>,
) -> Result<(StatusCode, Json<SubmitQuoteResponse>), ApiError> {
    let Json(body) = request?;

    state.quotes.set_field(QuoteField::Name, &body.name).await;
    state.quotes.set_field(QuoteField::Email, &body.email).await;
    state.quotes.set_field(QuoteField::Phone, &body.phone).await;
    state
        .quotes
        .set_field(QuoteField::Establishment, &body.establishment)
        .await;
    state
        .quotes
        .set_field(QuoteField::Message, &body.message)
        .await;

    match state.quotes.submit().await {
        SubmissionOutcome::Sent => Ok((
            StatusCode::OK,
            Json(SubmitQuoteResponse {
                message: CONFIRMATION_MESSAGE.to_string(),
            }),
        )),
        SubmissionOutcome::Failed { fallback } => Err(ApiError::new_502(&fallback)),
        SubmissionOutcome::AlreadyInFlight => Err(ApiError::new_409(ALREADY_IN_FLIGHT_MESSAGE)),
    }
}
