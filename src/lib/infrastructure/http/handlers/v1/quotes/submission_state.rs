//! Submission state handler

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    domain::quotes::{form::SubmissionState, service::QuoteIntake},
    infrastructure::http::{errors::ApiError, state::AppState},
};

/// The submission state response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SubmissionStateResponse {
    /// The current state of the quote form
    #[schema(example = "idle")]
    pub state: String,
}

impl From<SubmissionState> for SubmissionStateResponse {
    fn from(state: SubmissionState) -> Self {
        let state = match state {
            SubmissionState::Idle => "idle",
            SubmissionState::Submitting => "submitting",
            SubmissionState::Succeeded => "succeeded",
            SubmissionState::Failed => "failed",
        };

        Self {
            state: state.to_string(),
        }
    }
}

/// Get the current submission state
///
/// The UI polls this to disable and relabel the submit control while a
/// dispatch is in flight.
#[utoipa::path(
    get,
    operation_id = "submission_state",
    tag = "Quotes",
    path = "/api/v1/quotes/state",
    responses(
        (status = StatusCode::OK, description = "Submission state", body = SubmissionStateResponse),
    )
)]
pub async fn handler<Q: QuoteIntake>(
    State(state): State<AppState<Q>>,
) -> Result<Json<SubmissionStateResponse>, ApiError> {
    let submission_state = state.quotes.submission_state().await;

    Ok(Json(submission_state.into()))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use testresult::TestResult;

    use crate::{
        domain::quotes::service::MockQuoteIntake,
        infrastructure::http::{router, state::test_state},
    };

    use super::*;

    #[tokio::test]
    async fn test_submission_state_reports_the_form_state() -> TestResult {
        let mut quotes = MockQuoteIntake::new();

        quotes
            .expect_submission_state()
            .times(1)
            .returning(|| SubmissionState::Submitting);

        let response = TestServer::new(router(test_state(Some(quotes))))?
            .get("/api/v1/quotes/state")
            .await;

        let json = response.json::<SubmissionStateResponse>();

        assert_eq!(response.status_code(), StatusCode::OK);
        assert_eq!(json.state, "submitting");

        Ok(())
    }
}
