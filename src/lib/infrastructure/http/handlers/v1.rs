use axum::{
    routing::{get, post},
    Json, Router,
};
use utoipa::OpenApi;

use crate::{
    domain::quotes::service::QuoteIntake,
    infrastructure::http::{open_api::ApiDocs, state::AppState},
};

pub mod quotes;
pub mod uptime;

pub fn router<Q: QuoteIntake>() -> Router<AppState<Q>> {
    Router::new()
        .route("/openapi.json", get(Json(ApiDocs::openapi())))
        .route("/uptime", get(uptime::handler))
        .route("/quotes", post(quotes::submit_quote::handler))
        .route("/quotes/state", get(quotes::submission_state::handler))
}
