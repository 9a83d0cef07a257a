use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;
use serde_json::json;
use tally_ledger::{AppendOutcome, LedgerReader, LedgerWriter, SettlementEngine, ValidationReport};
use tally_types::{Record, TransferOutcome, TransferRequest};

use crate::error::{ServerError, ServerResult};
use crate::state::AppState;

/// Body of a registration request.
#[derive(Debug, Deserialize)]
pub struct CreateParticipant {
    #[serde(alias = "displayName")]
    pub name: String,
}

fn decode<T>(payload: Result<Json<T>, JsonRejection>) -> ServerResult<T> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| ServerError::MalformedRequest(rejection.body_text()))
}

/// List the whole chain.
pub async fn list_chain(State(state): State<AppState>) -> ServerResult<Json<Vec<Record>>> {
    Ok(Json(state.ledger.snapshot()?))
}

/// Register a participant. A candidate that fails validation is echoed back with 409.
pub async fn create_participant(
    State(state): State<AppState>,
    payload: Result<Json<CreateParticipant>, JsonRejection>,
) -> ServerResult<(StatusCode, Json<Record>)> {
    let body = decode(payload)?;
    if body.name.trim().is_empty() {
        return Err(ServerError::MalformedRequest("name must not be empty".into()));
    }
    tracing::debug!(name = %body.name, "registration request");

    let outcome = state.ledger.register(&body.name)?;
    Ok((registration_status(&outcome), Json(outcome.into_record())))
}

/// 201 for an appended record, 409 for a candidate that lost the race for the tail.
pub fn registration_status(outcome: &AppendOutcome) -> StatusCode {
    match outcome {
        AppendOutcome::Appended(_) => StatusCode::CREATED,
        AppendOutcome::Rejected { .. } => StatusCode::CONFLICT,
    }
}

/// Settle a transfer. Refusals are reported in the body, not the status.
pub async fn transact(
    State(state): State<AppState>,
    payload: Result<Json<TransferRequest>, JsonRejection>,
) -> ServerResult<(StatusCode, Json<TransferOutcome>)> {
    let request = decode(payload)?;
    tracing::debug!(?request, "transfer request");

    let outcome = SettlementEngine::new(&state.ledger).settle(&request)?;
    Ok((StatusCode::ACCEPTED, Json(outcome)))
}

/// Walk the chain and report every integrity violation.
pub async fn validate_chain(State(state): State<AppState>) -> ServerResult<Json<ValidationReport>> {
    Ok(Json(state.ledger.validate()?))
}

/// Health check handler.
pub async fn health_handler() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

/// Info handler.
pub async fn info_handler(State(state): State<AppState>) -> ServerResult<Json<serde_json::Value>> {
    Ok(Json(json!({
        "name": "tally-server",
        "version": env!("CARGO_PKG_VERSION"),
        "records": state.ledger.len()?,
    })))
}
