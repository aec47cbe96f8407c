use axum::{extract::State, Json};
use serde::Serialize;

use crate::{
    app_state::AppState,
    db::models::{ChargeRequest, ChargeResponse},
    error::ChargeError,
};

/// POST /charge
/// Validates the card and records the transaction
pub async fn charge(
    State(state): State<AppState>,
    Json(req): Json<ChargeRequest>,
) -> Result<Json<ChargeResponse>, ChargeError> {
    let response = state.charges.charge(&req).await?;
    Ok(Json(response))
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
}

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_string(),
    })
}
