use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::validation::CardType;

/// Caller-facing charge failures. Messages never include driver text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChargeError {
    #[error("Database setup failed")]
    Setup,

    #[error("Invalid Credit Card")]
    InvalidCard,

    #[error("Unsupported card type: {0}")]
    UnsupportedCardType(CardType),

    #[error("Failed to process transaction")]
    TransactionPersist,
}

impl ChargeError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ChargeError::InvalidCard | ChargeError::UnsupportedCardType(_) => StatusCode::BAD_REQUEST,
            ChargeError::Setup | ChargeError::TransactionPersist => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ChargeErrorBody {
    pub status: String,
    pub reason: String,
}

impl IntoResponse for ChargeError {
    fn into_response(self) -> Response {
        let body = ChargeErrorBody {
            status: "ERROR".to_string(),
            reason: self.to_string(),
        };

        (self.status_code(), Json(body)).into_response()
    }
}
