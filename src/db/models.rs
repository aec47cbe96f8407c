use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored charge, as read back from the transactions table
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Transaction {
    pub id: Uuid,
    pub card_number: String,
    pub card_type: String,
    pub amount: String,
    pub currency: String,
    pub created_at: Option<NaiveDateTime>,
}

/// Column values for a new row; `created_at` is assigned by the server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTransaction {
    pub id: Uuid,
    pub card_number: String,
    pub card_type: String,
    pub amount: String,
    pub currency: String,
}

/// Missing fields default to zero values, as proto3 JSON omits them
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Money {
    #[serde(default)]
    pub currency_code: String,
    #[serde(default)]
    pub units: i64,
    #[serde(default)]
    pub nanos: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreditCardInfo {
    pub credit_card_number: String,
    #[serde(default)]
    pub credit_card_cvv: Option<i32>,
    #[serde(default)]
    pub credit_card_expiration_year: Option<i32>,
    #[serde(default)]
    pub credit_card_expiration_month: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChargeRequest {
    pub amount: Money,
    pub credit_card: CreditCardInfo,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargeResponse {
    pub transaction_id: String,
}
