use std::sync::Arc;
use uuid::Uuid;

use crate::{
    db::{
        models::{ChargeRequest, ChargeResponse, Money, NewTransaction, Transaction},
        DatabaseError,
    },
    error::ChargeError,
    validation::{normalize_card_number, CardValidator},
};

pub mod db_repository;
#[cfg(test)]
pub mod memory;

/// Trait for the storage operations a charge needs
#[async_trait::async_trait]
pub trait TransactionRepository: Send + Sync {
    /// Name of the table rows are written to
    fn table(&self) -> &str;
    /// Create the transactions table if it does not exist
    async fn ensure_table(&self) -> Result<(), DatabaseError>;
    async fn insert_transaction(&self, tx: &NewTransaction) -> Result<Transaction, DatabaseError>;
}

/// Card charging service.
///
/// Only obtainable through [`ChargeService::provision`], so a value of this
/// type implies the transactions table exists.
pub struct ChargeService {
    repo: Arc<dyn TransactionRepository>,
    validator: Arc<dyn CardValidator>,
}

impl ChargeService {
    /// Make sure the transactions table exists, then hand back a service
    /// ready to take charges.
    pub async fn provision(
        repo: Arc<dyn TransactionRepository>,
        validator: Arc<dyn CardValidator>,
    ) -> Result<Self, ChargeError> {
        ensure_table(&*repo).await?;
        Ok(Self { repo, validator })
    }

    /// Validate the card and record the charge
    pub async fn charge(&self, request: &ChargeRequest) -> Result<ChargeResponse, ChargeError> {
        let card_number = request.credit_card.credit_card_number.as_str();
        let details = self.validator.card_details(card_number);

        if !details.valid {
            tracing::warn!("Rejected charge: invalid credit card");
            return Err(ChargeError::InvalidCard);
        }
        if !details.card_type.is_accepted() {
            tracing::warn!("Rejected charge: unsupported card type {}", details.card_type);
            return Err(ChargeError::UnsupportedCardType(details.card_type));
        }

        let tx = NewTransaction {
            id: Uuid::new_v4(),
            card_number: last_four(&normalize_card_number(card_number)).to_string(),
            card_type: details.card_type.as_str().to_string(),
            amount: format_amount(&request.amount),
            currency: request.amount.currency_code.clone(),
        };

        match self.repo.insert_transaction(&tx).await {
            Ok(stored) => {
                tracing::info!("Transaction {} processed successfully", stored.id);
                tracing::debug!(
                    "Stored {} {} on {} card at {:?}",
                    stored.amount,
                    stored.currency,
                    stored.card_type,
                    stored.created_at
                );
                Ok(ChargeResponse {
                    transaction_id: tx.id.to_string(),
                })
            }
            Err(e) => {
                tracing::error!("Database error: {}", e);
                Err(ChargeError::TransactionPersist)
            }
        }
    }
}

/// Idempotent table provisioning
pub async fn ensure_table(repo: &dyn TransactionRepository) -> Result<(), ChargeError> {
    match repo.ensure_table().await {
        Ok(()) => {
            tracing::info!("Table {} checked/created successfully", repo.table());
            Ok(())
        }
        Err(e) => {
            tracing::error!("Error ensuring table exists: {}", e);
            Err(ChargeError::Setup)
        }
    }
}

/// `units` and `nanos` joined with a period, nanos not zero-padded:
/// 10 units and 5 nanos gives "10.5", not "10.05". Existing rows are in
/// this form; do not pad without migrating them.
pub fn format_amount(amount: &Money) -> String {
    format!("{}.{}", amount.units, amount.nanos)
}

/// Trailing four characters; shorter input comes back whole
pub fn last_four(card_number: &str) -> &str {
    match card_number.char_indices().rev().nth(3) {
        Some((idx, _)) => &card_number[idx..],
        None => card_number,
    }
}
