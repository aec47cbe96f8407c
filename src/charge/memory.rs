use std::sync::{
    atomic::{AtomicBool, AtomicUsize, Ordering},
    Mutex,
};

use crate::{
    charge::TransactionRepository,
    db::{
        models::{NewTransaction, Transaction},
        DatabaseError,
    },
};

/// Vec-backed repository for exercising the charge flow without PostgreSQL
#[derive(Default)]
pub struct InMemoryTransactionRepository {
    rows: Mutex<Vec<Transaction>>,
    ensure_calls: AtomicUsize,
    fail_setup: AtomicBool,
    fail_inserts: AtomicBool,
}

impl InMemoryTransactionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> Vec<Transaction> {
        self.rows.lock().unwrap().clone()
    }

    pub fn ensure_calls(&self) -> usize {
        self.ensure_calls.load(Ordering::SeqCst)
    }

    pub fn fail_setup(&self, fail: bool) {
        self.fail_setup.store(fail, Ordering::SeqCst);
    }

    /// Simulate a dropped connection on every insert
    pub fn fail_inserts(&self, fail: bool) {
        self.fail_inserts.store(fail, Ordering::SeqCst);
    }
}

#[async_trait::async_trait]
impl TransactionRepository for InMemoryTransactionRepository {
    fn table(&self) -> &str {
        "transactions"
    }

    async fn ensure_table(&self) -> Result<(), DatabaseError> {
        self.ensure_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_setup.load(Ordering::SeqCst) {
            return Err(sqlx::Error::PoolTimedOut.into());
        }
        Ok(())
    }

    async fn insert_transaction(&self, tx: &NewTransaction) -> Result<Transaction, DatabaseError> {
        if self.fail_inserts.load(Ordering::SeqCst) {
            return Err(sqlx::Error::PoolClosed.into());
        }

        let stored = Transaction {
            id: tx.id,
            card_number: tx.card_number.clone(),
            card_type: tx.card_type.clone(),
            amount: tx.amount.clone(),
            currency: tx.currency.clone(),
            created_at: Some(chrono::Utc::now().naive_utc()),
        };

        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|row| row.id == stored.id) {
            return Err(sqlx::Error::Protocol(format!("duplicate key value: {}", stored.id)).into());
        }
        rows.push(stored.clone());

        Ok(stored)
    }
}
