use sqlx::PgPool;

use crate::{
    charge::TransactionRepository,
    db::{
        models::{NewTransaction, Transaction},
        queries, DatabaseError,
    },
};

/// Database implementation of TransactionRepository
pub struct PgTransactionRepository {
    pool: PgPool,
    table: String,
}

impl PgTransactionRepository {
    pub fn new(pool: PgPool, table: impl Into<String>) -> Self {
        Self {
            pool,
            table: table.into(),
        }
    }
}

#[async_trait::async_trait]
impl TransactionRepository for PgTransactionRepository {
    fn table(&self) -> &str {
        &self.table
    }

    async fn ensure_table(&self) -> Result<(), DatabaseError> {
        queries::create_transactions_table(&self.pool, &self.table).await
    }

    async fn insert_transaction(&self, tx: &NewTransaction) -> Result<Transaction, DatabaseError> {
        queries::insert_transaction(&self.pool, &self.table, tx).await
    }
}
