use sqlx::PgPool;

use crate::db::{
    models::{NewTransaction, Transaction},
    DatabaseError,
};

// Table names cannot be bound as parameters; callers pass a name already
// checked by the config parser.

pub async fn create_transactions_table(pool: &PgPool, table: &str) -> Result<(), DatabaseError> {
    let sql = format!(
        "CREATE TABLE IF NOT EXISTS {table} (
            id UUID PRIMARY KEY,
            card_number TEXT NOT NULL,
            card_type TEXT NOT NULL,
            amount TEXT NOT NULL,
            currency TEXT NOT NULL,
            created_at TIMESTAMP DEFAULT NOW()
        )"
    );

    sqlx::query(&sql).execute(pool).await?;

    Ok(())
}

pub async fn insert_transaction(
    pool: &PgPool,
    table: &str,
    tx: &NewTransaction,
) -> Result<Transaction, DatabaseError> {
    let sql = format!(
        "INSERT INTO {table} (id, card_number, card_type, amount, currency)
         VALUES ($1, $2, $3, $4, $5)
         RETURNING id, card_number, card_type, amount, currency, created_at"
    );

    let stored = sqlx::query_as::<_, Transaction>(&sql)
        .bind(tx.id)
        .bind(&tx.card_number)
        .bind(&tx.card_type)
        .bind(&tx.amount)
        .bind(&tx.currency)
        .fetch_one(pool)
        .await?;

    Ok(stored)
}
