pub mod models;
pub mod queries;

use sqlx::{
    postgres::{PgConnectOptions, PgPoolOptions},
    PgPool,
};
use thiserror::Error;

use crate::config::DatabaseConfig;

/// Failure talking to PostgreSQL; carries the driver's message
#[derive(Debug, Error)]
#[error("{0}")]
pub struct DatabaseError(#[from] pub sqlx::Error);

pub fn connect_options(config: &DatabaseConfig) -> PgConnectOptions {
    PgConnectOptions::new()
        .host(&config.postgres_host)
        .port(config.postgres_port)
        .username(&config.postgres_user)
        .password(&config.postgres_password)
        .database(&config.postgres_db)
}

pub fn pool_options(config: &DatabaseConfig) -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .idle_timeout(config.idle_timeout())
        .after_connect(|_conn, _meta| {
            Box::pin(async move {
                tracing::info!("Connected to PostgreSQL");
                Ok(())
            })
        })
}

/// Build the pool without connecting. The first connection is opened by
/// table provisioning, so an unreachable server surfaces as a setup failure.
pub fn init_pool(config: &DatabaseConfig) -> PgPool {
    pool_options(config).connect_lazy_with(connect_options(config))
}
