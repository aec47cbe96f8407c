mod app_state;
mod charge;
mod config;
mod db;
mod error;
mod handlers;
mod validation;

use clap::Parser;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use app_state::AppState;
use charge::{db_repository::PgTransactionRepository, ChargeService};
use config::Config;
use db::init_pool;
use validation::DefaultCardValidator;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "payment_charge=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Parse configuration
    let config = Config::parse();

    // Initialize database
    let pool = init_pool(&config.database);
    let repo = Arc::new(PgTransactionRepository::new(
        pool,
        config.database.postgres_table.clone(),
    ));

    // Refuse to serve charges against a missing table
    let charges = ChargeService::provision(repo, Arc::new(DefaultCardValidator)).await?;

    let state = AppState {
        charges: Arc::new(charges),
    };
    let app = handlers::router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.socket_addr()).await?;

    tracing::info!("Server running on {}", config.socket_addr());
    tracing::info!("Transactions table: {}", config.database.postgres_table);

    axum::serve(listener, app).await?;

    Ok(())
}
