use clap::{Args, Parser};
use std::time::Duration;

#[derive(Parser, Debug, Clone)]
#[command(name = "payment-charge")]
#[command(about = "Credit card charge service backed by PostgreSQL")]
#[command(version)]
pub struct Config {
    /// Host address to bind to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value = "8080")]
    pub port: u16,

    #[command(flatten)]
    pub database: DatabaseConfig,
}

impl Config {
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Connection settings for the transactions store
#[derive(Args, Debug, Clone)]
pub struct DatabaseConfig {
    #[arg(long, env = "POSTGRES_HOST")]
    pub postgres_host: String,

    #[arg(long, env = "POSTGRES_PORT")]
    pub postgres_port: u16,

    #[arg(long, env = "POSTGRES_USER")]
    pub postgres_user: String,

    #[arg(long, env = "POSTGRES_PASSWORD", hide_env_values = true)]
    pub postgres_password: String,

    #[arg(long, env = "POSTGRES_DB")]
    pub postgres_db: String,

    /// Table holding transaction records (created if missing)
    #[arg(long, env = "POSTGRES_TABLE", default_value = "transactions", value_parser = parse_table_name)]
    pub postgres_table: String,

    /// Maximum number of pooled connections
    #[arg(long, env = "DB_MAX_CONNECTIONS", default_value = "10")]
    pub db_max_connections: u32,

    /// Milliseconds an unused connection may sit idle before it is closed
    #[arg(long, env = "DB_IDLE_TIMEOUT_MS", default_value = "30000")]
    pub db_idle_timeout_ms: u64,
}

impl DatabaseConfig {
    pub fn idle_timeout(&self) -> Duration {
        Duration::from_millis(self.db_idle_timeout_ms)
    }
}

// The table name ends up inside SQL text, so only bare identifiers are allowed.
fn parse_table_name(s: &str) -> Result<String, String> {
    let mut chars = s.chars();
    let first_ok = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');

    if !first_ok || !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(format!("invalid table name: {s:?}"));
    }
    if s.len() > 63 {
        return Err("table name must be at most 63 bytes".to_string());
    }

    Ok(s.to_string())
}
