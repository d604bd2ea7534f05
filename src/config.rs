//! Runtime configuration from the environment (a `.env` file is loaded first when present).

use crate::error::ConfigError;
use std::net::SocketAddr;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://cadastro.db";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
pub const DEFAULT_LOG_FILTER: &str = "client_orders=info,tower_http=info";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_addr: SocketAddr,
}

impl AppConfig {
    /// Reads `DATABASE_URL` and `BIND_ADDR`, falling back to the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.into());
        let bind = std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.into());
        Ok(AppConfig {
            database_url,
            bind_addr: parse_bind_addr(&bind)?,
        })
    }
}

pub fn parse_bind_addr(value: &str) -> Result<SocketAddr, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Invalid {
        key: "BIND_ADDR",
        value: value.to_string(),
    })
}
