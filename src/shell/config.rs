// Process configuration read from the environment.
//
// - HOURS_BIND_ADDR          listen address, default 0.0.0.0:8080
// - HOURS_DEFAULT_PAGE_SIZE  page size when a request names none, default 10,
//                            at most i64::MAX
//
// A `.env` file in the working directory is loaded first when present.

use crate::shared::core::pagination::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use std::net::SocketAddr;
use thiserror::Error;

pub const ENV_BIND_ADDR: &str = "HOURS_BIND_ADDR";
pub const ENV_DEFAULT_PAGE_SIZE: &str = "HOURS_DEFAULT_PAGE_SIZE";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be a socket address, got {value:?}")]
    InvalidAddress { name: &'static str, value: String },

    #[error("{name} must be an integer from 1 to {MAX_PAGE_SIZE}, got {value:?}")]
    InvalidPageSize { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub default_page_size: u64,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw_addr = lookup(ENV_BIND_ADDR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw_addr
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidAddress {
                name: ENV_BIND_ADDR,
                value: raw_addr.clone(),
            })?;

        let default_page_size = match lookup(ENV_DEFAULT_PAGE_SIZE) {
            None => DEFAULT_PAGE_SIZE,
            Some(raw) => {
                let parsed = raw
                    .trim()
                    .parse::<u64>()
                    .ok()
                    .filter(|size| (1..=MAX_PAGE_SIZE).contains(size));
                parsed.ok_or(ConfigError::InvalidPageSize {
                    name: ENV_DEFAULT_PAGE_SIZE,
                    value: raw,
                })?
            }
        };

        Ok(Self {
            bind_addr,
            default_page_size,
        })
    }
}
