use std::env;
use std::net::SocketAddr;
use thiserror::Error;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid BIND_ADDR {value:?}: {source}")]
    InvalidBindAddr {
        value: String,
        source: std::net::AddrParseError,
    },

    #[error("Invalid SEED_RECIPES {0:?}: expected true/false")]
    InvalidSeedFlag(String),
}

/// Server settings, read once at start-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind_addr: SocketAddr,
    /// Load the sample recipes into the store before serving.
    pub seed_recipes: bool,
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_addr_raw = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr_raw
            .parse()
            .map_err(|source| ConfigError::InvalidBindAddr {
                value: bind_addr_raw.clone(),
                source,
            })?;

        let seed_recipes = match lookup("SEED_RECIPES") {
            None => true,
            Some(value) => parse_flag(&value).ok_or(ConfigError::InvalidSeedFlag(value))?,
        };

        Ok(Self {
            bind_addr,
            seed_recipes,
        })
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
