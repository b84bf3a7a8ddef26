//! Process configuration from environment variables (after `dotenvy` has loaded any `.env`).

use crate::error::ConfigError;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8004";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_BODY_LIMIT_BYTES: usize = 64 * 1024;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// PostgreSQL connection string; TLS follows its `sslmode`.
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
    pub body_limit: usize,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let database_url = get("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let bind_addr: SocketAddr = parse(
            "BIND_ADDR",
            get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
        )?;
        let max_connections = parse_or("DB_MAX_CONNECTIONS", get("DB_MAX_CONNECTIONS"), || {
            DEFAULT_MAX_CONNECTIONS
        })?;
        let acquire_secs = parse_or("DB_ACQUIRE_TIMEOUT_SECS", get("DB_ACQUIRE_TIMEOUT_SECS"), || {
            DEFAULT_ACQUIRE_TIMEOUT_SECS
        })?;
        let body_limit = parse_or("BODY_LIMIT_BYTES", get("BODY_LIMIT_BYTES"), || {
            DEFAULT_BODY_LIMIT_BYTES
        })?;

        if max_connections == 0 {
            return Err(ConfigError::Invalid {
                name: "DB_MAX_CONNECTIONS",
                value: "0".into(),
            });
        }

        Ok(ServerConfig {
            database_url,
            bind_addr,
            max_connections,
            acquire_timeout: Duration::from_secs(acquire_secs),
            body_limit,
        })
    }
}

fn parse_or<T: FromStr>(
    name: &'static str,
    raw: Option<String>,
    default: impl FnOnce() -> T,
) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default()),
        Some(value) => parse(name, value),
    }
}

fn parse<T: FromStr>(name: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid { name, value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(pairs: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply() {
        let config = load(&[("DATABASE_URL", "postgres://localhost/cars")]).unwrap();
        assert_eq!(config.bind_addr.to_string(), DEFAULT_BIND_ADDR);
        assert_eq!(config.max_connections, DEFAULT_MAX_CONNECTIONS);
        assert_eq!(config.acquire_timeout, Duration::from_secs(DEFAULT_ACQUIRE_TIMEOUT_SECS));
        assert_eq!(config.body_limit, DEFAULT_BODY_LIMIT_BYTES);
    }

    #[test]
    fn database_url_is_required() {
        assert!(matches!(load(&[]), Err(ConfigError::Missing("DATABASE_URL"))));
        assert!(matches!(
            load(&[("DATABASE_URL", "  ")]),
            Err(ConfigError::Missing("DATABASE_URL"))
        ));
    }

    #[test]
    fn overrides_are_parsed() {
        let config = load(&[
            ("DATABASE_URL", "postgres://db/cars?sslmode=require"),
            ("BIND_ADDR", "127.0.0.1:9000"),
            ("DB_MAX_CONNECTIONS", "12"),
            ("DB_ACQUIRE_TIMEOUT_SECS", "3"),
            ("BODY_LIMIT_BYTES", "1024"),
        ])
        .unwrap();
        assert_eq!(config.bind_addr.port(), 9000);
        assert_eq!(config.max_connections, 12);
        assert_eq!(config.acquire_timeout, Duration::from_secs(3));
        assert_eq!(config.body_limit, 1024);
    }

    #[test]
    fn invalid_values_name_the_variable() {
        let err = load(&[("DATABASE_URL", "postgres://x"), ("DB_MAX_CONNECTIONS", "many")]).unwrap_err();
        assert_eq!(err.to_string(), "invalid value for DB_MAX_CONNECTIONS: 'many'");
        assert!(load(&[("DATABASE_URL", "postgres://x"), ("DB_MAX_CONNECTIONS", "0")]).is_err());
        let err = load(&[("DATABASE_URL", "postgres://x"), ("BIND_ADDR", "localhost")]).unwrap_err();
        assert_eq!(err.to_string(), "invalid value for BIND_ADDR: 'localhost'");
    }
}
