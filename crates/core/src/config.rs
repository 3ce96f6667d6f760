//! Database connection settings read once at startup.

use std::fmt;

use crate::constants::{
    ENV_ACQUIRE_TIMEOUT_SECS, ENV_DB_CONNECTSTRING, ENV_DB_PASSWORD, ENV_DB_USERNAME,
    ENV_POOL_SIZE, PG_DEFAULT_PORT, PG_POOL_ACQUIRE_TIMEOUT_SECS, PG_POOL_SIZE,
};
use crate::env_config::env_parse_with_default;
use crate::error::ConfigError;

/// Credentials, target and pool sizing for the PostgreSQL pool.
///
/// The connect string has the form `host[:port]/database`, e.g. `localhost/hits`,
/// `db.internal:5433/hits` or `[::1]:5433/hits`.
#[derive(Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub username: String,
    pub password: String,
    pub host: String,
    pub port: u16,
    pub database: String,
    /// Fixed pool size: used as both minimum and maximum connection count.
    pub pool_size: u32,
    pub acquire_timeout_secs: u64,
}

impl DatabaseConfig {
    /// Build from the `HIT_COUNTER_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let username = required_var(ENV_DB_USERNAME)?;
        let password = required_var(ENV_DB_PASSWORD)?;
        let connect_string = required_var(ENV_DB_CONNECTSTRING)?;

        let mut config = Self::from_parts(username, password, &connect_string)?;
        config.pool_size = env_parse_with_default(ENV_POOL_SIZE, PG_POOL_SIZE).max(1);
        config.acquire_timeout_secs =
            env_parse_with_default(ENV_ACQUIRE_TIMEOUT_SECS, PG_POOL_ACQUIRE_TIMEOUT_SECS);
        Ok(config)
    }

    /// Build from explicit credentials and a connect string, with default pool sizing.
    pub fn from_parts(
        username: String,
        password: String,
        connect_string: &str,
    ) -> Result<Self, ConfigError> {
        let (host, port, database) = parse_connect_string(connect_string)?;
        Ok(Self {
            username,
            password,
            host,
            port,
            database,
            pool_size: PG_POOL_SIZE,
            acquire_timeout_secs: PG_POOL_ACQUIRE_TIMEOUT_SECS,
        })
    }

    /// `host:port/database`, safe to log. IPv6 hosts are bracketed.
    pub fn target(&self) -> String {
        if self.host.contains(':') {
            format!("[{}]:{}/{}", self.host, self.port, self.database)
        } else {
            format!("{}:{}/{}", self.host, self.port, self.database)
        }
    }
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database", &self.database)
            .field("pool_size", &self.pool_size)
            .field("acquire_timeout_secs", &self.acquire_timeout_secs)
            .finish()
    }
}

fn required_var(name: &'static str) -> Result<String, ConfigError> {
    match std::env::var(name) {
        Ok(v) if !v.is_empty() => Ok(v),
        _ => Err(ConfigError::MissingVar(name)),
    }
}

fn parse_connect_string(value: &str) -> Result<(String, u16, String), ConfigError> {
    let invalid = |reason| ConfigError::InvalidConnectString { value: value.to_owned(), reason };

    let (authority, database) =
        value.trim().split_once('/').ok_or_else(|| invalid("missing '/database'"))?;
    if database.is_empty() || database.contains('/') {
        return Err(invalid("database name must be a single non-empty segment"));
    }

    // IPv6 literals must be bracketed: `[::1]:5433/hits`.
    let (host, port) = match authority.strip_prefix('[') {
        Some(rest) => {
            let (host, after) = rest.split_once(']').ok_or_else(|| invalid("unclosed '['"))?;
            let port = match after {
                "" => None,
                _ => Some(after.strip_prefix(':').ok_or_else(|| invalid("expected ':' after ']'"))?),
            };
            (host, port)
        },
        None => match authority.split_once(':') {
            Some((_, port)) if port.contains(':') => {
                return Err(invalid("IPv6 host must be enclosed in '[' and ']'"));
            },
            Some((host, port)) => (host, Some(port)),
            None => (authority, None),
        },
    };
    let port = match port {
        Some(port) => port.parse::<u16>().map_err(|_| invalid("port is not a number"))?,
        None => PG_DEFAULT_PORT,
    };
    if host.is_empty() {
        return Err(invalid("missing host"));
    }

    Ok((host.to_owned(), port, database.to_owned()))
}
