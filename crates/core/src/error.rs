use thiserror::Error;

/// Startup configuration errors. All of them are fatal.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("environment variable {0} must be set")]
    MissingVar(&'static str),

    #[error("invalid connect string '{value}': {reason}")]
    InvalidConnectString { value: String, reason: &'static str },
}
