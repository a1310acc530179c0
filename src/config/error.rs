//! Error types for the configuration system.
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: String, value: String },
    #[error("Unknown storage mode: {0}")]
    UnknownStorageMode(String),
    #[error("Unknown default network: {0}")]
    UnknownNetwork(String),
}

impl ConfigError {
    pub fn invalid(name: &str, value: &str) -> Self {
        ConfigError::InvalidValue {
            name: name.to_string(),
            value: value.to_string(),
        }
    }
}
