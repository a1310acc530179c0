/// Configuration for the server: bind address, storage and Horizon client settings.
use std::{env, str::FromStr, time::Duration};

use crate::config::ConfigError;
use crate::constants::{DEFAULT_HORIZON_TIMEOUT_SECONDS, DEFAULT_STORAGE_PATH};
use crate::models::NetworkConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageMode {
    Memory,
    File,
}

impl FromStr for StorageMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "memory" | "in_memory" => Ok(StorageMode::Memory),
            "file" => Ok(StorageMode::File),
            other => Err(ConfigError::UnknownStorageMode(other.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// The host address the server will bind to.
    pub host: String,
    /// The port number the server will listen on.
    pub port: u16,
    /// Where assets and networks are kept.
    pub storage_mode: StorageMode,
    /// JSON document used when `storage_mode` is `File`.
    pub storage_path: String,
    /// Timeout applied to every Horizon and friendbot request.
    pub horizon_timeout: Duration,
    /// Preset selected when the network list is first seeded.
    pub default_network: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            storage_mode: StorageMode::Memory,
            storage_path: DEFAULT_STORAGE_PATH.to_string(),
            horizon_timeout: Duration::from_secs(DEFAULT_HORIZON_TIMEOUT_SECONDS),
            default_network: None,
        }
    }
}

fn parse_var<T: FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::invalid(name, &value)),
        _ => Ok(default),
    }
}

impl ServerConfig {
    /// Creates a new `ServerConfig` instance from environment variables.
    ///
    /// # Defaults
    ///
    /// - `HOST` defaults to `"0.0.0.0"`.
    /// - `APP_PORT` defaults to `8080`.
    /// - `STORAGE_MODE` defaults to `memory` (`memory` | `file`).
    /// - `STORAGE_PATH` defaults to `"./data/storage.json"`.
    /// - `HORIZON_TIMEOUT_SECONDS` defaults to `30`.
    /// - `DEFAULT_NETWORK` defaults to the first preset (`testnet`).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let storage_mode = match env::var("STORAGE_MODE") {
            Ok(mode) if !mode.trim().is_empty() => mode.trim().parse()?,
            _ => defaults.storage_mode,
        };

        let default_network = match env::var("DEFAULT_NETWORK") {
            Ok(name) if !name.trim().is_empty() => {
                let name = name.trim().to_string();
                if NetworkConfig::preset(&name).is_none() {
                    return Err(ConfigError::UnknownNetwork(name));
                }
                Some(name)
            }
            _ => None,
        };

        let timeout_seconds: u64 =
            parse_var("HORIZON_TIMEOUT_SECONDS", DEFAULT_HORIZON_TIMEOUT_SECONDS)?;
        if timeout_seconds == 0 {
            return Err(ConfigError::invalid("HORIZON_TIMEOUT_SECONDS", "0"));
        }

        Ok(Self {
            host: env::var("HOST").unwrap_or(defaults.host),
            port: parse_var("APP_PORT", defaults.port)?,
            storage_mode,
            storage_path: env::var("STORAGE_PATH").unwrap_or(defaults.storage_path),
            horizon_timeout: Duration::from_secs(timeout_seconds),
            default_network,
        })
    }
}
