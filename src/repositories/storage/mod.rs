//! Key/value storage backends.
//!
//! Values are JSON-encoded strings stored under fixed keys (`assets`,
//! `networks`, `selectedNetwork`). Two backends are available:
//!
//! - [`InMemoryStorage`]: process-local map, lost on restart
//! - [`FileStorage`]: a single JSON object persisted on disk

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use std::path::PathBuf;

mod storage_file;
mod storage_in_memory;

pub use storage_file::FileStorage;
pub use storage_in_memory::InMemoryStorage;

use crate::config::{ServerConfig, StorageMode};
use crate::models::RepositoryError;

#[async_trait]
#[cfg_attr(test, automock)]
pub trait KeyValueStorage: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, RepositoryError>;
    async fn set(&self, key: &str, value: String) -> Result<(), RepositoryError>;
    async fn remove(&self, key: &str) -> Result<(), RepositoryError>;
}

#[derive(Debug)]
pub enum Storage {
    InMemory(InMemoryStorage),
    File(FileStorage),
}

impl Storage {
    pub fn new_in_memory() -> Self {
        Self::InMemory(InMemoryStorage::new())
    }

    pub fn new_file(path: impl Into<PathBuf>) -> Self {
        Self::File(FileStorage::new(path))
    }

    pub fn from_config(config: &ServerConfig) -> Self {
        match config.storage_mode {
            StorageMode::Memory => Self::new_in_memory(),
            StorageMode::File => Self::new_file(&config.storage_path),
        }
    }
}

#[async_trait]
impl KeyValueStorage for Storage {
    async fn get(&self, key: &str) -> Result<Option<String>, RepositoryError> {
        match self {
            Storage::InMemory(s) => s.get(key).await,
            Storage::File(s) => s.get(key).await,
        }
    }

    async fn set(&self, key: &str, value: String) -> Result<(), RepositoryError> {
        match self {
            Storage::InMemory(s) => s.set(key, value).await,
            Storage::File(s) => s.set(key, value).await,
        }
    }

    async fn remove(&self, key: &str) -> Result<(), RepositoryError> {
        match self {
            Storage::InMemory(s) => s.remove(key).await,
            Storage::File(s) => s.remove(key).await,
        }
    }
}

/// Reads a JSON value stored under `key`.
pub async fn get_json<S, T>(storage: &S, key: &str) -> Result<Option<T>, RepositoryError>
where
    S: KeyValueStorage + ?Sized,
    T: serde::de::DeserializeOwned,
{
    match storage.get(key).await? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

pub async fn set_json<S, T>(storage: &S, key: &str, value: &T) -> Result<(), RepositoryError>
where
    S: KeyValueStorage + ?Sized,
    T: serde::Serialize + Sync,
{
    storage.set(key, serde_json::to_string(value)?).await
}
