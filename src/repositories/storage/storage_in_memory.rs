//! In-memory key/value storage guarded by a `tokio::sync::Mutex`.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::Mutex;

use super::KeyValueStorage;
use crate::models::RepositoryError;

#[derive(Debug, Default)]
pub struct InMemoryStorage {
    store: Mutex<HashMap<String, String>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStorage for InMemoryStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, RepositoryError> {
        let store = self.store.lock().await;
        Ok(store.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<(), RepositoryError> {
        let mut store = self.store.lock().await;
        store.insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), RepositoryError> {
        let mut store = self.store.lock().await;
        store.remove(key);
        Ok(())
    }
}
