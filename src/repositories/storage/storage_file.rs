//! Key/value storage persisted as one JSON object on disk.
//!
//! Every write rewrites the whole file through a temporary sibling and a
//! rename, so a crash never leaves a half-written document behind.

use async_trait::async_trait;
use log::debug;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

use super::KeyValueStorage;
use crate::models::RepositoryError;

type Document = BTreeMap<String, String>;

#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_document(&self) -> Result<Document, RepositoryError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) if raw.trim().is_empty() => Ok(Document::new()),
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Document::new()),
            Err(e) => Err(e.into()),
        }
    }

    async fn write_document(&self, document: &Document) -> Result<(), RepositoryError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        let tmp_path = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp_path, serde_json::to_vec_pretty(document)?).await?;
        tokio::fs::rename(&tmp_path, &self.path).await?;
        debug!("storage written to {}", self.path.display());
        Ok(())
    }
}

#[async_trait]
impl KeyValueStorage for FileStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, RepositoryError> {
        let _guard = self.lock.lock().await;
        let document = self.read_document().await?;
        Ok(document.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<(), RepositoryError> {
        let _guard = self.lock.lock().await;
        let mut document = self.read_document().await?;
        document.insert(key.to_string(), value);
        self.write_document(&document).await
    }

    async fn remove(&self, key: &str) -> Result<(), RepositoryError> {
        let _guard = self.lock.lock().await;
        let mut document = self.read_document().await?;
        if document.remove(key).is_some() {
            self.write_document(&document).await?;
        }
        Ok(())
    }
}
