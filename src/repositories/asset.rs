//! Assets created by the issuance recipe, stored under the `assets` key.

use std::sync::Arc;
use tokio::sync::Mutex;

use crate::constants::ASSETS_STORAGE_KEY;
use crate::models::{RepositoryError, StoredAsset};
use crate::repositories::{get_json, set_json, KeyValueStorage, Storage};

#[derive(Debug, Clone)]
pub struct AssetRepository {
    storage: Arc<Storage>,
    // serializes read-modify-write cycles on the `assets` key
    lock: Arc<Mutex<()>>,
}

impl AssetRepository {
    pub fn new(storage: Arc<Storage>) -> Self {
        Self {
            storage,
            lock: Arc::new(Mutex::new(())),
        }
    }

    /// All stored assets; a missing or non-array value reads as empty.
    pub async fn list(&self) -> Result<Vec<StoredAsset>, RepositoryError> {
        let _guard = self.lock.lock().await;
        self.load().await
    }

    async fn load(&self) -> Result<Vec<StoredAsset>, RepositoryError> {
        let raw = match self.storage.get(ASSETS_STORAGE_KEY).await? {
            Some(raw) => raw,
            None => {
                set_json(self.storage.as_ref(), ASSETS_STORAGE_KEY, &Vec::<StoredAsset>::new())
                    .await?;
                return Ok(Vec::new());
            }
        };
        match serde_json::from_str::<serde_json::Value>(&raw)? {
            value @ serde_json::Value::Array(_) => Ok(serde_json::from_value(value)?),
            _ => Ok(Vec::new()),
        }
    }

    pub async fn get(&self, code: &str, issuer: &str) -> Result<Option<StoredAsset>, RepositoryError> {
        Ok(self
            .list()
            .await?
            .into_iter()
            .find(|a| a.code == code && a.issuer == issuer))
    }

    /// Appends the asset unless the same code/issuer pair is already stored.
    pub async fn add(&self, asset: StoredAsset) -> Result<StoredAsset, RepositoryError> {
        let _guard = self.lock.lock().await;
        let mut assets = self.load().await?;
        if !assets.contains(&asset) {
            assets.push(asset.clone());
            set_json(self.storage.as_ref(), ASSETS_STORAGE_KEY, &assets).await?;
        }
        Ok(asset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asset(code: &str) -> StoredAsset {
        StoredAsset {
            code: code.to_string(),
            issuer: "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF".to_string(),
        }
    }

    #[tokio::test]
    async fn test_first_access_initializes_empty_list() {
        let storage = Arc::new(Storage::new_in_memory());
        let repo = AssetRepository::new(storage.clone());
        assert!(repo.list().await.unwrap().is_empty());
        assert_eq!(
            storage.get(ASSETS_STORAGE_KEY).await.unwrap(),
            Some("[]".to_string())
        );
    }

    #[tokio::test]
    async fn test_add_and_get() {
        let repo = AssetRepository::new(Arc::new(Storage::new_in_memory()));
        repo.add(asset("testAsset")).await.unwrap();
        repo.add(asset("testCoin")).await.unwrap();
        repo.add(asset("testAsset")).await.unwrap();

        let assets = repo.list().await.unwrap();
        assert_eq!(assets, vec![asset("testAsset"), asset("testCoin")]);

        let found = repo
            .get("testCoin", &asset("testCoin").issuer)
            .await
            .unwrap();
        assert_eq!(found, Some(asset("testCoin")));
        assert_eq!(repo.get("other", "G").await.unwrap(), None);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_adds_are_all_stored() {
        let dir = tempfile::TempDir::new().unwrap();
        let storage = Arc::new(Storage::new_file(dir.path().join("storage.json")));
        let repo = AssetRepository::new(storage.clone());

        let handles: Vec<_> = (0..20)
            .map(|i| {
                let repo = repo.clone();
                tokio::spawn(async move { repo.add(asset(&format!("A{}", i))).await })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let stored = AssetRepository::new(storage).list().await.unwrap();
        assert_eq!(stored.len(), 20);
        for i in 0..20 {
            assert!(stored.contains(&asset(&format!("A{}", i))));
        }
    }

    #[tokio::test]
    async fn test_non_array_value_reads_empty() {
        let storage = Arc::new(Storage::new_in_memory());
        storage
            .set(ASSETS_STORAGE_KEY, "{\"code\":\"x\"}".to_string())
            .await
            .unwrap();
        let repo = AssetRepository::new(storage);
        assert!(repo.list().await.unwrap().is_empty());
    }
}
