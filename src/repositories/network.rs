//! Configured networks and the selected one.
//!
//! Networks live under the `networks` key as a JSON array and the selection
//! as an index under `selectedNetwork`. The presets are seeded on first
//! access and the default network is selected.

use std::sync::Arc;
use tokio::sync::Mutex;

use log::info;

use crate::constants::{NETWORKS_STORAGE_KEY, SELECTED_NETWORK_STORAGE_KEY};
use crate::models::{NetworkConfig, RepositoryError};
use crate::repositories::{get_json, set_json, Storage};

#[derive(Debug, Clone)]
pub struct NetworkRepository {
    storage: Arc<Storage>,
    default_network: Option<String>,
    // serializes seeding and read-modify-write cycles on both keys
    lock: Arc<Mutex<()>>,
}

impl NetworkRepository {
    pub fn new(storage: Arc<Storage>) -> Self {
        Self {
            storage,
            default_network: None,
            lock: Arc::new(Mutex::new(())),
        }
    }

    /// Preset selected when the presets are first seeded.
    pub fn with_default_network(mut self, name: Option<String>) -> Self {
        self.default_network = name;
        self
    }

    pub async fn list(&self) -> Result<Vec<NetworkConfig>, RepositoryError> {
        let _guard = self.lock.lock().await;
        self.load().await
    }

    async fn load(&self) -> Result<Vec<NetworkConfig>, RepositoryError> {
        let networks: Vec<NetworkConfig> =
            get_json(self.storage.as_ref(), NETWORKS_STORAGE_KEY)
                .await?
                .unwrap_or_default();
        if !networks.is_empty() {
            return Ok(networks);
        }
        self.seed().await
    }

    async fn seed(&self) -> Result<Vec<NetworkConfig>, RepositoryError> {
        let presets = NetworkConfig::presets();
        let selected = self
            .default_network
            .as_deref()
            .and_then(|name| presets.iter().position(|n| n.name.eq_ignore_ascii_case(name)))
            .unwrap_or(0);

        set_json(self.storage.as_ref(), NETWORKS_STORAGE_KEY, &presets).await?;
        set_json(self.storage.as_ref(), SELECTED_NETWORK_STORAGE_KEY, &selected).await?;
        info!(
            "Seeded {} network presets, selected '{}'",
            presets.len(),
            presets[selected].name
        );
        Ok(presets)
    }

    /// Appends a custom network; names are unique.
    pub async fn add(&self, network: NetworkConfig) -> Result<Vec<NetworkConfig>, RepositoryError> {
        network
            .validate()
            .map_err(|e| RepositoryError::ConstraintViolation(e.to_string()))?;
        let _guard = self.lock.lock().await;
        let mut networks = self.load().await?;
        if networks.iter().any(|n| n.name == network.name) {
            return Err(RepositoryError::ConstraintViolation(format!(
                "Network with name {} already exists",
                network.name
            )));
        }
        networks.push(network);
        set_json(self.storage.as_ref(), NETWORKS_STORAGE_KEY, &networks).await?;
        Ok(networks)
    }

    async fn load_selected(&self) -> Result<(usize, Vec<NetworkConfig>), RepositoryError> {
        let networks = self.load().await?;
        let index: usize = get_json(self.storage.as_ref(), SELECTED_NETWORK_STORAGE_KEY)
            .await?
            .unwrap_or(0);
        // a stale index falls back to the first network
        let index = if index < networks.len() { index } else { 0 };
        Ok((index, networks))
    }

    pub async fn selected_index(&self) -> Result<usize, RepositoryError> {
        let _guard = self.lock.lock().await;
        Ok(self.load_selected().await?.0)
    }

    pub async fn selected(&self) -> Result<NetworkConfig, RepositoryError> {
        let _guard = self.lock.lock().await;
        let (index, networks) = self.load_selected().await?;
        networks
            .into_iter()
            .nth(index)
            .ok_or_else(|| RepositoryError::NotFound("No network configured".to_string()))
    }

    pub async fn select(&self, index: usize) -> Result<NetworkConfig, RepositoryError> {
        let _guard = self.lock.lock().await;
        let networks = self.load().await?;
        let network = networks.get(index).cloned().ok_or_else(|| {
            RepositoryError::NotFound(format!("Network with index {} not found", index))
        })?;
        set_json(self.storage.as_ref(), SELECTED_NETWORK_STORAGE_KEY, &index).await?;
        info!("Selected network '{}'", network.name);
        Ok(network)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::KeyValueStorage;

    fn repo() -> NetworkRepository {
        NetworkRepository::new(Arc::new(Storage::new_in_memory()))
    }

    fn custom(name: &str) -> NetworkConfig {
        NetworkConfig {
            name: name.to_string(),
            horizon_url: "http://localhost:8000".to_string(),
            passphrase: "Standalone Network ; February 2017".to_string(),
            friendbot_url: Some("http://localhost:8000/friendbot".to_string()),
            explorer_network: "testnet".to_string(),
        }
    }

    #[tokio::test]
    async fn test_seeds_presets_once() {
        let storage = Arc::new(Storage::new_in_memory());
        let repo = NetworkRepository::new(storage.clone());

        let networks = repo.list().await.unwrap();
        assert_eq!(networks, NetworkConfig::presets());
        assert_eq!(repo.selected_index().await.unwrap(), 0);
        assert_eq!(
            storage.get(SELECTED_NETWORK_STORAGE_KEY).await.unwrap(),
            Some("0".to_string())
        );

        repo.add(custom("local")).await.unwrap();
        repo.select(3).await.unwrap();
        // a second listing must not reseed
        assert_eq!(repo.list().await.unwrap().len(), 4);
        assert_eq!(repo.selected().await.unwrap().name, "local");
    }

    #[tokio::test]
    async fn test_default_network_is_selected_on_seed() {
        let repo = repo().with_default_network(Some("public".to_string()));
        assert_eq!(repo.selected().await.unwrap(), NetworkConfig::public());
    }

    #[tokio::test]
    async fn test_duplicate_name_rejected() {
        let repo = repo();
        repo.add(custom("local")).await.unwrap();
        assert!(matches!(
            repo.add(custom("local")).await,
            Err(RepositoryError::ConstraintViolation(_))
        ));
    }

    #[tokio::test]
    async fn test_invalid_network_rejected() {
        let mut network = custom("bad");
        network.horizon_url = "nope".to_string();
        assert!(matches!(
            repo().add(network).await,
            Err(RepositoryError::ConstraintViolation(_))
        ));
    }

    #[tokio::test]
    async fn test_select_out_of_range() {
        let repo = repo();
        assert!(matches!(
            repo.select(10).await,
            Err(RepositoryError::NotFound(_))
        ));
        assert_eq!(repo.selected_index().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_stale_index_falls_back() {
        let storage = Arc::new(Storage::new_in_memory());
        let repo = NetworkRepository::new(storage.clone());
        repo.list().await.unwrap();
        storage
            .set(SELECTED_NETWORK_STORAGE_KEY, "42".to_string())
            .await
            .unwrap();
        assert_eq!(repo.selected().await.unwrap(), NetworkConfig::testnet());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_adds_keep_every_network() {
        let dir = tempfile::TempDir::new().unwrap();
        let storage = Arc::new(Storage::new_file(dir.path().join("storage.json")));
        let repo = NetworkRepository::new(storage.clone());

        // the same name twice per index: exactly one of each pair is accepted
        let handles: Vec<_> = (0..20)
            .map(|i| {
                let repo = repo.clone();
                tokio::spawn(async move { repo.add(custom(&format!("local-{}", i / 2))).await })
            })
            .collect();
        let mut accepted = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(_) => accepted += 1,
                Err(e) => assert!(matches!(e, RepositoryError::ConstraintViolation(_))),
            }
        }
        assert_eq!(accepted, 10);

        let networks = NetworkRepository::new(storage).list().await.unwrap();
        assert_eq!(networks.len(), NetworkConfig::presets().len() + 10);
        for i in 0..10 {
            let name = format!("local-{}", i);
            assert_eq!(networks.iter().filter(|n| n.name == name).count(), 1);
        }
    }
}
