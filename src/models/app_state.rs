use std::{sync::Arc, time::Duration};

use crate::repositories::{AssetRepository, NetworkRepository};

#[derive(Clone, Debug)]
pub struct AppState {
    pub network_repository: Arc<NetworkRepository>,
    pub asset_repository: Arc<AssetRepository>,
    pub horizon_timeout: Duration,
}

impl AppState {
    pub fn network_repository(&self) -> Arc<NetworkRepository> {
        self.network_repository.clone()
    }

    pub fn asset_repository(&self) -> Arc<AssetRepository> {
        self.asset_repository.clone()
    }
}
