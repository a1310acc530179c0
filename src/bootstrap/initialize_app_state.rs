//! Application state initialization
//!
//! Opens the configured storage backend, builds the repositories on top of it
//! and seeds the network presets so the first request finds a selection.
use crate::{
    config::ServerConfig,
    models::AppState,
    repositories::{AssetRepository, NetworkRepository, Storage},
};
use actix_web::web;
use color_eyre::Result;
use eyre::WrapErr;
use log::info;
use std::sync::Arc;

pub struct RepositoryCollection {
    pub network: Arc<NetworkRepository>,
    pub asset: Arc<AssetRepository>,
}

/// Initializes repositories based on the server configuration
pub fn initialize_repositories(config: &ServerConfig) -> RepositoryCollection {
    let storage = Arc::new(Storage::from_config(config));

    RepositoryCollection {
        network: Arc::new(
            NetworkRepository::new(storage.clone())
                .with_default_network(config.default_network.clone()),
        ),
        asset: Arc::new(AssetRepository::new(storage)),
    }
}

/// Initializes application state
///
/// # Errors
///
/// Returns error if the storage backend cannot be read while seeding networks.
pub async fn initialize_app_state(
    server_config: Arc<ServerConfig>,
) -> Result<web::ThinData<AppState>> {
    let repositories = initialize_repositories(&server_config);

    let networks = repositories
        .network
        .list()
        .await
        .wrap_err("Failed to read networks from storage")?;
    let selected = repositories
        .network
        .selected()
        .await
        .wrap_err("Failed to read the selected network")?;
    info!(
        "{} networks available, selected '{}' ({})",
        networks.len(),
        selected.name,
        selected.horizon_url
    );

    Ok(web::ThinData(AppState {
        network_repository: repositories.network,
        asset_repository: repositories.asset,
        horizon_timeout: server_config.horizon_timeout,
    }))
}
