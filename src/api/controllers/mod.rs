//! # API Controllers Module
//!
//! Handles HTTP request processing and business logic coordination.
//!
//! ## Controllers
//!
//! * `recipe` - Recipe runs against the selected network
//! * `operation` - Single operation dry runs
//! * `network` - Network list and selection
//! * `asset` - Assets created by the issuance recipe
//! * `account` - Account lookups on Horizon

pub mod account;
pub mod asset;
pub mod network;
pub mod operation;
pub mod recipe;

use crate::{
    models::{ApiError, AppState, NetworkConfig},
    services::HorizonClient,
};

/// Horizon client for the currently selected network.
pub(crate) async fn selected_horizon(
    state: &AppState,
) -> Result<(NetworkConfig, HorizonClient), ApiError> {
    let network = state.network_repository.selected().await?;
    let client = HorizonClient::new(&network, state.horizon_timeout)?;
    Ok((network, client))
}
