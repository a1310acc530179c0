//! # Networks Controller
//!
//! Lists, adds and selects the Horizon networks recipes run against.

use actix_web::HttpResponse;
use serde::{Deserialize, Serialize};

use crate::models::{ApiError, ApiResponse, AppState, NetworkConfig};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedNetwork {
    pub index: usize,
    pub network: NetworkConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectNetworkRequest {
    pub index: usize,
}

pub async fn list_networks(state: &AppState) -> Result<HttpResponse, ApiError> {
    let networks = state.network_repository.list().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(networks)))
}

pub async fn add_network(
    network: NetworkConfig,
    state: &AppState,
) -> Result<HttpResponse, ApiError> {
    let networks = state.network_repository.add(network).await?;
    Ok(HttpResponse::Created().json(ApiResponse::success(networks)))
}

pub async fn get_selected_network(state: &AppState) -> Result<HttpResponse, ApiError> {
    let index = state.network_repository.selected_index().await?;
    let network = state.network_repository.selected().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(SelectedNetwork { index, network })))
}

pub async fn select_network(
    request: SelectNetworkRequest,
    state: &AppState,
) -> Result<HttpResponse, ApiError> {
    let network = state.network_repository.select(request.index).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(SelectedNetwork {
        index: request.index,
        network,
    })))
}
