//! # Assets Controller

use actix_web::HttpResponse;

use crate::models::{ApiError, ApiResponse, AppState};

/// Assets stored by previous issuance runs.
pub async fn list_assets(state: &AppState) -> Result<HttpResponse, ApiError> {
    let assets = state.asset_repository.list().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(assets)))
}
