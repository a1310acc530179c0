//! # Accounts Controller
//!
//! Read-only account lookups against the selected network.

use actix_web::HttpResponse;

use super::selected_horizon;
use crate::{
    models::{ApiError, ApiResponse, AppState, FormData},
    services::HorizonProviderTrait,
};

pub async fn claimable_balances(
    account_id: String,
    state: &AppState,
) -> Result<HttpResponse, ApiError> {
    // validates the G... address before anything is sent upstream
    let account_id = FormData::new()
        .with("accountId", account_id)
        .public_key("accountId")?;

    let (_, client) = selected_horizon(state).await?;
    let balances = client.claimable_balances(&account_id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(balances)))
}
