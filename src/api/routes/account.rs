//! This module defines the HTTP routes for account lookups.

use crate::{api::controllers::account, models::AppState};
use actix_web::{get, web, Responder};

/// Claimable balances the account can claim.
#[get("/accounts/{account_id}/claimable-balances")]
async fn claimable_balances(
    account_id: web::Path<String>,
    data: web::ThinData<AppState>,
) -> impl Responder {
    account::claimable_balances(account_id.into_inner(), &data.0).await
}

/// Configures the account routes.
pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(claimable_balances);
}
