//! This module defines the HTTP route listing issued assets.

use crate::{api::controllers::asset, models::AppState};
use actix_web::{get, web, Responder};

#[get("/assets")]
async fn list_assets(data: web::ThinData<AppState>) -> impl Responder {
    asset::list_assets(&data.0).await
}

/// Configures the asset routes.
pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(list_assets);
}
