//! This module defines the HTTP routes for network management.

use crate::{
    api::controllers::network::{self, SelectNetworkRequest},
    models::{AppState, NetworkConfig},
};
use actix_web::{get, post, put, web, Responder};

#[get("/networks")]
async fn list_networks(data: web::ThinData<AppState>) -> impl Responder {
    network::list_networks(&data.0).await
}

#[post("/networks")]
async fn add_network(
    request: web::Json<NetworkConfig>,
    data: web::ThinData<AppState>,
) -> impl Responder {
    network::add_network(request.into_inner(), &data.0).await
}

#[get("/networks/selected")]
async fn get_selected_network(data: web::ThinData<AppState>) -> impl Responder {
    network::get_selected_network(&data.0).await
}

#[put("/networks/selected")]
async fn select_network(
    request: web::Json<SelectNetworkRequest>,
    data: web::ThinData<AppState>,
) -> impl Responder {
    network::select_network(request.into_inner(), &data.0).await
}

/// Configures the network routes.
pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(list_networks)
        .service(add_network)
        .service(get_selected_network)
        .service(select_network);
}
