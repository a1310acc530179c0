//! # Stellar Chef
//!
//! An HTTP service that runs Stellar recipes (asset issuance, clawback,
//! trustline freezing, sponsored reserves) against a selectable Horizon
//! network.
//!
//! ## Usage
//!
//! ```bash
//! cargo run
//! ```

use std::sync::Arc;

use actix_web::{
    middleware::{self, Logger},
    web, App, HttpServer,
};
use color_eyre::{eyre::WrapErr, Result};
use dotenvy::dotenv;
use log::info;

use stellar_chef::{
    api, bootstrap::initialize_app_state, config::ServerConfig, logging::setup_logging,
};

#[actix_web::main]
async fn main() -> Result<()> {
    // Initialize error reporting with eyre
    color_eyre::install().wrap_err("Failed to initialize error reporting")?;

    dotenv().ok();
    setup_logging().wrap_err("Failed to initialize logging")?;

    let config = Arc::new(ServerConfig::from_env().wrap_err("Invalid server configuration")?);
    let app_state = initialize_app_state(config.clone()).await?;

    info!("Starting server on {}:{}", config.host, config.port);
    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Compress::default())
            .wrap(middleware::NormalizePath::trim())
            .wrap(middleware::DefaultHeaders::new())
            .wrap(Logger::default())
            .app_data(app_state.clone())
            .service(web::scope("/api/v1").configure(api::routes::configure_routes))
    })
    .bind((config.host.as_str(), config.port))
    .wrap_err_with(|| format!("Failed to bind server to {}:{}", config.host, config.port))?
    .shutdown_timeout(5)
    .run()
    .await
    .wrap_err("Server runtime error")
}
