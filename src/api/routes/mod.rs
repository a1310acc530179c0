//! # API Routes Module
//!
//! Configures HTTP routes for the service API.
//!
//! ## Routes
//!
//! * `/health` - Health check endpoint
//! * `/recipes` - Recipe runs
//! * `/operations` - Operation builder dry runs
//! * `/networks` - Network list and selection
//! * `/assets` - Issued assets
//! * `/accounts` - Account lookups

pub mod account;
pub mod asset;
pub mod health;
pub mod network;
pub mod operation;
pub mod recipe;

use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::init)
        .configure(recipe::init)
        .configure(operation::init)
        .configure(network::init)
        .configure(asset::init)
        .configure(account::init);
}
