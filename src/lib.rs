//! Stellar Chef library
//!
//! Recipes for composing, signing and submitting Stellar operations through
//! Horizon, exposed as an HTTP API. It includes:
//!
//! - Operation builders turning flat form fields into XDR operations
//! - Transaction assembly and multi-key signing
//! - Recipes for asset issuance, clawback, freezing and sponsored reserves
//! - Persistent network and asset lists
//!
//! # Module Structure
//!
//! - `api`: HTTP routes and controllers
//! - `bootstrap`: Startup wiring of storage and application state
//! - `config`: Environment configuration
//! - `constants`: Protocol and default values
//! - `domain`: Builders, transactions, recipes and status reporting
//! - `logging`: Logging setup
//! - `models`: Shared data structures and errors
//! - `repositories`: Key-value storage and the repositories on top of it
//! - `services`: Horizon client
//! - `utils`: Common utilities and helper functions

pub mod api;
pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod domain;
pub mod logging;
pub mod models;
pub mod repositories;
pub mod services;
pub mod utils;

pub use models::{ApiError, AppState};
