//! # Models Module
//!
//! Data structures shared by the recipes, the Horizon client, the storage
//! layer and the HTTP API.

mod account;
pub use account::*;

mod amount;
pub use amount::*;

mod api_response;
pub use api_response::*;

mod app_state;
pub use app_state::*;

mod asset;
pub use asset::*;

mod claimant;
pub use claimant::*;

mod error;
pub use error::*;

mod form;
pub use form::*;

mod network;
pub use network::*;

mod status;
pub use status::*;
