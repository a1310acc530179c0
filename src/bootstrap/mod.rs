//! Initialization routines run once at startup.
//!
//! # Submodules
//!
//! - `initialize_app_state`: storage backend, repositories and the shared state
mod initialize_app_state;
pub use initialize_app_state::*;
