//! # Services Module
//!
//! External service integrations. Horizon is the only one: every ledger read
//! and every submission goes through [`HorizonProviderTrait`].

mod horizon;
pub use horizon::*;
