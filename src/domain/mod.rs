//! # Domain Module
//!
//! Core logic of the service:
//!
//! * Operation builders turning form fields into XDR operations
//! * Transaction assembly and signing
//! * Recipes chaining builders, signing and Horizon submission
//! * Status reporting with explorer links

pub mod operations;
pub use operations::*;

pub mod recipes;
pub use recipes::*;

pub mod status;
pub use status::*;

pub mod transaction;
pub use transaction::*;
