//! # Repository Module
//!
//! Persistence of assets and network configurations on top of a key/value
//! storage backend.

mod storage;
pub use storage::*;

mod asset;
pub use asset::*;

mod network;
pub use network::*;
