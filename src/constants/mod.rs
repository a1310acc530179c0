//! This module contains all the constant values used in the system
mod stellar_transaction;
pub use stellar_transaction::*;

mod network;
pub use network::*;

mod storage;
pub use storage::*;

mod recipe;
pub use recipe::*;
