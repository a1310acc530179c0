mod serde;
pub use serde::*;

mod key;
pub use key::*;

#[cfg(test)]
pub mod mocks;
