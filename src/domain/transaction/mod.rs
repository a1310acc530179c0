//! Transaction assembly, signing and encoding.

mod builder;
pub use builder::*;

mod signing;
pub use signing::*;

mod xdr_utils;
pub use xdr_utils::*;
