//! Configuration for Stellar Chef.
//!
//! All settings come from environment variables (optionally loaded from a
//! `.env` file by the binary). See [`ServerConfig::from_env`] for the list.
mod server_config;
pub use server_config::*;

mod error;
pub use error::*;
