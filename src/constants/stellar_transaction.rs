//! Constants for Stellar transaction assembly.
//!
//! Fees are expressed in stroops. Flag values mirror the XDR `AccountFlags`
//! and `TrustLineFlags` enumerations.

/// Fee charged per operation (stroops).
pub const STELLAR_BASE_FEE: u32 = 100;
/// Seconds a freshly assembled transaction stays valid.
pub const STELLAR_TRANSACTION_TIMEOUT_SECONDS: u64 = 30;
pub const STELLAR_MAX_OPERATIONS: usize = 100;
pub const STELLAR_MAX_SIGNATURES: usize = 20;
pub const STELLAR_MAX_CLAIMANTS: usize = 10;

pub const STROOPS_PER_UNIT: i64 = 10_000_000;
pub const STELLAR_AMOUNT_DECIMALS: usize = 7;

pub const AUTH_REQUIRED_FLAG: u32 = 0x1;
pub const AUTH_REVOCABLE_FLAG: u32 = 0x2;
pub const AUTH_IMMUTABLE_FLAG: u32 = 0x4;
pub const AUTH_CLAWBACK_ENABLED_FLAG: u32 = 0x8;

pub const TRUSTLINE_AUTHORIZED_FLAG: u32 = 0x1;
pub const TRUSTLINE_AUTHORIZED_TO_MAINTAIN_LIABILITIES_FLAG: u32 = 0x2;
pub const TRUSTLINE_CLAWBACK_ENABLED_FLAG: u32 = 0x4;
