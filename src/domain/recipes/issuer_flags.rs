//! Set-options operations that prepare an issuer for freezing or clawback.

use soroban_rs::xdr::Operation;

use crate::constants::{AUTH_CLAWBACK_ENABLED_FLAG, AUTH_REVOCABLE_FLAG};
use crate::domain::operations::set_options;
use crate::models::{FormData, FormError};

fn set_flag(issuer: &str, flag: u32) -> Result<Operation, FormError> {
    set_options(
        &FormData::new()
            .with("setFlags", flag.to_string())
            .with("source", issuer),
    )
}

/// Revocable flag only: enough to freeze trustlines.
pub fn freeze_flag_operations(issuer: &str) -> Result<Vec<Operation>, FormError> {
    Ok(vec![set_flag(issuer, AUTH_REVOCABLE_FLAG)?])
}

/// Revocable, then clawback-enabled; clawback requires revocable.
pub fn clawback_flag_operations(issuer: &str) -> Result<Vec<Operation>, FormError> {
    Ok(vec![
        set_flag(issuer, AUTH_REVOCABLE_FLAG)?,
        set_flag(issuer, AUTH_CLAWBACK_ENABLED_FLAG)?,
    ])
}

pub fn issuer_flag_operations(
    issuer: &str,
    frozen: bool,
    clawback: bool,
) -> Result<Vec<Operation>, FormError> {
    if clawback {
        clawback_flag_operations(issuer)
    } else if frozen {
        freeze_flag_operations(issuer)
    } else {
        Ok(Vec::new())
    }
}
