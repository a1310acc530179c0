//! Conversion between decimal amount strings and stroops.
//!
//! Stellar amounts carry seven decimal places. Forms and Horizon both use the
//! decimal string form (`"999900.0000000"`); XDR uses signed 64-bit stroops.

use thiserror::Error;

use crate::constants::{STELLAR_AMOUNT_DECIMALS, STROOPS_PER_UNIT};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AmountError {
    #[error("amount is empty")]
    Empty,
    #[error("'{0}' is not a valid amount")]
    Invalid(String),
    #[error("'{0}' has more than 7 decimal places")]
    TooManyDecimals(String),
    #[error("'{0}' is too large")]
    Overflow(String),
}

/// Parses a non-negative decimal amount into stroops.
pub fn parse_amount(value: &str) -> Result<i64, AmountError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AmountError::Empty);
    }

    let (whole, fraction) = trimmed.split_once('.').unwrap_or((trimmed, ""));
    if whole.is_empty() && fraction.is_empty() {
        return Err(AmountError::Invalid(trimmed.to_string()));
    }
    if !whole.chars().all(|c| c.is_ascii_digit()) || !fraction.chars().all(|c| c.is_ascii_digit())
    {
        return Err(AmountError::Invalid(trimmed.to_string()));
    }
    if fraction.len() > STELLAR_AMOUNT_DECIMALS {
        return Err(AmountError::TooManyDecimals(trimmed.to_string()));
    }

    let whole_value: i64 = if whole.is_empty() {
        0
    } else {
        whole
            .parse()
            .map_err(|_| AmountError::Overflow(trimmed.to_string()))?
    };
    let fraction_value: i64 = if fraction.is_empty() {
        0
    } else {
        format!("{:0<width$}", fraction, width = STELLAR_AMOUNT_DECIMALS)
            .parse()
            .map_err(|_| AmountError::Invalid(trimmed.to_string()))?
    };

    whole_value
        .checked_mul(STROOPS_PER_UNIT)
        .and_then(|v| v.checked_add(fraction_value))
        .ok_or_else(|| AmountError::Overflow(trimmed.to_string()))
}

/// Formats stroops the way Horizon does, always with seven decimals.
pub fn format_amount(stroops: i64) -> String {
    let sign = if stroops < 0 { "-" } else { "" };
    let abs = stroops.unsigned_abs();
    let per_unit = STROOPS_PER_UNIT as u64;
    format!(
        "{}{}.{:0width$}",
        sign,
        abs / per_unit,
        abs % per_unit,
        width = STELLAR_AMOUNT_DECIMALS
    )
}
