use serde::Serialize;
use thiserror::Error;

/// Errors raised while assembling or signing a transaction.
#[derive(Error, Debug, Serialize, Clone, PartialEq)]
pub enum TransactionError {
    #[error("Transaction must have at least one operation")]
    EmptyOperations,

    #[error("Transaction has {count} operations, but maximum allowed is {max}")]
    TooManyOperations { count: usize, max: usize },

    #[error("Too many signatures (max {0})")]
    TooManySignatures(usize),

    #[error("Invalid account: {0}")]
    InvalidAccount(String),

    #[error("Sequence number overflow")]
    SequenceOverflow,

    #[error("XDR error: {0}")]
    Xdr(String),
}

impl From<soroban_rs::xdr::Error> for TransactionError {
    fn from(err: soroban_rs::xdr::Error) -> Self {
        TransactionError::Xdr(err.to_string())
    }
}
