use serde::Serialize;
use thiserror::Error;

/// Errors returned by the Horizon client.
///
/// Submission failures carry the normalized message: the serialized
/// `extras.result_codes` object when Horizon sent one, the whole error body
/// otherwise.
#[derive(Error, Debug, Serialize, Clone, PartialEq)]
pub enum HorizonError {
    #[error("Failed to load account {account_id}: {reason}")]
    LoadAccount { account_id: String, reason: String },

    #[error("Transaction failed: {0}")]
    SubmissionFailed(String),

    #[error("Friendbot funding failed for {account_id}: {reason}")]
    Friendbot { account_id: String, reason: String },

    #[error("Friendbot is not available on network {0}")]
    FriendbotUnavailable(String),

    #[error("Request error: {0}")]
    Request(String),

    #[error("Invalid Horizon response: {0}")]
    InvalidResponse(String),

    #[error("Network configuration error: {0}")]
    NetworkConfiguration(String),
}

impl From<reqwest::Error> for HorizonError {
    fn from(err: reqwest::Error) -> Self {
        HorizonError::Request(err.to_string())
    }
}
