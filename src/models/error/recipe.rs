use serde::Serialize;
use thiserror::Error;

use super::{FormError, HorizonError, RepositoryError, TransactionError};

/// Failure of one recipe run (one user action).
#[derive(Error, Debug, Serialize, Clone, PartialEq)]
pub enum RecipeError {
    #[error(transparent)]
    Form(#[from] FormError),

    #[error(transparent)]
    Transaction(#[from] TransactionError),

    #[error(transparent)]
    Horizon(#[from] HorizonError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// A ledger-state check failed after accounts were loaded.
    #[error("{0}")]
    Precondition(String),

    /// A submission failed; `summary` is the user-facing line.
    #[error("{summary} {detail}")]
    Failed { summary: String, detail: String },
}

impl RecipeError {
    /// True when nothing was sent to the network.
    pub fn is_validation(&self) -> bool {
        matches!(self, RecipeError::Form(_) | RecipeError::Transaction(_))
    }
}
