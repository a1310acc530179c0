//! Outcome of a recipe run as shown to the user.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionState {
    Idle,
    Submitting,
    Success,
    Failed,
}

impl TransactionState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, TransactionState::Success | TransactionState::Failed)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[error("Illegal status transition from {from:?} to {to:?}")]
pub struct StatusTransitionError {
    pub from: TransactionState,
    pub to: TransactionState,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplorerLink {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusReport {
    pub state: TransactionState,
    pub message: String,
    #[serde(default)]
    pub links: Vec<ExplorerLink>,
}

impl Default for StatusReport {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusReport {
    pub fn new() -> Self {
        Self {
            state: TransactionState::Idle,
            message: String::new(),
            links: Vec::new(),
        }
    }

    fn transition(&mut self, to: TransactionState) -> Result<(), StatusTransitionError> {
        let allowed = matches!(
            (self.state, to),
            (TransactionState::Idle, TransactionState::Submitting)
                | (TransactionState::Submitting, TransactionState::Success)
                | (TransactionState::Submitting, TransactionState::Failed)
        );
        if !allowed {
            return Err(StatusTransitionError {
                from: self.state,
                to,
            });
        }
        self.state = to;
        Ok(())
    }

    pub fn start(&mut self) -> Result<(), StatusTransitionError> {
        self.transition(TransactionState::Submitting)?;
        self.message.clear();
        self.links.clear();
        Ok(())
    }

    pub fn succeed(
        &mut self,
        message: impl Into<String>,
        links: Vec<ExplorerLink>,
    ) -> Result<(), StatusTransitionError> {
        self.transition(TransactionState::Success)?;
        self.message = message.into();
        self.links = links;
        Ok(())
    }

    /// Records a failure; the message is rendered as `Error: <message>`.
    pub fn fail(&mut self, message: impl AsRef<str>) -> Result<(), StatusTransitionError> {
        self.transition(TransactionState::Failed)?;
        self.message = format!("Error: {}", message.as_ref());
        self.links.clear();
        Ok(())
    }
}
