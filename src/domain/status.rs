//! Explorer links and user-facing status lines.

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::constants::STELLAR_EXPERT_EXPLORER_URL;
use crate::models::{AssetSpec, ExplorerLink, NetworkConfig, RecipeError, StatusReport};

pub const TRANSACTION_SUCCESS_MESSAGE: &str = "Transaction successful";
pub const ASSET_FROZEN_MESSAGE: &str = "Asset frozen successfully!";
pub const ASSET_UNFROZEN_MESSAGE: &str = "Asset unfrozen successfully!";
pub const NOT_ENOUGH_FUNDS_FOR_HOLDERS_MESSAGE: &str =
    "Not enough funds for distributor account to create holders.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExplorerResource {
    Account,
    Asset,
    Transaction,
}

impl ExplorerResource {
    fn path_segment(&self) -> &'static str {
        match self {
            ExplorerResource::Account => "account",
            ExplorerResource::Asset => "asset",
            ExplorerResource::Transaction => "tx",
        }
    }
}

pub fn explorer_url(network: &NetworkConfig, resource: ExplorerResource, id: &str) -> String {
    format!(
        "{}/{}/{}/{}",
        STELLAR_EXPERT_EXPLORER_URL,
        network.explorer_network,
        resource.path_segment(),
        id
    )
}

pub fn account_link(network: &NetworkConfig, label: &str, account_id: &str) -> ExplorerLink {
    ExplorerLink {
        label: label.to_string(),
        url: explorer_url(network, ExplorerResource::Account, account_id),
    }
}

pub fn asset_link(network: &NetworkConfig, asset: &AssetSpec) -> ExplorerLink {
    ExplorerLink {
        label: format!("Asset {}", asset.code()),
        url: explorer_url(network, ExplorerResource::Asset, &asset.explorer_id()),
    }
}

pub fn transaction_link(network: &NetworkConfig, hash: &str) -> ExplorerLink {
    ExplorerLink {
        label: "Transaction".to_string(),
        url: explorer_url(network, ExplorerResource::Transaction, hash),
    }
}

pub fn issuance_success_message(distributor_balance: &str, asset_code: &str) -> String {
    format!(
        "{}. Distributor account balance: {} {}",
        TRANSACTION_SUCCESS_MESSAGE, distributor_balance, asset_code
    )
}

pub fn freeze_message(freeze: bool) -> &'static str {
    if freeze {
        ASSET_FROZEN_MESSAGE
    } else {
        ASSET_UNFROZEN_MESSAGE
    }
}

pub fn clawback_exceeds_balance_message(requested: &str, available: &str) -> String {
    format!(
        "The amount for clawback ({}) is greater than the available balance ({})",
        requested, available
    )
}

pub fn clawback_failed_summary(amount: &str, asset_code: &str) -> String {
    format!("Clawback of {} {} failed.", amount, asset_code)
}

/// Keypair created during a recipe run and handed back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedAccount {
    pub role: String,
    pub public_key: String,
    pub secret_key: String,
}

/// What a successful recipe run produced.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecipeOutcome {
    pub message: String,
    pub links: Vec<ExplorerLink>,
    pub accounts: Vec<GeneratedAccount>,
}

impl RecipeOutcome {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Default::default()
        }
    }

    pub fn with_link(mut self, link: ExplorerLink) -> Self {
        self.links.push(link);
        self
    }
}

/// A failed recipe run and the accounts it had already funded, so their
/// secrets are not lost with the error.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeFailure {
    pub error: RecipeError,
    pub accounts: Vec<GeneratedAccount>,
}

impl RecipeFailure {
    pub fn with_accounts(mut self, accounts: Vec<GeneratedAccount>) -> Self {
        self.accounts = accounts;
        self
    }
}

impl From<RecipeError> for RecipeFailure {
    fn from(error: RecipeError) -> Self {
        Self {
            error,
            accounts: Vec::new(),
        }
    }
}

impl std::fmt::Display for RecipeFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.error.fmt(f)
    }
}

/// Status report plus any accounts generated on the way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeReport {
    #[serde(flatten)]
    pub status: StatusReport,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub accounts: Vec<GeneratedAccount>,
}

/// Drives a fresh report through `Submitting` to its terminal state.
pub fn report_outcome(recipe: &str, result: Result<RecipeOutcome, RecipeFailure>) -> RecipeReport {
    let mut status = StatusReport::new();
    let mut accounts = Vec::new();

    // a new report always starts idle, so these transitions cannot fail
    let transition = status.start().and_then(|_| match result {
        Ok(outcome) => {
            info!("{} recipe succeeded: {}", recipe, outcome.message);
            accounts = outcome.accounts;
            status.succeed(outcome.message, outcome.links)
        }
        Err(failure) => {
            warn!("{} recipe failed: {}", recipe, failure.error);
            accounts = failure.accounts;
            status.fail(failure.error.to_string())
        }
    });
    if let Err(e) = transition {
        warn!("{}", e);
    }

    RecipeReport { status, accounts }
}
