//! Recipes: multi-step flows composed from operation builders, the
//! transaction assembler and the Horizon client.
//!
//! Every recipe reads all of its form fields before the first network call,
//! so a validation problem never leaves half-created accounts behind.

use log::debug;
use soroban_rs::xdr::Operation;

use crate::domain::transaction::{build_transaction, sign_transaction};
use crate::models::{AccountSnapshot, Keypair, NetworkConfig, RecipeError};
use crate::services::{HorizonProviderTrait, SubmitResponse};

mod asset_issuance;
pub use asset_issuance::*;

mod clawback;
pub use clawback::*;

mod freeze;
pub use freeze::*;

mod issuer_flags;
pub use issuer_flags::*;

mod sponsoring;
pub use sponsoring::*;

/// Provider and network a recipe runs against.
pub struct RecipeContext<'a, P: HorizonProviderTrait> {
    pub provider: &'a P,
    pub network: &'a NetworkConfig,
}

impl<'a, P: HorizonProviderTrait> RecipeContext<'a, P> {
    pub fn new(provider: &'a P, network: &'a NetworkConfig) -> Self {
        Self { provider, network }
    }

    pub async fn load_account(&self, account_id: &str) -> Result<AccountSnapshot, RecipeError> {
        Ok(self.provider.load_account(account_id).await?)
    }

    /// Builds, signs and submits one transaction from `source`.
    pub async fn submit(
        &self,
        source: &AccountSnapshot,
        operations: Vec<Operation>,
        signers: &[&Keypair],
    ) -> Result<SubmitResponse, RecipeError> {
        let transaction = build_transaction(source, operations)?;
        let envelope = sign_transaction(transaction, self.network, signers)?;
        let response = self.provider.submit_transaction(&envelope).await?;
        debug!(
            "Submitted {} from {} on {}",
            response.hash, source.account_id, self.network.name
        );
        Ok(response)
    }

    /// Loads `source_id` for a fresh sequence number, then submits.
    pub async fn submit_from(
        &self,
        source_id: &str,
        operations: Vec<Operation>,
        signers: &[&Keypair],
    ) -> Result<SubmitResponse, RecipeError> {
        let source = self.load_account(source_id).await?;
        self.submit(&source, operations, signers).await
    }

    /// Random keypair funded through friendbot.
    pub async fn create_funded_account(&self) -> Result<Keypair, RecipeError> {
        let keypair = Keypair::random();
        self.provider.fund_account(&keypair.public_key()).await?;
        Ok(keypair)
    }
}
