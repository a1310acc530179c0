//! Operation builders.
//!
//! Each builder reads a [`FormData`] and returns exactly one XDR
//! [`Operation`], or a [`FormError`] naming the missing or invalid field.
//! Builders never touch the network. [`OperationKind`] maps the kebab-case
//! operation names used by the API to their builder.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use soroban_rs::xdr::{AccountId, Asset, MuxedAccount, Operation};

use crate::domain::transaction::{optional_source, string_to_account_id, string_to_muxed_account};
use crate::models::{AssetSpec, FormData, FormError};

mod account;
pub use account::*;

mod data;
pub use data::*;

mod options;
pub use options::*;

mod payment;
pub use payment::*;

mod trust;
pub use trust::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OperationKind {
    CreateAccount,
    ChangeTrust,
    ManageData,
    SetOptions,
    SetTrustLineFlags,
    Payment,
    Clawback,
    CreateClaimableBalance,
    BeginSponsoring,
    EndSponsoring,
}

type Builder = fn(&FormData) -> Result<Operation, FormError>;

impl OperationKind {
    pub const ALL: [OperationKind; 10] = [
        OperationKind::CreateAccount,
        OperationKind::ChangeTrust,
        OperationKind::ManageData,
        OperationKind::SetOptions,
        OperationKind::SetTrustLineFlags,
        OperationKind::Payment,
        OperationKind::Clawback,
        OperationKind::CreateClaimableBalance,
        OperationKind::BeginSponsoring,
        OperationKind::EndSponsoring,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::CreateAccount => "create-account",
            OperationKind::ChangeTrust => "change-trust",
            OperationKind::ManageData => "manage-data",
            OperationKind::SetOptions => "set-options",
            OperationKind::SetTrustLineFlags => "set-trust-line-flags",
            OperationKind::Payment => "payment",
            OperationKind::Clawback => "clawback",
            OperationKind::CreateClaimableBalance => "create-claimable-balance",
            OperationKind::BeginSponsoring => "begin-sponsoring",
            OperationKind::EndSponsoring => "end-sponsoring",
        }
    }

    fn builder(&self) -> Builder {
        match self {
            OperationKind::CreateAccount => create_account,
            OperationKind::ChangeTrust => change_trust,
            OperationKind::ManageData => manage_data,
            OperationKind::SetOptions => set_options,
            OperationKind::SetTrustLineFlags => set_trust_line_flags,
            OperationKind::Payment => payment,
            OperationKind::Clawback => clawback,
            OperationKind::CreateClaimableBalance => create_claimable_balance,
            OperationKind::BeginSponsoring => begin_sponsoring,
            OperationKind::EndSponsoring => end_sponsoring,
        }
    }

    pub fn build(&self, form: &FormData) -> Result<Operation, FormError> {
        (self.builder())(form)
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OperationKind {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        OperationKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| FormError::UnknownOperation(s.to_string()))
    }
}

pub(crate) fn account_field(form: &FormData, field: &str) -> Result<AccountId, FormError> {
    let address = form.public_key(field)?;
    string_to_account_id(&address).map_err(|e| FormError::invalid(field, e.to_string()))
}

pub(crate) fn muxed_field(form: &FormData, field: &str) -> Result<MuxedAccount, FormError> {
    let address = form.public_key(field)?;
    string_to_muxed_account(&address).map_err(|e| FormError::invalid(field, e.to_string()))
}

pub(crate) fn source_field(
    form: &FormData,
    field: &str,
) -> Result<Option<MuxedAccount>, FormError> {
    let address = form.optional_public_key(field)?;
    optional_source(address.as_deref()).map_err(|e| FormError::invalid(field, e.to_string()))
}

pub(crate) fn xdr_asset(spec: &AssetSpec, field: &str) -> Result<Asset, FormError> {
    Asset::try_from(spec).map_err(|e| FormError::invalid(field, e.to_string()))
}
