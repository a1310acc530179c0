//! Claimants and claim predicates for claimable balances.

use serde::{Deserialize, Serialize};
use soroban_rs::xdr::{
    AccountId, ClaimPredicate, Claimant, ClaimantV0, PublicKey as XdrPublicKey, Uint256, VecM,
};
use stellar_strkey::ed25519::PublicKey;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClaimantError {
    #[error("invalid claimant destination '{0}'")]
    InvalidDestination(String),
    #[error("time predicate must not be negative, got {0}")]
    NegativeTime(i64),
    #[error("predicate conversion failed: {0}")]
    Conversion(String),
}

/// Condition under which a claimant may claim a balance.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PredicateSpec {
    #[default]
    Unconditional,
    /// Unix timestamp in seconds.
    BeforeAbsoluteTime { value: i64 },
    /// Seconds after the balance is created.
    BeforeRelativeTime { value: i64 },
    And {
        left: Box<PredicateSpec>,
        right: Box<PredicateSpec>,
    },
    Or {
        left: Box<PredicateSpec>,
        right: Box<PredicateSpec>,
    },
    Not { predicate: Box<PredicateSpec> },
}

fn pair(
    left: &PredicateSpec,
    right: &PredicateSpec,
) -> Result<VecM<ClaimPredicate, 2>, ClaimantError> {
    vec![
        ClaimPredicate::try_from(left)?,
        ClaimPredicate::try_from(right)?,
    ]
    .try_into()
    .map_err(|e: soroban_rs::xdr::Error| ClaimantError::Conversion(e.to_string()))
}

impl TryFrom<&PredicateSpec> for ClaimPredicate {
    type Error = ClaimantError;

    fn try_from(spec: &PredicateSpec) -> Result<Self, Self::Error> {
        Ok(match spec {
            PredicateSpec::Unconditional => ClaimPredicate::Unconditional,
            PredicateSpec::BeforeAbsoluteTime { value } => {
                if *value < 0 {
                    return Err(ClaimantError::NegativeTime(*value));
                }
                ClaimPredicate::BeforeAbsoluteTime(*value)
            }
            PredicateSpec::BeforeRelativeTime { value } => {
                if *value < 0 {
                    return Err(ClaimantError::NegativeTime(*value));
                }
                ClaimPredicate::BeforeRelativeTime(*value)
            }
            PredicateSpec::And { left, right } => ClaimPredicate::And(pair(left, right)?),
            PredicateSpec::Or { left, right } => ClaimPredicate::Or(pair(left, right)?),
            PredicateSpec::Not { predicate } => ClaimPredicate::Not(Some(Box::new(
                ClaimPredicate::try_from(predicate.as_ref())?,
            ))),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimantSpec {
    pub destination: String,
    #[serde(default)]
    pub predicate: PredicateSpec,
}

impl TryFrom<&ClaimantSpec> for Claimant {
    type Error = ClaimantError;

    fn try_from(spec: &ClaimantSpec) -> Result<Self, Self::Error> {
        let pk = PublicKey::from_string(&spec.destination)
            .map_err(|_| ClaimantError::InvalidDestination(spec.destination.clone()))?;
        Ok(Claimant::ClaimantTypeV0(ClaimantV0 {
            destination: AccountId(XdrPublicKey::PublicKeyTypeEd25519(Uint256(pk.0))),
            predicate: ClaimPredicate::try_from(&spec.predicate)?,
        }))
    }
}
