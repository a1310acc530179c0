//! Keypairs and account snapshots.

use std::fmt;

use ed25519_dalek::{Signer as _, SigningKey};
use serde::{Deserialize, Serialize};
use stellar_strkey::ed25519::{PrivateKey, PublicKey};
use thiserror::Error;

use crate::models::parse_amount;
use crate::utils::{deserialize_i64, generate_seed};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum KeypairError {
    #[error("invalid encoded string")]
    InvalidEncoding,
}

/// An ed25519 keypair identifying a Stellar account.
///
/// Held only for the duration of one recipe run.
#[derive(Clone)]
pub struct Keypair {
    signing_key: SigningKey,
}

impl Keypair {
    pub fn random() -> Self {
        Self {
            signing_key: SigningKey::from_bytes(&generate_seed()),
        }
    }

    /// Derives a keypair from an `S...` secret seed.
    pub fn from_secret(secret: &str) -> Result<Self, KeypairError> {
        let key = PrivateKey::from_string(secret.trim())
            .map_err(|_| KeypairError::InvalidEncoding)?;
        Ok(Self {
            signing_key: SigningKey::from_bytes(&key.0),
        })
    }

    pub fn public_key(&self) -> String {
        PublicKey(self.raw_public_key()).to_string()
    }

    pub fn secret_key(&self) -> String {
        PrivateKey(self.signing_key.to_bytes()).to_string()
    }

    pub fn raw_public_key(&self) -> [u8; 32] {
        self.signing_key.verifying_key().to_bytes()
    }

    /// Last four bytes of the public key, used as the signature hint.
    pub fn signature_hint(&self) -> [u8; 4] {
        let public_key = self.raw_public_key();
        [public_key[28], public_key[29], public_key[30], public_key[31]]
    }

    pub fn sign(&self, data: &[u8]) -> [u8; 64] {
        self.signing_key.sign(data).to_bytes()
    }
}

impl fmt::Debug for Keypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Keypair")
            .field("public_key", &self.public_key())
            .finish_non_exhaustive()
    }
}

/// One balance line of an account as reported by Horizon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Balance {
    pub balance: String,
    pub asset_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_issuer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_authorized: Option<bool>,
}

impl Balance {
    pub fn is_native(&self) -> bool {
        self.asset_type == "native"
    }

    pub fn is_asset(&self, code: &str, issuer: &str) -> bool {
        self.asset_code.as_deref() == Some(code) && self.asset_issuer.as_deref() == Some(issuer)
    }
}

/// State of an account as loaded from `GET /accounts/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountSnapshot {
    pub account_id: String,
    #[serde(deserialize_with = "deserialize_i64")]
    pub sequence: i64,
    #[serde(default)]
    pub balances: Vec<Balance>,
}

impl AccountSnapshot {
    pub fn new(account_id: impl Into<String>, sequence: i64) -> Self {
        Self {
            account_id: account_id.into(),
            sequence,
            balances: Vec::new(),
        }
    }

    pub fn balance_of(&self, code: &str, issuer: &str) -> Option<&Balance> {
        self.balances.iter().find(|b| b.is_asset(code, issuer))
    }

    pub fn native_balance(&self) -> Option<&Balance> {
        self.balances.iter().find(|b| b.is_native())
    }

    /// Balance of the given asset in stroops, `None` when there is no
    /// trustline or Horizon sent an unparsable value.
    pub fn balance_stroops(&self, code: &str, issuer: &str) -> Option<i64> {
        self.balance_of(code, issuer)
            .and_then(|b| parse_amount(&b.balance).ok())
    }
}
