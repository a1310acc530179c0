//! Network configuration: where to submit, which passphrase to sign for.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::constants::{
    FUTURENET_FRIENDBOT_URL, FUTURENET_HORIZON_URL, FUTURENET_PASSPHRASE, PUBLIC_HORIZON_URL,
    PUBLIC_PASSPHRASE, TESTNET_FRIENDBOT_URL, TESTNET_HORIZON_URL, TESTNET_PASSPHRASE,
};
use crate::models::FormError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkConfig {
    pub name: String,
    pub horizon_url: String,
    pub passphrase: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub friendbot_url: Option<String>,
    /// Network segment of stellar.expert URLs (`testnet`, `public`, ...).
    pub explorer_network: String,
}

impl NetworkConfig {
    pub fn testnet() -> Self {
        Self {
            name: "testnet".to_string(),
            horizon_url: TESTNET_HORIZON_URL.to_string(),
            passphrase: TESTNET_PASSPHRASE.to_string(),
            friendbot_url: Some(TESTNET_FRIENDBOT_URL.to_string()),
            explorer_network: "testnet".to_string(),
        }
    }

    pub fn public() -> Self {
        Self {
            name: "public".to_string(),
            horizon_url: PUBLIC_HORIZON_URL.to_string(),
            passphrase: PUBLIC_PASSPHRASE.to_string(),
            friendbot_url: None,
            explorer_network: "public".to_string(),
        }
    }

    pub fn futurenet() -> Self {
        Self {
            name: "futurenet".to_string(),
            horizon_url: FUTURENET_HORIZON_URL.to_string(),
            passphrase: FUTURENET_PASSPHRASE.to_string(),
            friendbot_url: Some(FUTURENET_FRIENDBOT_URL.to_string()),
            explorer_network: "futurenet".to_string(),
        }
    }

    /// Presets in seeding order; index 0 is selected by default.
    pub fn presets() -> Vec<Self> {
        vec![Self::testnet(), Self::public(), Self::futurenet()]
    }

    pub fn preset(name: &str) -> Option<Self> {
        Self::presets()
            .into_iter()
            .find(|n| n.name.eq_ignore_ascii_case(name))
    }

    /// SHA-256 of the passphrase.
    pub fn network_id(&self) -> [u8; 32] {
        Sha256::digest(self.passphrase.as_bytes()).into()
    }

    pub fn validate(&self) -> Result<(), FormError> {
        if self.name.trim().is_empty() {
            return Err(FormError::MissingField("name".to_string()));
        }
        if self.passphrase.trim().is_empty() {
            return Err(FormError::MissingField("passphrase".to_string()));
        }
        validate_http_url("horizonUrl", &self.horizon_url)?;
        if let Some(friendbot) = &self.friendbot_url {
            validate_http_url("friendbotUrl", friendbot)?;
        }
        if self.explorer_network.trim().is_empty() {
            return Err(FormError::MissingField("explorerNetwork".to_string()));
        }
        Ok(())
    }
}

fn validate_http_url(field: &str, value: &str) -> Result<(), FormError> {
    let url = reqwest::Url::parse(value).map_err(|e| FormError::invalid(field, e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(FormError::invalid(
            field,
            format!("unsupported scheme '{}'", other),
        )),
    }
}
