//! Horizon client.
//!
//! Covers the handful of Horizon REST endpoints the recipes need: loading an
//! account, submitting a signed envelope, friendbot funding and listing
//! claimable balances. Every call is a single HTTP request; nothing is
//! retried.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
#[cfg(test)]
use mockall::automock;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use soroban_rs::xdr::{Limits, TransactionEnvelope, WriteXdr};

use crate::models::{AccountSnapshot, HorizonError, NetworkConfig};

/// Accepted submission as reported by `POST /transactions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitResponse {
    pub hash: String,
    #[serde(default)]
    pub ledger: u32,
    #[serde(default = "default_successful")]
    pub successful: bool,
}

fn default_successful() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimableBalanceRecord {
    pub id: String,
    pub asset: String,
    pub amount: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sponsor: Option<String>,
    #[serde(default)]
    pub claimants: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct Page<T> {
    #[serde(rename = "_embedded")]
    embedded: Embedded<T>,
}

#[derive(Debug, Deserialize)]
struct Embedded<T> {
    records: Vec<T>,
}

#[async_trait]
#[cfg_attr(test, automock)]
pub trait HorizonProviderTrait: Send + Sync {
    /// `GET /accounts/{id}`
    async fn load_account(&self, account_id: &str) -> Result<AccountSnapshot, HorizonError>;

    /// `POST /transactions` with the base64 envelope.
    async fn submit_transaction(
        &self,
        envelope: &TransactionEnvelope,
    ) -> Result<SubmitResponse, HorizonError>;

    /// Funds a new account through the network's friendbot.
    async fn fund_account(&self, account_id: &str) -> Result<(), HorizonError>;

    /// `GET /claimable_balances?claimant={id}`
    async fn claimable_balances(
        &self,
        claimant: &str,
    ) -> Result<Vec<ClaimableBalanceRecord>, HorizonError>;
}

/// Turns a Horizon problem body into one message.
///
/// `extras.result_codes` is serialized when present; otherwise the whole
/// body is, and a body that is not JSON is returned as is.
pub fn normalize_submission_error(body: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(json) => match json.pointer("/extras/result_codes") {
            Some(codes) => codes.to_string(),
            None => json.to_string(),
        },
        Err(_) => body.trim().to_string(),
    }
}

#[derive(Debug, Clone)]
pub struct HorizonClient {
    client: Client,
    horizon_url: String,
    friendbot_url: Option<String>,
    network_name: String,
}

impl HorizonClient {
    pub fn new(network: &NetworkConfig, timeout: Duration) -> Result<Self, HorizonError> {
        reqwest::Url::parse(&network.horizon_url)
            .map_err(|e| HorizonError::NetworkConfiguration(format!("{}: {}", network.horizon_url, e)))?;
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| HorizonError::NetworkConfiguration(e.to_string()))?;

        Ok(Self {
            client,
            horizon_url: network.horizon_url.trim_end_matches('/').to_string(),
            friendbot_url: network.friendbot_url.clone(),
            network_name: network.name.clone(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.horizon_url, path)
    }
}

#[async_trait]
impl HorizonProviderTrait for HorizonClient {
    async fn load_account(&self, account_id: &str) -> Result<AccountSnapshot, HorizonError> {
        let load_error = |reason: String| HorizonError::LoadAccount {
            account_id: account_id.to_string(),
            reason,
        };

        let response = self
            .client
            .get(self.endpoint(&format!("accounts/{}", account_id)))
            .send()
            .await
            .map_err(|e| load_error(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!("load_account {} returned {}: {}", account_id, status, body);
            let reason = if status == StatusCode::NOT_FOUND {
                "account not found".to_string()
            } else {
                format!("{} {}", status.as_u16(), normalize_submission_error(&body))
            };
            return Err(load_error(reason));
        }

        response
            .json::<AccountSnapshot>()
            .await
            .map_err(|e| HorizonError::InvalidResponse(e.to_string()))
    }

    async fn submit_transaction(
        &self,
        envelope: &TransactionEnvelope,
    ) -> Result<SubmitResponse, HorizonError> {
        let tx = envelope
            .to_xdr_base64(Limits::none())
            .map_err(|e| HorizonError::InvalidResponse(format!("Cannot encode envelope: {}", e)))?;

        let response = self
            .client
            .post(self.endpoint("transactions"))
            .form(&[("tx", tx.as_str())])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            let message = normalize_submission_error(&body);
            warn!("Horizon rejected transaction ({}): {}", status, message);
            return Err(HorizonError::SubmissionFailed(message));
        }

        let submitted: SubmitResponse = serde_json::from_str(&body)
            .map_err(|e| HorizonError::InvalidResponse(e.to_string()))?;
        if !submitted.successful {
            return Err(HorizonError::SubmissionFailed(normalize_submission_error(
                &body,
            )));
        }
        debug!("Transaction {} included in ledger {}", submitted.hash, submitted.ledger);
        Ok(submitted)
    }

    async fn fund_account(&self, account_id: &str) -> Result<(), HorizonError> {
        let friendbot_url = self
            .friendbot_url
            .as_ref()
            .ok_or_else(|| HorizonError::FriendbotUnavailable(self.network_name.clone()))?;

        let response = self
            .client
            .get(friendbot_url)
            .query(&[("addr", account_id)])
            .send()
            .await
            .map_err(|e| HorizonError::Friendbot {
                account_id: account_id.to_string(),
                reason: e.to_string(),
            })?;

        if !response.status().is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(HorizonError::Friendbot {
                account_id: account_id.to_string(),
                reason: normalize_submission_error(&body),
            });
        }
        debug!("Funded {} with friendbot", account_id);
        Ok(())
    }

    async fn claimable_balances(
        &self,
        claimant: &str,
    ) -> Result<Vec<ClaimableBalanceRecord>, HorizonError> {
        let response = self
            .client
            .get(self.endpoint("claimable_balances"))
            .query(&[("claimant", claimant)])
            .send()
            .await?;

        if !response.status().is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(HorizonError::Request(normalize_submission_error(&body)));
        }

        let page: Page<ClaimableBalanceRecord> = response
            .json()
            .await
            .map_err(|e| HorizonError::InvalidResponse(e.to_string()))?;
        Ok(page.embedded.records)
    }
}
