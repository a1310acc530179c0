//! String-valued form records and their typed accessors.
//!
//! Every recipe and operation builder reads its input from a [`FormData`].
//! Accessors fail with a [`FormError`] naming the offending field, so
//! validation problems surface before anything is sent to Horizon.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use stellar_strkey::ed25519::PublicKey;

use crate::models::{parse_amount, AssetSpec, FormError, Keypair};

const TRUTHY_VALUES: [&str; 5] = ["true", "on", "1", "yes", "checked"];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, Value>")]
pub struct FormData(BTreeMap<String, String>);

impl From<BTreeMap<String, Value>> for FormData {
    fn from(raw: BTreeMap<String, Value>) -> Self {
        let fields = raw
            .into_iter()
            .filter_map(|(key, value)| {
                let value = match value {
                    Value::Null => return None,
                    Value::String(s) => s,
                    Value::Bool(b) => b.to_string(),
                    Value::Number(n) => n.to_string(),
                    // claimants and other structured fields keep their JSON text
                    other => other.to_string(),
                };
                Some((key, value))
            })
            .collect();
        FormData(fields)
    }
}

impl From<HashMap<String, String>> for FormData {
    fn from(raw: HashMap<String, String>) -> Self {
        FormData(raw.into_iter().collect())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormData {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        FormData(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: &str, value: impl Into<String>) -> Self {
        self.insert(field, value);
        self
    }

    pub fn insert(&mut self, field: &str, value: impl Into<String>) {
        self.0.insert(field.to_string(), value.into());
    }

    pub fn remove(&mut self, field: &str) -> Option<String> {
        self.0.remove(field)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.optional(field).is_some()
    }

    /// Trimmed value of the field, treating blank values as absent.
    pub fn optional(&self, field: &str) -> Option<&str> {
        self.0
            .get(field)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    pub fn required(&self, field: &str) -> Result<&str, FormError> {
        self.optional(field)
            .ok_or_else(|| FormError::MissingField(field.to_string()))
    }

    /// Checkbox semantics: absent or any unrecognized value is `false`.
    pub fn flag(&self, field: &str) -> bool {
        self.optional(field)
            .map(|v| TRUTHY_VALUES.iter().any(|t| v.eq_ignore_ascii_case(t)))
            .unwrap_or(false)
    }

    /// Required, strictly positive amount in stroops.
    pub fn amount(&self, field: &str) -> Result<i64, FormError> {
        let value = self.required(field)?;
        let stroops = parse_amount(value).map_err(|e| FormError::invalid(field, e.to_string()))?;
        if stroops == 0 {
            return Err(FormError::invalid(field, "amount must be greater than zero"));
        }
        Ok(stroops)
    }

    pub fn optional_amount(&self, field: &str) -> Result<Option<i64>, FormError> {
        if !self.contains(field) {
            return Ok(None);
        }
        self.amount(field).map(Some)
    }

    /// Amount in stroops, falling back to `default` when the field is blank.
    pub fn amount_or(&self, field: &str, default: &str) -> Result<i64, FormError> {
        let value = self.optional(field).unwrap_or(default);
        parse_amount(value).map_err(|e| FormError::invalid(field, e.to_string()))
    }

    pub fn u32(&self, field: &str) -> Result<u32, FormError> {
        self.required(field)?
            .parse()
            .map_err(|_| FormError::invalid(field, "expected a non-negative integer"))
    }

    pub fn optional_u32(&self, field: &str) -> Result<Option<u32>, FormError> {
        if !self.contains(field) {
            return Ok(None);
        }
        self.u32(field).map(Some)
    }

    /// Required `G...` account id.
    pub fn public_key(&self, field: &str) -> Result<String, FormError> {
        let value = self.required(field)?;
        PublicKey::from_string(value)
            .map_err(|_| FormError::invalid(field, "invalid public key"))?;
        Ok(value.to_string())
    }

    pub fn optional_public_key(&self, field: &str) -> Result<Option<String>, FormError> {
        if !self.contains(field) {
            return Ok(None);
        }
        self.public_key(field).map(Some)
    }

    /// Required `S...` secret seed decoded into a keypair.
    pub fn secret_key(&self, field: &str) -> Result<Keypair, FormError> {
        let value = self.required(field)?;
        Keypair::from_secret(value).map_err(|_| FormError::InvalidSecretKey {
            field: field.to_string(),
        })
    }

    /// Credit asset read from a code field and an issuer field.
    pub fn asset(&self, code_field: &str, issuer_field: &str) -> Result<AssetSpec, FormError> {
        let code = self.required(code_field)?;
        let issuer = self.public_key(issuer_field)?;
        AssetSpec::credit(code, &issuer).map_err(|e| FormError::invalid(code_field, e.to_string()))
    }

    /// Like [`FormData::asset`], but both fields blank means the native asset.
    pub fn optional_asset(
        &self,
        code_field: &str,
        issuer_field: &str,
    ) -> Result<AssetSpec, FormError> {
        if !self.contains(code_field) && !self.contains(issuer_field) {
            return Ok(AssetSpec::Native);
        }
        self.asset(code_field, issuer_field)
    }

    /// JSON-encoded field decoded into `T`.
    pub fn json<T: serde::de::DeserializeOwned>(&self, field: &str) -> Result<T, FormError> {
        let value = self.required(field)?;
        serde_json::from_str(value).map_err(|e| FormError::invalid(field, e.to_string()))
    }
}
