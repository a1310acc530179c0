//! Asset types and conversions to XDR.

use std::fmt;

use serde::{Deserialize, Serialize};
use soroban_rs::xdr::{
    AccountId, AlphaNum12, AlphaNum4, Asset, AssetCode12, AssetCode4, ChangeTrustAsset,
    PublicKey as XdrPublicKey, Uint256,
};
use stellar_strkey::ed25519::PublicKey;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AssetError {
    #[error("asset code must be 1-12 alphanumeric characters, got '{0}'")]
    InvalidCode(String),
    #[error("invalid issuer '{0}'")]
    InvalidIssuer(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AssetSpec {
    Native,
    Credit { code: String, issuer: String },
}

impl AssetSpec {
    /// Validated credit asset.
    pub fn credit(code: &str, issuer: &str) -> Result<Self, AssetError> {
        validate_asset_code(code)?;
        PublicKey::from_string(issuer).map_err(|_| AssetError::InvalidIssuer(issuer.to_string()))?;
        Ok(AssetSpec::Credit {
            code: code.to_string(),
            issuer: issuer.to_string(),
        })
    }

    pub fn code(&self) -> &str {
        match self {
            AssetSpec::Native => "XLM",
            AssetSpec::Credit { code, .. } => code,
        }
    }

    pub fn issuer(&self) -> Option<&str> {
        match self {
            AssetSpec::Native => None,
            AssetSpec::Credit { issuer, .. } => Some(issuer),
        }
    }

    /// Identifier used by the block explorer: `CODE-ISSUER`, or `XLM`.
    pub fn explorer_id(&self) -> String {
        match self {
            AssetSpec::Native => "XLM".to_string(),
            AssetSpec::Credit { code, issuer } => format!("{}-{}", code, issuer),
        }
    }
}

impl fmt::Display for AssetSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

pub fn validate_asset_code(code: &str) -> Result<(), AssetError> {
    if code.is_empty() || code.len() > 12 || !code.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(AssetError::InvalidCode(code.to_string()));
    }
    Ok(())
}

fn issuer_account_id(issuer: &str) -> Result<AccountId, AssetError> {
    let issuer_pk = PublicKey::from_string(issuer)
        .map_err(|_| AssetError::InvalidIssuer(issuer.to_string()))?;
    Ok(AccountId(XdrPublicKey::PublicKeyTypeEd25519(Uint256(
        issuer_pk.0,
    ))))
}

impl TryFrom<&AssetSpec> for Asset {
    type Error = AssetError;

    fn try_from(spec: &AssetSpec) -> Result<Self, Self::Error> {
        let (code, issuer) = match spec {
            AssetSpec::Native => return Ok(Asset::Native),
            AssetSpec::Credit { code, issuer } => (code, issuer),
        };
        validate_asset_code(code)?;
        let issuer = issuer_account_id(issuer)?;
        let bytes = code.as_bytes();

        if bytes.len() <= 4 {
            let mut buf = [0u8; 4];
            buf[..bytes.len()].copy_from_slice(bytes);
            Ok(Asset::CreditAlphanum4(AlphaNum4 {
                asset_code: AssetCode4(buf),
                issuer,
            }))
        } else {
            let mut buf = [0u8; 12];
            buf[..bytes.len()].copy_from_slice(bytes);
            Ok(Asset::CreditAlphanum12(AlphaNum12 {
                asset_code: AssetCode12(buf),
                issuer,
            }))
        }
    }
}

impl TryFrom<&AssetSpec> for ChangeTrustAsset {
    type Error = AssetError;

    fn try_from(spec: &AssetSpec) -> Result<Self, Self::Error> {
        Ok(match Asset::try_from(spec)? {
            Asset::Native => ChangeTrustAsset::Native,
            Asset::CreditAlphanum4(a) => ChangeTrustAsset::CreditAlphanum4(a),
            Asset::CreditAlphanum12(a) => ChangeTrustAsset::CreditAlphanum12(a),
        })
    }
}

/// Asset remembered after a successful issuance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredAsset {
    pub code: String,
    pub issuer: String,
}

impl From<&StoredAsset> for AssetSpec {
    fn from(asset: &StoredAsset) -> Self {
        AssetSpec::Credit {
            code: asset.code.clone(),
            issuer: asset.issuer.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_PK: &str = "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF";

    #[test]
    fn test_native_asset() {
        let asset = Asset::try_from(&AssetSpec::Native).unwrap();
        assert!(matches!(asset, Asset::Native));
        assert_eq!(AssetSpec::Native.explorer_id(), "XLM");
    }

    #[test]
    fn test_short_code_is_alphanum4() {
        let spec = AssetSpec::credit("USDC", TEST_PK).unwrap();
        match Asset::try_from(&spec).unwrap() {
            Asset::CreditAlphanum4(a) => assert_eq!(&a.asset_code.0, b"USDC"),
            other => panic!("unexpected asset {:?}", other),
        }
    }

    #[test]
    fn test_long_code_is_alphanum12() {
        let spec = AssetSpec::credit("testAsset", TEST_PK).unwrap();
        match ChangeTrustAsset::try_from(&spec).unwrap() {
            ChangeTrustAsset::CreditAlphanum12(a) => {
                assert_eq!(&a.asset_code.0[..9], b"testAsset");
                assert_eq!(&a.asset_code.0[9..], &[0, 0, 0]);
            }
            other => panic!("unexpected asset {:?}", other),
        }
    }

    #[test]
    fn test_invalid_codes() {
        assert!(AssetSpec::credit("", TEST_PK).is_err());
        assert!(AssetSpec::credit("THIRTEENCHARS", TEST_PK).is_err());
        assert!(AssetSpec::credit("US-D", TEST_PK).is_err());
        assert_eq!(
            AssetSpec::credit("USD", "GBAD"),
            Err(AssetError::InvalidIssuer("GBAD".to_string()))
        );
    }

    #[test]
    fn test_unchecked_spec_fails_conversion() {
        let spec = AssetSpec::Credit {
            code: "TOOLONGASSETCODE".to_string(),
            issuer: TEST_PK.to_string(),
        };
        assert!(Asset::try_from(&spec).is_err());
    }

    #[test]
    fn test_explorer_id() {
        let spec = AssetSpec::credit("testCoin", TEST_PK).unwrap();
        assert_eq!(spec.explorer_id(), format!("testCoin-{}", TEST_PK));
        assert_eq!(spec.to_string(), "testCoin");
    }

    #[test]
    fn test_asset_spec_json_format() {
        let spec = AssetSpec::credit("USDC", TEST_PK).unwrap();
        assert_eq!(
            serde_json::to_value(&spec).unwrap(),
            serde_json::json!({"type": "credit", "code": "USDC", "issuer": TEST_PK})
        );
        assert_eq!(
            serde_json::to_value(AssetSpec::Native).unwrap(),
            serde_json::json!({"type": "native"})
        );
    }
}
