use soroban_rs::xdr::{
    Operation, OperationBody, SetOptionsOp, Signer, SignerKey, String32, StringM, Uint256,
};
use stellar_strkey::ed25519::PublicKey;

use super::source_field;
use crate::models::{FormData, FormError};

const OPTION_FIELDS: [&str; 8] = [
    "setFlags",
    "clearFlags",
    "masterWeight",
    "lowThreshold",
    "medThreshold",
    "highThreshold",
    "homeDomain",
    "signerPublicKey",
];

fn flags(form: &FormData, field: &str) -> Result<Option<u32>, FormError> {
    let value = form.optional_u32(field)?;
    if let Some(flags) = value {
        if flags > 0xF {
            return Err(FormError::invalid(field, "unknown account flag bits"));
        }
    }
    Ok(value)
}

fn weight(form: &FormData, field: &str) -> Result<Option<u32>, FormError> {
    let value = form.optional_u32(field)?;
    if let Some(w) = value {
        if w > 255 {
            return Err(FormError::invalid(field, "must be between 0 and 255"));
        }
    }
    Ok(value)
}

fn signer(form: &FormData) -> Result<Option<Signer>, FormError> {
    let Some(address) = form.optional_public_key("signerPublicKey")? else {
        return Ok(None);
    };
    let weight = weight(form, "signerWeight")?
        .ok_or_else(|| FormError::MissingField("signerWeight".to_string()))?;
    let key = PublicKey::from_string(&address)
        .map_err(|_| FormError::invalid("signerPublicKey", "invalid public key"))?;

    Ok(Some(Signer {
        key: SignerKey::Ed25519(Uint256(key.0)),
        weight,
    }))
}

/// Account flags, weights, thresholds, home domain and signer.
///
/// Every field is optional, but at least one of them must be set.
pub fn set_options(form: &FormData) -> Result<Operation, FormError> {
    if !OPTION_FIELDS.iter().any(|f| form.contains(f)) {
        return Err(FormError::Constraint(
            "At least one account option must be set".to_string(),
        ));
    }

    let home_domain = match form.optional("homeDomain") {
        Some(domain) => {
            let domain: StringM<32> = domain
                .try_into()
                .map_err(|_| FormError::invalid("homeDomain", "must be at most 32 bytes"))?;
            Some(String32(domain))
        }
        None => None,
    };

    Ok(Operation {
        source_account: source_field(form, "source")?,
        body: OperationBody::SetOptions(SetOptionsOp {
            inflation_dest: None,
            clear_flags: flags(form, "clearFlags")?,
            set_flags: flags(form, "setFlags")?,
            master_weight: weight(form, "masterWeight")?,
            low_threshold: weight(form, "lowThreshold")?,
            med_threshold: weight(form, "medThreshold")?,
            high_threshold: weight(form, "highThreshold")?,
            home_domain,
            signer: signer(form)?,
        }),
    })
}
