use soroban_rs::xdr::{
    ChangeTrustAsset, ChangeTrustOp, Operation, OperationBody, SetTrustLineFlagsOp,
};

use super::{account_field, source_field, xdr_asset};
use crate::constants::TRUSTLINE_AUTHORIZED_FLAG;
use crate::models::{FormData, FormError};

/// Trustline from `sponsoredAccount` (when given, otherwise the transaction
/// source) to `assetCode`/`assetIssuer`. An empty `limit` means no limit.
pub fn change_trust(form: &FormData) -> Result<Operation, FormError> {
    let asset = form.asset("assetCode", "assetIssuer")?;
    let line = ChangeTrustAsset::try_from(&asset)
        .map_err(|e| FormError::invalid("assetCode", e.to_string()))?;
    let limit = match form.optional("limit") {
        Some(_) => form.amount("limit")?,
        None => i64::MAX,
    };

    Ok(Operation {
        source_account: source_field(form, "sponsoredAccount")?,
        body: OperationBody::ChangeTrust(ChangeTrustOp { line, limit }),
    })
}

/// Sets or clears the authorized flag of `trustor`'s trustline.
///
/// `authorized` false freezes the trustline; true unfreezes it.
pub fn set_trust_line_flags(form: &FormData) -> Result<Operation, FormError> {
    let trustor = account_field(form, "trustor")?;
    let asset = form.asset("assetCode", "assetIssuer")?;
    form.required("authorized")?;

    let (set_flags, clear_flags) = if form.flag("authorized") {
        (TRUSTLINE_AUTHORIZED_FLAG, 0)
    } else {
        (0, TRUSTLINE_AUTHORIZED_FLAG)
    };

    Ok(Operation {
        source_account: source_field(form, "source")?,
        body: OperationBody::SetTrustLineFlags(SetTrustLineFlagsOp {
            trustor,
            asset: xdr_asset(&asset, "assetCode")?,
            clear_flags,
            set_flags,
        }),
    })
}
