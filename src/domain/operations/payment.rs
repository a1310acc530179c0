use soroban_rs::xdr::{
    Claimant, ClawbackOp, CreateClaimableBalanceOp, Operation, OperationBody, PaymentOp, VecM,
};

use super::{muxed_field, source_field, xdr_asset};
use crate::constants::STELLAR_MAX_CLAIMANTS;
use crate::models::{ClaimantSpec, FormData, FormError};

/// `destination`, `amount`; native unless `assetCode`/`assetIssuer` are given.
pub fn payment(form: &FormData) -> Result<Operation, FormError> {
    let destination = muxed_field(form, "destination")?;
    let amount = form.amount("amount")?;
    let asset = form.optional_asset("assetCode", "assetIssuer")?;

    Ok(Operation {
        source_account: source_field(form, "source")?,
        body: OperationBody::Payment(PaymentOp {
            destination,
            asset: xdr_asset(&asset, "assetCode")?,
            amount,
        }),
    })
}

/// Claws `amount` of `assetCode` back from `from`. The source must be the issuer.
pub fn clawback(form: &FormData) -> Result<Operation, FormError> {
    let from = muxed_field(form, "from")?;
    let asset = form.asset("assetCode", "assetIssuer")?;
    let amount = form.amount("amount")?;

    Ok(Operation {
        source_account: source_field(form, "source")?,
        body: OperationBody::Clawback(ClawbackOp {
            asset: xdr_asset(&asset, "assetCode")?,
            from,
            amount,
        }),
    })
}

/// `amount` and a JSON array of claimants (`[{destination, predicate}]`).
pub fn create_claimable_balance(form: &FormData) -> Result<Operation, FormError> {
    let amount = form.amount("amount")?;
    let asset = form.optional_asset("assetCode", "assetIssuer")?;
    let specs: Vec<ClaimantSpec> = form.json("claimants")?;

    if specs.is_empty() {
        return Err(FormError::invalid("claimants", "at least one claimant is required"));
    }
    if specs.len() > STELLAR_MAX_CLAIMANTS {
        return Err(FormError::invalid(
            "claimants",
            format!("at most {} claimants are allowed", STELLAR_MAX_CLAIMANTS),
        ));
    }

    let claimants = specs
        .iter()
        .map(Claimant::try_from)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| FormError::invalid("claimants", e.to_string()))?;
    let claimants: VecM<Claimant, 10> = claimants
        .try_into()
        .map_err(|_| FormError::invalid("claimants", "too many claimants"))?;

    Ok(Operation {
        source_account: source_field(form, "source")?,
        body: OperationBody::CreateClaimableBalance(CreateClaimableBalanceOp {
            asset: xdr_asset(&asset, "assetCode")?,
            amount,
            claimants,
        }),
    })
}
