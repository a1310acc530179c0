//! Asset issuance: fresh issuer and distributor, optional flags, optional
//! holders, and the resulting asset remembered in storage.

use log::info;

use super::{issuer_flag_operations, RecipeContext};
use crate::constants::{
    DEFAULT_BALANCE_PER_HOLDER, DEFAULT_DISTRIBUTOR_PAYMENT_AMOUNT, DEFAULT_NUMBER_OF_HOLDERS,
};
use crate::domain::operations::{change_trust, payment, set_trust_line_flags};
use crate::domain::status::{
    account_link, asset_link, issuance_success_message, GeneratedAccount, RecipeFailure,
    RecipeOutcome, NOT_ENOUGH_FUNDS_FOR_HOLDERS_MESSAGE,
};
use crate::models::{
    format_amount, validate_asset_code, AssetSpec, FormData, FormError, Keypair, RecipeError,
    StoredAsset,
};
use crate::repositories::AssetRepository;
use crate::services::HorizonProviderTrait;

#[derive(Debug, Clone, PartialEq)]
pub struct IssuanceRequest {
    pub asset_code: String,
    pub distributor_payment: i64,
    pub frozen: bool,
    pub clawback: bool,
    /// `(number of holders, stroops per holder)` when holders are requested.
    pub holders: Option<(u32, i64)>,
}

impl TryFrom<&FormData> for IssuanceRequest {
    type Error = FormError;

    fn try_from(form: &FormData) -> Result<Self, Self::Error> {
        let asset_code = form.required("assetCode")?.to_string();
        validate_asset_code(&asset_code).map_err(|e| FormError::invalid("assetCode", e.to_string()))?;

        let distributor_payment =
            form.amount_or("distributorPaymentAmount", DEFAULT_DISTRIBUTOR_PAYMENT_AMOUNT)?;
        if distributor_payment == 0 {
            return Err(FormError::invalid(
                "distributorPaymentAmount",
                "amount must be greater than zero",
            ));
        }

        let holders = if form.flag("createHolders") {
            let count = form
                .optional_u32("numberOfHolders")?
                .unwrap_or(DEFAULT_NUMBER_OF_HOLDERS);
            if count == 0 {
                return Err(FormError::invalid("numberOfHolders", "must be at least 1"));
            }
            let balance = form.amount_or("balancePerHolder", DEFAULT_BALANCE_PER_HOLDER)?;
            if balance == 0 {
                return Err(FormError::invalid(
                    "balancePerHolder",
                    "amount must be greater than zero",
                ));
            }
            let total = balance
                .checked_mul(i64::from(count))
                .ok_or_else(|| FormError::Constraint(NOT_ENOUGH_FUNDS_FOR_HOLDERS_MESSAGE.to_string()))?;
            if total > distributor_payment {
                return Err(FormError::Constraint(
                    NOT_ENOUGH_FUNDS_FOR_HOLDERS_MESSAGE.to_string(),
                ));
            }
            Some((count, balance))
        } else {
            None
        };

        Ok(Self {
            asset_code,
            distributor_payment,
            frozen: form.flag("frozenAsset"),
            clawback: form.flag("clawbackEnabled"),
            holders,
        })
    }
}

fn generated(role: &str, keypair: &Keypair) -> GeneratedAccount {
    GeneratedAccount {
        role: role.to_string(),
        public_key: keypair.public_key(),
        secret_key: keypair.secret_key(),
    }
}

fn trust_and_pay_ops(
    asset: &AssetSpec,
    issuer: &str,
    payer: &str,
    recipient: &str,
    stroops: i64,
) -> Result<Vec<soroban_rs::xdr::Operation>, FormError> {
    let trust = change_trust(
        &FormData::new()
            .with("assetCode", asset.code())
            .with("assetIssuer", issuer),
    )?;
    let pay = payment(
        &FormData::new()
            .with("destination", recipient)
            .with("amount", format_amount(stroops))
            .with("assetCode", asset.code())
            .with("assetIssuer", issuer)
            .with("source", payer),
    )?;
    Ok(vec![trust, pay])
}

/// Runs the issuance. A failure after the first funding still reports every
/// account funded so far, together with its secret key.
pub async fn issue_asset<P: HorizonProviderTrait>(
    ctx: &RecipeContext<'_, P>,
    assets: &AssetRepository,
    form: &FormData,
) -> Result<RecipeOutcome, RecipeFailure> {
    let request = IssuanceRequest::try_from(form).map_err(RecipeError::from)?;
    let mut accounts = Vec::new();
    match run_issuance(ctx, assets, &request, &mut accounts).await {
        Ok(mut outcome) => {
            outcome.accounts = accounts;
            Ok(outcome)
        }
        Err(error) => Err(RecipeFailure::from(error).with_accounts(accounts)),
    }
}

async fn run_issuance<P: HorizonProviderTrait>(
    ctx: &RecipeContext<'_, P>,
    assets: &AssetRepository,
    request: &IssuanceRequest,
    accounts: &mut Vec<GeneratedAccount>,
) -> Result<RecipeOutcome, RecipeError> {
    let issuer = ctx.create_funded_account().await?;
    accounts.push(generated("issuer", &issuer));
    let distributor = ctx.create_funded_account().await?;
    accounts.push(generated("distributor", &distributor));
    let issuer_id = issuer.public_key();
    let distributor_id = distributor.public_key();
    info!(
        "Issuing {} from {} to distributor {}",
        request.asset_code, issuer_id, distributor_id
    );

    let flag_ops = issuer_flag_operations(&issuer_id, request.frozen, request.clawback)?;
    if !flag_ops.is_empty() {
        ctx.submit_from(&issuer_id, flag_ops, &[&issuer]).await?;
    }

    let asset = AssetSpec::credit(&request.asset_code, &issuer_id)
        .map_err(|e| FormError::invalid("assetCode", e.to_string()))?;

    // distributor trusts the asset and receives the initial supply
    let ops = trust_and_pay_ops(
        &asset,
        &issuer_id,
        &issuer_id,
        &distributor_id,
        request.distributor_payment,
    )?;
    ctx.submit_from(&distributor_id, ops, &[&distributor, &issuer])
        .await?;

    let mut holder_links = Vec::new();
    if let Some((count, balance)) = request.holders {
        for index in 1..=count {
            let holder = ctx.create_funded_account().await?;
            accounts.push(generated(&format!("holder {}", index), &holder));
            let holder_id = holder.public_key();
            let ops = trust_and_pay_ops(&asset, &issuer_id, &distributor_id, &holder_id, balance)?;
            ctx.submit_from(&holder_id, ops, &[&holder, &distributor])
                .await?;
            holder_links.push(account_link(ctx.network, &format!("Holder {}", index), &holder_id));
        }
    }

    if request.frozen {
        let freeze = set_trust_line_flags(
            &FormData::new()
                .with("trustor", distributor_id.as_str())
                .with("assetCode", asset.code())
                .with("assetIssuer", issuer_id.as_str())
                .with("authorized", "false")
                .with("source", issuer_id.as_str()),
        )?;
        ctx.submit_from(&issuer_id, vec![freeze], &[&issuer]).await?;
    }

    let distributor_account = ctx.load_account(&distributor_id).await?;
    let balance = distributor_account
        .balance_of(&request.asset_code, &issuer_id)
        .map(|b| b.balance.clone())
        .unwrap_or_else(|| format_amount(0));

    assets
        .add(StoredAsset {
            code: request.asset_code.clone(),
            issuer: issuer_id.clone(),
        })
        .await?;

    let mut outcome = RecipeOutcome::new(issuance_success_message(&balance, &request.asset_code));
    outcome.links.push(account_link(ctx.network, "Issuer", &issuer_id));
    outcome
        .links
        .push(account_link(ctx.network, "Distributor", &distributor_id));
    outcome.links.push(asset_link(ctx.network, &asset));
    outcome.links.extend(holder_links);
    Ok(outcome)
}
