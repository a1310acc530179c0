//! Clawback of an issued asset from a holder account.

use log::{info, warn};

use super::RecipeContext;
use crate::domain::operations::clawback;
use crate::domain::status::{
    clawback_exceeds_balance_message, clawback_failed_summary, transaction_link, RecipeOutcome,
    TRANSACTION_SUCCESS_MESSAGE,
};
use crate::models::{format_amount, AssetSpec, FormData, FormError, RecipeError};
use crate::services::HorizonProviderTrait;

pub async fn clawback_asset<P: HorizonProviderTrait>(
    ctx: &RecipeContext<'_, P>,
    form: &FormData,
) -> Result<RecipeOutcome, RecipeError> {
    let asset_code = form.required("assetCode")?.to_string();
    let issuer = form.secret_key("issuerSecretKey")?;
    let target_id = form.public_key("clawbackAccount")?;
    let claw_back_all = form.flag("isClawbackAllEnabled");
    // the typed text is echoed back when the amount exceeds the balance
    let requested = if claw_back_all {
        None
    } else {
        Some((form.amount("amount")?, form.required("amount")?.to_string()))
    };

    let issuer_id = issuer.public_key();
    let asset = AssetSpec::credit(&asset_code, &issuer_id)
        .map_err(|e| FormError::invalid("assetCode", e.to_string()))?;

    let issuer_account = ctx.load_account(&issuer_id).await?;
    let target = ctx.load_account(&target_id).await?;

    let available = target.balance_stroops(&asset_code, &issuer_id).unwrap_or(0);
    let amount = match requested {
        Some((requested, typed)) if requested > available => {
            return Err(RecipeError::Precondition(clawback_exceeds_balance_message(
                &typed,
                &format_amount(available),
            )));
        }
        Some((requested, _)) => requested,
        None if available == 0 => {
            return Err(RecipeError::Precondition(format!(
                "{} has no {} balance to claw back",
                target_id, asset_code
            )));
        }
        None => available,
    };
    let amount_text = format_amount(amount);

    let op = clawback(
        &FormData::new()
            .with("from", target_id.as_str())
            .with("assetCode", asset.code())
            .with("assetIssuer", issuer_id.as_str())
            .with("amount", amount_text.as_str())
            .with("source", issuer_id.as_str()),
    )?;

    let response = ctx
        .submit(&issuer_account, vec![op], &[&issuer])
        .await
        .map_err(|err| match err {
            RecipeError::Horizon(horizon) => {
                warn!("Clawback from {} rejected: {}", target_id, horizon);
                RecipeError::Failed {
                    summary: clawback_failed_summary(&amount_text, &asset_code),
                    detail: horizon.to_string(),
                }
            }
            other => other,
        })?;

    info!(
        "Clawed back {} {} from {} in {}",
        amount_text, asset_code, target_id, response.hash
    );
    Ok(RecipeOutcome::new(TRANSACTION_SUCCESS_MESSAGE)
        .with_link(transaction_link(ctx.network, &response.hash)))
}
