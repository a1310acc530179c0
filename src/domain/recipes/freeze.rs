//! Freezing and unfreezing a holder's trustline.

use log::info;

use super::RecipeContext;
use crate::domain::operations::set_trust_line_flags;
use crate::domain::status::{freeze_message, transaction_link, RecipeOutcome};
use crate::models::{FormData, RecipeError};
use crate::services::HorizonProviderTrait;

pub async fn freeze_asset<P: HorizonProviderTrait>(
    ctx: &RecipeContext<'_, P>,
    form: &FormData,
) -> Result<RecipeOutcome, RecipeError> {
    let asset_code = form.required("assetCode")?.to_string();
    let issuer = form.secret_key("issuerSecretKey")?;
    let holder_id = form.public_key("assetHolderPublicKey")?;
    let freeze = form.flag("freeze");
    let issuer_id = issuer.public_key();

    let op = set_trust_line_flags(
        &FormData::new()
            .with("trustor", holder_id.as_str())
            .with("assetCode", asset_code.as_str())
            .with("assetIssuer", issuer_id.as_str())
            .with("authorized", (!freeze).to_string())
            .with("source", issuer_id.as_str()),
    )?;

    let issuer_account = ctx.load_account(&issuer_id).await?;
    // the trustor has to exist before its trustline can be touched
    ctx.load_account(&holder_id).await?;

    let response = ctx.submit(&issuer_account, vec![op], &[&issuer]).await?;
    info!(
        "{} {} for {}",
        if freeze { "Froze" } else { "Unfroze" },
        asset_code,
        holder_id
    );

    Ok(RecipeOutcome::new(freeze_message(freeze))
        .with_link(transaction_link(ctx.network, &response.hash)))
}
