//! Sponsored reserves: one operation wrapped in begin/end sponsoring.

use log::info;

use super::RecipeContext;
use crate::domain::operations::{begin_sponsoring, end_sponsoring, OperationKind};
use crate::domain::status::{transaction_link, RecipeOutcome, TRANSACTION_SUCCESS_MESSAGE};
use crate::models::{FormData, FormError, RecipeError};
use crate::services::HorizonProviderTrait;

/// Operations whose reserves can be sponsored through this recipe.
pub const SPONSORABLE_OPERATIONS: [OperationKind; 4] = [
    OperationKind::ChangeTrust,
    OperationKind::CreateAccount,
    OperationKind::ManageData,
    OperationKind::CreateClaimableBalance,
];

pub async fn sponsor_operation<P: HorizonProviderTrait>(
    ctx: &RecipeContext<'_, P>,
    form: &FormData,
) -> Result<RecipeOutcome, RecipeError> {
    let sponsor = form.secret_key("sponsorSecretKey")?;
    let sponsored = form.secret_key("sponsoredSecretKey")?;
    let kind: OperationKind = form.required("operation")?.parse()?;
    if !SPONSORABLE_OPERATIONS.contains(&kind) {
        return Err(FormError::invalid(
            "operation",
            format!("{} cannot be sponsored", kind),
        )
        .into());
    }

    let sponsor_id = sponsor.public_key();
    let sponsored_id = sponsored.public_key();

    let mut fields = form.clone();
    fields.insert("sponsoredAccount", sponsored_id.as_str());
    if kind == OperationKind::CreateClaimableBalance && !fields.contains("source") {
        fields.insert("source", sponsored_id.as_str());
    }

    let operations = vec![
        begin_sponsoring(&FormData::new().with("sponsoredAccount", sponsored_id.as_str()))?,
        kind.build(&fields)?,
        end_sponsoring(&FormData::new().with("source", sponsored_id.as_str()))?,
    ];

    let response = ctx
        .submit_from(&sponsor_id, operations, &[&sponsor, &sponsored])
        .await?;
    info!(
        "{} sponsored {} for {} in {}",
        sponsor_id, kind, sponsored_id, response.hash
    );

    Ok(RecipeOutcome::new(TRANSACTION_SUCCESS_MESSAGE)
        .with_link(transaction_link(ctx.network, &response.hash)))
}
