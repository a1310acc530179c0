use soroban_rs::xdr::{
    BeginSponsoringFutureReservesOp, CreateAccountOp, Operation, OperationBody,
};

use super::{account_field, source_field};
use crate::models::{FormData, FormError};

/// `sponsoredAccount`, `startingBalance`
pub fn create_account(form: &FormData) -> Result<Operation, FormError> {
    let destination = account_field(form, "sponsoredAccount")?;
    let starting_balance = form.amount("startingBalance")?;

    Ok(Operation {
        source_account: source_field(form, "source")?,
        body: OperationBody::CreateAccount(CreateAccountOp {
            destination,
            starting_balance,
        }),
    })
}

/// `sponsoredAccount`, optional `source` (the sponsor)
pub fn begin_sponsoring(form: &FormData) -> Result<Operation, FormError> {
    let sponsored_id = account_field(form, "sponsoredAccount")?;

    Ok(Operation {
        source_account: source_field(form, "source")?,
        body: OperationBody::BeginSponsoringFutureReserves(BeginSponsoringFutureReservesOp {
            sponsored_id,
        }),
    })
}

/// Optional `source`, which must be the sponsored account.
pub fn end_sponsoring(form: &FormData) -> Result<Operation, FormError> {
    Ok(Operation {
        source_account: source_field(form, "source")?,
        body: OperationBody::EndSponsoringFutureReserves,
    })
}
