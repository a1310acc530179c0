use soroban_rs::xdr::{DataValue, ManageDataOp, Operation, OperationBody, String64, StringM};

use super::muxed_field;
use crate::models::{FormData, FormError};

/// Sets (or, with an empty `entryValue`, deletes) a data entry on
/// `sponsoredAccount`, which is also the operation source.
pub fn manage_data(form: &FormData) -> Result<Operation, FormError> {
    let source = muxed_field(form, "sponsoredAccount")?;
    let name = form.required("entryName")?;
    let data_name: StringM<64> = name
        .try_into()
        .map_err(|_| FormError::invalid("entryName", "must be at most 64 bytes"))?;

    let data_value = match form.optional("entryValue") {
        Some(value) => Some(DataValue(value.as_bytes().to_vec().try_into().map_err(
            |_| FormError::invalid("entryValue", "must be at most 64 bytes"),
        )?)),
        None => None,
    };

    Ok(Operation {
        source_account: Some(source),
        body: OperationBody::ManageData(ManageDataOp {
            data_name: String64(data_name),
            data_value,
        }),
    })
}
