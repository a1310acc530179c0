//! XDR helpers shared by the operation builders and the assembler.

use soroban_rs::xdr::{
    AccountId, DecoratedSignature, FeeBumpTransactionInnerTx, Limits, MuxedAccount, Operation,
    PublicKey as XdrPublicKey, ReadXdr, TransactionEnvelope, Uint256, VecM, WriteXdr,
};
use stellar_strkey::ed25519::PublicKey;

use crate::models::TransactionError;

pub fn string_to_account_id(address: &str) -> Result<AccountId, TransactionError> {
    let pk = PublicKey::from_string(address)
        .map_err(|_| TransactionError::InvalidAccount(address.to_string()))?;
    Ok(AccountId(XdrPublicKey::PublicKeyTypeEd25519(Uint256(pk.0))))
}

pub fn string_to_muxed_account(address: &str) -> Result<MuxedAccount, TransactionError> {
    let pk = PublicKey::from_string(address)
        .map_err(|_| TransactionError::InvalidAccount(address.to_string()))?;
    Ok(MuxedAccount::Ed25519(Uint256(pk.0)))
}

/// Muxed ids are dropped, only the underlying account is kept.
pub fn muxed_account_to_string(muxed: &MuxedAccount) -> String {
    match muxed {
        MuxedAccount::Ed25519(key) => PublicKey(key.0).to_string(),
        MuxedAccount::MuxedEd25519(m) => PublicKey(m.ed25519.0).to_string(),
    }
}

pub fn account_id_to_string(account: &AccountId) -> String {
    let AccountId(XdrPublicKey::PublicKeyTypeEd25519(key)) = account;
    PublicKey(key.0).to_string()
}

/// Operation-level source account, `None` when the field was left empty.
pub fn optional_source(address: Option<&str>) -> Result<Option<MuxedAccount>, TransactionError> {
    address.map(string_to_muxed_account).transpose()
}

pub fn extract_operations(envelope: &TransactionEnvelope) -> &VecM<Operation, 100> {
    match envelope {
        TransactionEnvelope::TxV0(e) => &e.tx.operations,
        TransactionEnvelope::Tx(e) => &e.tx.operations,
        TransactionEnvelope::TxFeeBump(e) => match &e.tx.inner_tx {
            FeeBumpTransactionInnerTx::Tx(inner) => &inner.tx.operations,
        },
    }
}

pub fn envelope_signatures(envelope: &TransactionEnvelope) -> &VecM<DecoratedSignature, 20> {
    match envelope {
        TransactionEnvelope::TxV0(e) => &e.signatures,
        TransactionEnvelope::Tx(e) => &e.signatures,
        TransactionEnvelope::TxFeeBump(e) => &e.signatures,
    }
}

pub fn is_signed(envelope: &TransactionEnvelope) -> bool {
    !envelope_signatures(envelope).is_empty()
}

pub fn envelope_to_base64(envelope: &TransactionEnvelope) -> Result<String, TransactionError> {
    Ok(envelope.to_xdr_base64(Limits::none())?)
}

pub fn envelope_from_base64(xdr: &str) -> Result<TransactionEnvelope, TransactionError> {
    Ok(TransactionEnvelope::from_xdr_base64(xdr, Limits::none())?)
}

pub fn operation_to_base64(operation: &Operation) -> Result<String, TransactionError> {
    Ok(operation.to_xdr_base64(Limits::none())?)
}
