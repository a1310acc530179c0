//! Signing against a network id.
//!
//! The signed message is the SHA-256 of the XDR `TransactionSignaturePayload`
//! (network id + tagged transaction). The same digest, hex encoded, is the
//! transaction hash shown in explorer links.

use sha2::{Digest, Sha256};
use soroban_rs::xdr::{
    DecoratedSignature, Hash, Limits, Signature, SignatureHint, Transaction, TransactionEnvelope,
    TransactionSignaturePayload, TransactionSignaturePayloadTaggedTransaction,
    TransactionV1Envelope, VecM, WriteXdr,
};

use crate::constants::STELLAR_MAX_SIGNATURES;
use crate::models::{Keypair, NetworkConfig, TransactionError};

pub fn signature_payload_hash(
    transaction: &Transaction,
    network_id: [u8; 32],
) -> Result<[u8; 32], TransactionError> {
    let payload = TransactionSignaturePayload {
        network_id: Hash(network_id),
        tagged_transaction: TransactionSignaturePayloadTaggedTransaction::Tx(transaction.clone()),
    };
    let payload_bytes = payload.to_xdr(Limits::none())?;
    Ok(Sha256::digest(&payload_bytes).into())
}

/// Hex encoded transaction hash, as Horizon reports it.
pub fn transaction_hash(
    transaction: &Transaction,
    network: &NetworkConfig,
) -> Result<String, TransactionError> {
    Ok(hex::encode(signature_payload_hash(
        transaction,
        network.network_id(),
    )?))
}

pub fn decorated_signature(
    keypair: &Keypair,
    payload_hash: &[u8; 32],
) -> Result<DecoratedSignature, TransactionError> {
    let signature = keypair.sign(payload_hash);
    Ok(DecoratedSignature {
        hint: SignatureHint(keypair.signature_hint()),
        signature: Signature(signature.to_vec().try_into()?),
    })
}

/// Appends one signature per keypair to a V1 envelope.
pub fn sign_envelope(
    envelope: &mut TransactionEnvelope,
    network: &NetworkConfig,
    signers: &[&Keypair],
) -> Result<(), TransactionError> {
    let TransactionEnvelope::Tx(v1) = envelope else {
        return Err(TransactionError::Xdr(
            "only v1 transaction envelopes can be signed".to_string(),
        ));
    };

    let payload_hash = signature_payload_hash(&v1.tx, network.network_id())?;
    let mut signatures = v1.signatures.to_vec();
    for signer in signers {
        signatures.push(decorated_signature(signer, &payload_hash)?);
    }
    v1.signatures = signatures
        .try_into()
        .map_err(|_| TransactionError::TooManySignatures(STELLAR_MAX_SIGNATURES))?;
    Ok(())
}

/// Wraps the transaction in an envelope signed by every given keypair.
pub fn sign_transaction(
    transaction: Transaction,
    network: &NetworkConfig,
    signers: &[&Keypair],
) -> Result<TransactionEnvelope, TransactionError> {
    let mut envelope = TransactionEnvelope::Tx(TransactionV1Envelope {
        tx: transaction,
        signatures: VecM::default(),
    });
    sign_envelope(&mut envelope, network, signers)?;
    Ok(envelope)
}
