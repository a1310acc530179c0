//! Assembles unsigned transactions from an account snapshot and operations.

use chrono::Utc;
use log::error;
use soroban_rs::xdr::{
    Memo, Operation, Preconditions, SequenceNumber, TimeBounds, TimePoint, Transaction,
    TransactionExt,
};

use crate::constants::{STELLAR_BASE_FEE, STELLAR_MAX_OPERATIONS, STELLAR_TRANSACTION_TIMEOUT_SECONDS};
use crate::domain::transaction::string_to_muxed_account;
use crate::models::{AccountSnapshot, TransactionError};

/// Sequence number of the next transaction from an account.
pub fn next_sequence(current: i64) -> Result<i64, TransactionError> {
    current
        .checked_add(1)
        .ok_or(TransactionError::SequenceOverflow)
}

/// Fixed fee: base fee times the operation count.
pub fn transaction_fee(operation_count: usize) -> u32 {
    STELLAR_BASE_FEE.saturating_mul(operation_count as u32)
}

#[derive(Debug, Clone)]
pub struct TransactionBuilder {
    source_account: String,
    sequence: i64,
    operations: Vec<Operation>,
    memo: Memo,
    timeout_seconds: u64,
}

impl TransactionBuilder {
    pub fn new(source: &AccountSnapshot) -> Self {
        Self {
            source_account: source.account_id.clone(),
            sequence: source.sequence,
            operations: Vec::new(),
            memo: Memo::None,
            timeout_seconds: STELLAR_TRANSACTION_TIMEOUT_SECONDS,
        }
    }

    pub fn add_operation(mut self, operation: Operation) -> Self {
        self.operations.push(operation);
        self
    }

    pub fn add_operations(mut self, operations: impl IntoIterator<Item = Operation>) -> Self {
        self.operations.extend(operations);
        self
    }

    pub fn memo(mut self, memo: Memo) -> Self {
        self.memo = memo;
        self
    }

    pub fn timeout(mut self, seconds: u64) -> Self {
        self.timeout_seconds = seconds;
        self
    }

    /// Builds with time bounds `[0, now + timeout]`.
    pub fn build(self) -> Result<Transaction, TransactionError> {
        let now = Utc::now().timestamp().max(0) as u64;
        self.build_at(now)
    }

    pub fn build_at(self, now: u64) -> Result<Transaction, TransactionError> {
        let source = self.source_account.clone();
        self.assemble(now).inspect_err(|e| {
            error!("Failed to build transaction for {}: {}", source, e);
        })
    }

    fn assemble(self, now: u64) -> Result<Transaction, TransactionError> {
        let count = self.operations.len();
        if count == 0 {
            return Err(TransactionError::EmptyOperations);
        }
        if count > STELLAR_MAX_OPERATIONS {
            return Err(TransactionError::TooManyOperations {
                count,
                max: STELLAR_MAX_OPERATIONS,
            });
        }

        Ok(Transaction {
            source_account: string_to_muxed_account(&self.source_account)?,
            fee: transaction_fee(count),
            seq_num: SequenceNumber(next_sequence(self.sequence)?),
            cond: Preconditions::Time(TimeBounds {
                min_time: TimePoint(0),
                max_time: TimePoint(now.saturating_add(self.timeout_seconds)),
            }),
            memo: self.memo,
            operations: self.operations.try_into()?,
            ext: TransactionExt::V0,
        })
    }
}

/// Shorthand for the common case: default timeout, no memo.
pub fn build_transaction(
    source: &AccountSnapshot,
    operations: Vec<Operation>,
) -> Result<Transaction, TransactionError> {
    TransactionBuilder::new(source)
        .add_operations(operations)
        .build()
}
