//! Sequence number allocation.
//!
//! The ledger increments an account's sequence by exactly 1 per submitted
//! transaction. A provider resolves the currently recorded value with one
//! read of the external account-state source; callers preparing several
//! transactions before the first confirms reserve future slots through an
//! explicit offset, never through inference here.

use std::collections::HashMap;

use aster_core::{AccountId, CoreError};

use crate::error::PipelineError;

/// Resolves the sequence number currently recorded for an account.
///
/// Implementations perform exactly one read per call against the external
/// account-state source: no caching, no retry, no remote mutation.
/// `ProviderUnavailable` is transient and the caller's to retry.
pub trait SequenceProvider {
    fn sequence_for(&self, account: &AccountId) -> Result<u64, PipelineError>;
}

/// Decorator returning `recorded + offset` for pipelined transactions.
#[derive(Debug, Clone)]
pub struct OffsetSequence<P> {
    inner: P,
    offset: u64,
}

impl<P: SequenceProvider> OffsetSequence<P> {
    pub fn new(inner: P, offset: u64) -> Self {
        OffsetSequence { inner, offset }
    }
}

impl<P: SequenceProvider> SequenceProvider for OffsetSequence<P> {
    fn sequence_for(&self, account: &AccountId) -> Result<u64, PipelineError> {
        let recorded = self.inner.sequence_for(account)?;
        recorded
            .checked_add(self.offset)
            .ok_or_else(|| {
                PipelineError::Core(CoreError::SchemaViolation(
                    "sequence number overflow".to_string(),
                ))
            })
    }
}

/// Fixed-table provider for tests and offline signing, where the recorded
/// value arrives out of band.
#[derive(Debug, Clone, Default)]
pub struct StaticSequence {
    entries: HashMap<AccountId, u64>,
}

impl StaticSequence {
    pub fn new() -> Self {
        StaticSequence::default()
    }

    pub fn record(mut self, account: AccountId, sequence: u64) -> Self {
        self.entries.insert(account, sequence);
        self
    }
}

impl SequenceProvider for StaticSequence {
    fn sequence_for(&self, account: &AccountId) -> Result<u64, PipelineError> {
        self.entries
            .get(account)
            .copied()
            .ok_or(PipelineError::AccountNotFound(*account))
    }
}
