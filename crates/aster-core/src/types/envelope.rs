use serde::{Deserialize, Serialize};

use crate::crypto::Sig;
use crate::error::CoreError;
use crate::types::account::AccountId;
use crate::types::memo::Memo;
use crate::types::operation::Operation;

/// Maximum number of signatures an envelope may carry.
pub const MAX_SIGNATURES: usize = 20;

/// The signed portion of a transaction. `source` is `None` and `sequence`
/// is 0 on a skeleton; the mutation pipeline fills both in before signing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxBody {
    /// Source account, absent on a skeleton
    pub source: Option<AccountId>,
    /// Sequence number, 0 meaning unresolved
    pub sequence: u64,
    /// Fee in the smallest ledger unit
    pub fee: u32,
    /// Optional memo
    pub memo: Memo,
    /// Ordered operation list
    pub operations: Vec<Operation>,
}

impl TxBody {
    /// Create a body with no source and no sequence, awaiting preparation
    pub fn skeleton(fee: u32, operations: Vec<Operation>) -> Self {
        TxBody {
            source: None,
            sequence: 0,
            fee,
            memo: Memo::None,
            operations,
        }
    }

    /// Create a fully specified body
    pub fn new(source: AccountId, sequence: u64, fee: u32, operations: Vec<Operation>) -> Self {
        TxBody {
            source: Some(source),
            sequence,
            fee,
            memo: Memo::None,
            operations,
        }
    }

    /// True when the source or the sequence still needs resolution
    pub fn is_skeleton(&self) -> bool {
        self.source.is_none() || self.sequence == 0
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if self.operations.is_empty() {
            return Err(CoreError::SchemaViolation(
                "transaction must contain at least one operation".to_string(),
            ));
        }
        self.memo.validate()?;
        for op in &self.operations {
            op.validate()?;
        }
        Ok(())
    }
}

/// A transaction body plus its accumulated signatures. The signature list
/// is append-only; once an envelope has a signature and a resolved
/// sequence, its body bytes never change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    pub body: TxBody,
    signatures: Vec<Sig>,
}

impl Envelope {
    /// Wrap a body with an empty signature list
    pub fn new(body: TxBody) -> Self {
        Envelope {
            body,
            signatures: Vec::new(),
        }
    }

    pub fn signatures(&self) -> &[Sig] {
        &self.signatures
    }

    /// Append a signature. Existing signatures are never removed or
    /// reordered.
    pub fn append_signature(&mut self, sig: Sig) -> Result<(), CoreError> {
        if self.signatures.len() >= MAX_SIGNATURES {
            return Err(CoreError::SchemaViolation(format!(
                "envelope holds at most {} signatures",
                MAX_SIGNATURES
            )));
        }
        self.signatures.push(sig);
        Ok(())
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        self.body.validate()?;
        if self.signatures.len() > MAX_SIGNATURES {
            return Err(CoreError::SchemaViolation(format!(
                "envelope holds at most {} signatures",
                MAX_SIGNATURES
            )));
        }
        Ok(())
    }
}
