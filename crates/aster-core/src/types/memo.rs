use serde::{Deserialize, Serialize};

use crate::crypto::Hash;
use crate::error::CoreError;

/// Maximum byte length of a text memo, per the ledger envelope format.
pub const MAX_MEMO_TEXT_BYTES: usize = 28;

/// Optional memo attached to a transaction body
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Memo {
    #[default]
    None,
    Text(String),
    Id(u64),
    Hash(Hash),
}

impl Memo {
    pub fn validate(&self) -> Result<(), CoreError> {
        if let Memo::Text(text) = self {
            if text.len() > MAX_MEMO_TEXT_BYTES {
                return Err(CoreError::SchemaViolation(format!(
                    "text memo exceeds {} bytes",
                    MAX_MEMO_TEXT_BYTES
                )));
            }
        }
        Ok(())
    }
}
