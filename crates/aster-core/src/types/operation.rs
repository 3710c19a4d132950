use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::account::AccountId;

/// Maximum byte length of a credit asset code.
pub const MAX_ASSET_CODE_BYTES: usize = 12;

/// An asset referenced by an operation: the network's native token or a
/// credit issued by an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Asset {
    Native,
    Credit { code: String, issuer: AccountId },
}

impl Asset {
    pub fn validate(&self) -> Result<(), CoreError> {
        if let Asset::Credit { code, .. } = self {
            if code.is_empty() || code.len() > MAX_ASSET_CODE_BYTES {
                return Err(CoreError::SchemaViolation(format!(
                    "asset code must be 1..={} bytes",
                    MAX_ASSET_CODE_BYTES
                )));
            }
            if !code.bytes().all(|b| b.is_ascii_alphanumeric()) {
                return Err(CoreError::SchemaViolation(
                    "asset code must be ASCII alphanumeric".to_string(),
                ));
            }
        }
        Ok(())
    }
}

/// Rational price for an offer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    pub n: i32,
    pub d: i32,
}

/// Operations carried by a transaction body. Payload content only: the
/// signing core validates structure, never business rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operation {
    /// Send an amount of an asset to a destination account
    Payment {
        destination: AccountId,
        asset: Asset,
        amount: i64,
    },
    /// Create and fund a new account
    CreateAccount {
        destination: AccountId,
        starting_balance: i64,
    },
    /// Establish, adjust, or revoke (limit 0) a trustline
    ChangeTrust { asset: Asset, limit: i64 },
    /// Create, update, or cancel (amount 0) an offer on the exchange
    ManageOffer {
        selling: Asset,
        buying: Asset,
        amount: i64,
        price: Price,
        offer_id: u64,
    },
    /// Set account options; only the inflation destination surfaces here
    SetOptions {
        inflation_destination: Option<AccountId>,
    },
}

impl Operation {
    pub fn validate(&self) -> Result<(), CoreError> {
        match self {
            Operation::Payment { asset, amount, .. } => {
                asset.validate()?;
                if *amount <= 0 {
                    return Err(CoreError::SchemaViolation(
                        "payment amount must be positive".to_string(),
                    ));
                }
            }
            Operation::CreateAccount {
                starting_balance, ..
            } => {
                if *starting_balance <= 0 {
                    return Err(CoreError::SchemaViolation(
                        "starting balance must be positive".to_string(),
                    ));
                }
            }
            Operation::ChangeTrust { asset, limit } => {
                asset.validate()?;
                if *limit < 0 {
                    return Err(CoreError::SchemaViolation(
                        "trust limit must not be negative".to_string(),
                    ));
                }
            }
            Operation::ManageOffer {
                selling,
                buying,
                amount,
                price,
                ..
            } => {
                selling.validate()?;
                buying.validate()?;
                if *amount < 0 {
                    return Err(CoreError::SchemaViolation(
                        "offer amount must not be negative".to_string(),
                    ));
                }
                if price.n <= 0 || price.d <= 0 {
                    return Err(CoreError::SchemaViolation(
                        "offer price must be positive".to_string(),
                    ));
                }
            }
            Operation::SetOptions { .. } => {}
        }
        Ok(())
    }
}
