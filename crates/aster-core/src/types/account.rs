use serde::{Deserialize, Serialize};
use std::fmt;

use crate::crypto::PublicKey;
use crate::error::CoreError;

/// Account identifier: the ed25519 public key of the account's master
/// signer, displayed as hex.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountId(pub PublicKey);

impl AccountId {
    pub fn public_key(&self) -> &PublicKey {
        &self.0
    }

    pub fn from_hex(s: &str) -> Result<Self, CoreError> {
        Ok(AccountId(PublicKey::from_hex(s)?))
    }

    pub fn to_hex(&self) -> String {
        self.0.to_hex()
    }
}

impl From<PublicKey> for AccountId {
    fn from(pk: PublicKey) -> Self {
        AccountId(pk)
    }
}

impl fmt::Debug for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AccountId({})", self.to_hex())
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}
