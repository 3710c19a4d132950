//! Aster Core - envelope types, cryptography, codec, and signature payloads
//!
//! This crate provides the signing core for the Aster federated ledger
//! tooling: transaction-envelope types, their portable base64 encoding,
//! ed25519 keys and signatures, and the domain-separated signature-payload
//! construction rules for ledger transactions and generic data.

pub mod codec;
pub mod crypto;
pub mod error;
pub mod payload;
pub mod serialize;
pub mod types;

pub use crypto::{hash_blake3, sign, verify, Hash, KeyPair, PublicKey, SecretKey, Sig};
pub use error::CoreError;
pub use payload::{data_payload, transaction_payload, Network, URI_SIGNING_NAMESPACE};
pub use types::*;
