//! Signature payload construction.
//!
//! Two signing domains exist and their payloads are intentionally
//! incompatible: ledger transactions are hashed together with the network
//! passphrase and an envelope type tag, while generic application data is
//! signed raw behind a fixed discriminator block. A signature produced in
//! one domain never verifies in the other, and a transaction signed for
//! one network never verifies on another.

use serde::{Deserialize, Serialize};

use crate::codec;
use crate::crypto::{hash_blake3, Hash};
use crate::error::CoreError;
use crate::types::TxBody;

/// Passphrase of the public network.
pub const PUBLIC_NETWORK_PASSPHRASE: &str = "Public Global Stellar Network ; September 2015";

/// Passphrase of the test network.
pub const TEST_NETWORK_PASSPHRASE: &str = "Test SDF Network ; September 2015";

/// Standardized namespace prefix for URI-scheme data signing.
pub const URI_SIGNING_NAMESPACE: &str = "stellar.sep.7 - URI Scheme";

/// Envelope type tag bound into every transaction signature payload.
const ENVELOPE_TAG_TX: [u8; 4] = [0, 0, 0, 2];

/// Final byte of the 36-byte discriminator block, marking
/// application-defined data signing.
const DATA_DISCRIMINANT: u8 = 4;
const DISCRIMINANT_LEN: usize = 36;

/// Identity of one logical network. Scopes every transaction signature;
/// callers must pick one explicitly, the core assumes no default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Network {
    passphrase: String,
}

impl Network {
    pub fn new(passphrase: impl Into<String>) -> Self {
        Network {
            passphrase: passphrase.into(),
        }
    }

    pub fn public() -> Self {
        Network::new(PUBLIC_NETWORK_PASSPHRASE)
    }

    pub fn test() -> Self {
        Network::new(TEST_NETWORK_PASSPHRASE)
    }

    pub fn passphrase(&self) -> &str {
        &self.passphrase
    }

    /// Network id: hash of the passphrase, the first component of every
    /// transaction signature payload.
    pub fn id(&self) -> Hash {
        hash_blake3(self.passphrase.as_bytes())
    }
}

/// Payload to sign for a transaction body on a given network:
/// `H(H(passphrase) || envelope type tag || body bytes)`.
pub fn transaction_payload(body: &TxBody, network: &Network) -> Result<[u8; 32], CoreError> {
    let body_bytes = codec::body_bytes(body)?;
    let mut buf = Vec::with_capacity(32 + ENVELOPE_TAG_TX.len() + body_bytes.len());
    buf.extend_from_slice(network.id().as_bytes());
    buf.extend_from_slice(&ENVELOPE_TAG_TX);
    buf.extend_from_slice(&body_bytes);
    Ok(hash_blake3(&buf).0)
}

/// Payload to sign for generic application data under a namespace: a
/// 36-byte discriminator block whose final byte is 4, then the UTF-8
/// namespace and data. Signed directly, no pre-hashing; ed25519 hashes
/// internally.
pub fn data_payload(namespace: &str, data: &str) -> Vec<u8> {
    let mut block = [0u8; DISCRIMINANT_LEN];
    block[DISCRIMINANT_LEN - 1] = DATA_DISCRIMINANT;

    let mut out = Vec::with_capacity(DISCRIMINANT_LEN + namespace.len() + data.len());
    out.extend_from_slice(&block);
    out.extend_from_slice(namespace.as_bytes());
    out.extend_from_slice(data.as_bytes());
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::{sign, verify, KeyPair};
    use crate::types::{AccountId, Asset, Operation, TxBody};

    fn sample_body() -> TxBody {
        let kp = KeyPair::generate();
        TxBody::new(
            AccountId::from(kp.public),
            3,
            100,
            vec![Operation::Payment {
                destination: AccountId::from(KeyPair::generate().public),
                asset: Asset::Native,
                amount: 10,
            }],
        )
    }

    #[test]
    fn test_transaction_payload_deterministic() {
        let body = sample_body();
        let network = Network::test();
        assert_eq!(
            transaction_payload(&body, &network).unwrap(),
            transaction_payload(&body, &network).unwrap()
        );
    }

    #[test]
    fn test_transaction_payload_network_bound() {
        let body = sample_body();
        let test = transaction_payload(&body, &Network::test()).unwrap();
        let public = transaction_payload(&body, &Network::public()).unwrap();
        assert_ne!(test, public);
    }

    #[test]
    fn test_data_payload_layout() {
        let payload = data_payload("ns", "payload");
        assert_eq!(payload.len(), 36 + 2 + 7);
        assert!(payload[..35].iter().all(|&b| b == 0));
        assert_eq!(payload[35], 4);
        assert_eq!(&payload[36..38], b"ns");
        assert_eq!(&payload[38..], b"payload");
    }

    #[test]
    fn test_domain_separation() {
        // a generic-data signature must never verify as a transaction
        // signature over the same input bytes, and vice versa
        let kp = KeyPair::generate();
        let body = sample_body();
        let network = Network::test();

        let tx_payload = transaction_payload(&body, &network).unwrap();
        let data = String::from_utf8_lossy(&tx_payload).into_owned();
        let generic_payload = data_payload(URI_SIGNING_NAMESPACE, &data);

        let tx_sig = sign(&kp.secret, &tx_payload);
        let generic_sig = sign(&kp.secret, &generic_payload);

        assert!(verify(&kp.public, &generic_payload, &tx_sig).is_err());
        assert!(verify(&kp.public, &tx_payload, &generic_sig).is_err());
    }
}
