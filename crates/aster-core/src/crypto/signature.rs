use ed25519_dalek::{Signature as DalekSignature, Signer, Verifier};
use serde::{Deserialize, Serialize};
use serde_big_array::BigArray;
use std::fmt;

use crate::crypto::keys::{PublicKey, SecretKey};
use crate::error::CoreError;

/// Ed25519 detached signature (64 bytes)
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sig(#[serde(with = "BigArray")] pub [u8; 64]);

impl Sig {
    pub fn as_bytes(&self) -> &[u8; 64] {
        &self.0
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.0.to_vec()
    }

    pub fn from_slice(slice: &[u8]) -> Option<Self> {
        if slice.len() != 64 {
            return None;
        }
        let mut bytes = [0u8; 64];
        bytes.copy_from_slice(slice);
        Some(Sig(bytes))
    }

    pub fn from_hex(s: &str) -> Result<Self, CoreError> {
        let bytes = hex::decode(s)?;
        Self::from_slice(&bytes)
            .ok_or_else(|| CoreError::MalformedEncoding("signature must be 64 bytes".to_string()))
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Debug for Sig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sig({}...)", &self.to_hex()[..16])
    }
}

impl fmt::Display for Sig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// Sign a payload with a secret key
pub fn sign(secret_key: &SecretKey, payload: &[u8]) -> Sig {
    let signature = secret_key.signing_key().sign(payload);
    Sig(signature.to_bytes())
}

/// Verify a signature against a public key and payload. The accept/reject
/// decision goes through ed25519-dalek's constant-time verification.
pub fn verify(public_key: &PublicKey, payload: &[u8], signature: &Sig) -> Result<(), CoreError> {
    let verifying_key = public_key.to_verifying_key()?;
    let dalek_sig = DalekSignature::from_bytes(&signature.0);
    verifying_key
        .verify(payload, &dalek_sig)
        .map_err(|_| CoreError::VerificationFailed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::keys::KeyPair;

    #[test]
    fn test_sign_and_verify() {
        let kp = KeyPair::generate();
        let payload = b"hello world";
        let sig = sign(&kp.secret, payload);
        assert!(verify(&kp.public, payload, &sig).is_ok());
    }

    #[test]
    fn test_verify_wrong_payload() {
        let kp = KeyPair::generate();
        let sig = sign(&kp.secret, b"hello world");
        assert!(matches!(
            verify(&kp.public, b"wrong payload", &sig),
            Err(CoreError::VerificationFailed)
        ));
    }

    #[test]
    fn test_verify_wrong_key() {
        let kp1 = KeyPair::generate();
        let kp2 = KeyPair::generate();
        let payload = b"hello world";
        let sig = sign(&kp1.secret, payload);
        assert!(matches!(
            verify(&kp2.public, payload, &sig),
            Err(CoreError::VerificationFailed)
        ));
    }

    #[test]
    fn test_sig_hex_roundtrip() {
        let kp = KeyPair::generate();
        let sig = sign(&kp.secret, b"test");
        let hex_str = sig.to_hex();
        let recovered = Sig::from_hex(&hex_str).unwrap();
        assert_eq!(sig, recovered);
    }
}
