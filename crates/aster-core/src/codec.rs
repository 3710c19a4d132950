//! Portable text encoding of transaction envelopes.
//!
//! An envelope travels as base64 text framing its deterministic binary
//! form. Encoding the same value twice yields identical bytes; the
//! collator's body-equality check and the round-trip tests depend on it.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

use crate::error::CoreError;
use crate::serialize;
use crate::types::{Envelope, TxBody};

/// Encode an envelope into its portable base64 form. Deterministic.
pub fn encode(envelope: &Envelope) -> Result<String, CoreError> {
    let bytes = serialize::to_bytes(envelope)?;
    Ok(BASE64.encode(bytes))
}

/// Decode the portable base64 form into an envelope. Fails with
/// `MalformedEncoding` when the text is not validly framed, or
/// `SchemaViolation` when decoded fields break structural constraints.
pub fn decode(text: &str) -> Result<Envelope, CoreError> {
    let bytes = BASE64
        .decode(text.trim())
        .map_err(|e| CoreError::MalformedEncoding(e.to_string()))?;
    let envelope: Envelope = serialize::from_bytes(&bytes)?;
    envelope.validate()?;
    Ok(envelope)
}

/// Deterministic encoding of the body alone, shared by the signature
/// payload builder and the collator's equality check.
pub fn body_bytes(body: &TxBody) -> Result<Vec<u8>, CoreError> {
    serialize::to_bytes(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::{sign, KeyPair};
    use crate::types::{AccountId, Asset, Memo, Operation, TxBody};

    fn sample_envelope() -> Envelope {
        let source = AccountId::from(KeyPair::generate().public);
        let destination = AccountId::from(KeyPair::generate().public);
        let mut body = TxBody::new(
            source,
            7,
            100,
            vec![Operation::Payment {
                destination,
                asset: Asset::Native,
                amount: 1_234_567,
            }],
        );
        body.memo = Memo::Text("invoice 42".to_string());
        Envelope::new(body)
    }

    #[test]
    fn test_roundtrip() {
        let envelope = sample_envelope();
        let text = encode(&envelope).unwrap();
        let decoded = decode(&text).unwrap();
        assert_eq!(envelope, decoded);
    }

    #[test]
    fn test_roundtrip_with_signatures() {
        let kp = KeyPair::generate();
        let mut envelope = sample_envelope();
        let sig = sign(&kp.secret, b"anything");
        envelope.append_signature(sig).unwrap();

        let decoded = decode(&encode(&envelope).unwrap()).unwrap();
        assert_eq!(decoded.signatures(), &[sig]);
        assert_eq!(envelope, decoded);
    }

    #[test]
    fn test_encode_deterministic() {
        let envelope = sample_envelope();
        assert_eq!(encode(&envelope).unwrap(), encode(&envelope).unwrap());
    }

    #[test]
    fn test_decode_rejects_bad_base64() {
        assert!(matches!(
            decode("not/valid/base64!!"),
            Err(CoreError::MalformedEncoding(_))
        ));
    }

    #[test]
    fn test_decode_rejects_truncated_frame() {
        let text = encode(&sample_envelope()).unwrap();
        let bytes = BASE64.decode(&text).unwrap();
        let truncated = BASE64.encode(&bytes[..bytes.len() / 2]);
        assert!(matches!(
            decode(&truncated),
            Err(CoreError::MalformedEncoding(_))
        ));
    }

    #[test]
    fn test_decode_rejects_negative_amount() {
        let mut envelope = sample_envelope();
        if let Operation::Payment { amount, .. } = &mut envelope.body.operations[0] {
            *amount = -5;
        }
        // encode skips validation on purpose; decode must catch it
        let text = encode(&envelope).unwrap();
        assert!(matches!(
            decode(&text),
            Err(CoreError::SchemaViolation(_))
        ));
    }
}
