//! Multi-party signature collation.
//!
//! N parties sign their own copy of one transaction; collation merges the
//! signature sets into a single envelope. Bodies are compared through the
//! codec's deterministic encoding, so any divergence in any field fails
//! the merge. Signatures are concatenated in input order without
//! deduplication or verification; a hardened scheme would verify each
//! signature against its claimed signer before merging, the blind
//! concatenation here mirrors the coordination protocol as deployed.

use aster_core::{codec, Envelope};
use tracing::debug;

use crate::error::PipelineError;

/// Merge the signature sets of envelopes sharing an identical body.
/// `envelopes[0]` is the base; a body differing from it in any field
/// fails with `BodyMismatch` naming the offending index. No I/O,
/// synchronous.
pub fn collate(envelopes: Vec<Envelope>) -> Result<Envelope, PipelineError> {
    let mut iter = envelopes.into_iter();
    let mut merged = iter.next().ok_or(PipelineError::EmptyCollation)?;
    let base_bytes = codec::body_bytes(&merged.body)?;

    for (i, envelope) in iter.enumerate() {
        let bytes = codec::body_bytes(&envelope.body)?;
        if bytes != base_bytes {
            return Err(PipelineError::BodyMismatch { index: i + 1 });
        }
        for sig in envelope.signatures() {
            merged.append_signature(*sig)?;
        }
    }

    debug!(
        signatures = merged.signatures().len(),
        "collated envelope"
    );
    Ok(merged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use aster_core::{sign, AccountId, Asset, KeyPair, Operation, TxBody};

    fn signed_copy(body: &TxBody, kp: &KeyPair) -> Envelope {
        let mut envelope = Envelope::new(body.clone());
        let sig = sign(&kp.secret, b"placeholder payload");
        envelope.append_signature(sig).unwrap();
        envelope
    }

    fn sample_body() -> TxBody {
        TxBody::new(
            AccountId::from(KeyPair::generate().public),
            5,
            100,
            vec![Operation::Payment {
                destination: AccountId::from(KeyPair::generate().public),
                asset: Asset::Native,
                amount: 77,
            }],
        )
    }

    #[test]
    fn test_collate_merges_in_input_order() {
        let body = sample_body();
        let kp1 = KeyPair::generate();
        let kp2 = KeyPair::generate();

        let a = signed_copy(&body, &kp1);
        let b = signed_copy(&body, &kp2);
        let s1 = a.signatures()[0];
        let s2 = b.signatures()[0];

        let merged = collate(vec![a, b]).unwrap();
        assert_eq!(merged.body, body);
        assert_eq!(merged.signatures(), &[s1, s2]);
    }

    #[test]
    fn test_collate_single_envelope() {
        let body = sample_body();
        let envelope = signed_copy(&body, &KeyPair::generate());
        let merged = collate(vec![envelope.clone()]).unwrap();
        assert_eq!(merged, envelope);
    }

    #[test]
    fn test_collate_does_not_deduplicate() {
        // documented baseline: identical signatures are kept twice
        let body = sample_body();
        let kp = KeyPair::generate();
        let envelope = signed_copy(&body, &kp);

        let merged = collate(vec![envelope.clone(), envelope]).unwrap();
        assert_eq!(merged.signatures().len(), 2);
        assert_eq!(merged.signatures()[0], merged.signatures()[1]);
    }

    #[test]
    fn test_collate_rejects_differing_body() {
        let body = sample_body();
        let mut other = body.clone();
        other.sequence += 1;

        let kp = KeyPair::generate();
        let result = collate(vec![signed_copy(&body, &kp), signed_copy(&other, &kp)]);
        assert!(matches!(
            result,
            Err(PipelineError::BodyMismatch { index: 1 })
        ));
    }

    #[test]
    fn test_collate_empty_input() {
        assert!(matches!(
            collate(vec![]),
            Err(PipelineError::EmptyCollation)
        ));
    }
}
