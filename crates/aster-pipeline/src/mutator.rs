//! Envelope mutation and preparation.
//!
//! A skeleton envelope (absent source, zero sequence) moves through
//! `Skeleton -> SourceResolved -> SequenceResolved -> ReadyToSign` by way
//! of a closed set of tagged mutations. Each field transition is
//! idempotent: re-preparing an already-resolved field is a no-op.

use aster_core::{
    sign, transaction_payload, AccountId, Envelope, Network, Operation, SecretKey, Sig, TxBody,
};
use tracing::debug;

use crate::error::PipelineError;
use crate::sequence::SequenceProvider;

/// The closed set of mutations an envelope body accepts.
#[derive(Debug, Clone)]
pub enum Mutation {
    /// Set the source account; no-op when one is already set
    SetSource(AccountId),
    /// Set the sequence number; no-op when it is already nonzero
    SetSequence(u64),
    /// Bind the signing context to a network; rebinding is allowed, the
    /// passphrase is never stored in the body
    SetNetwork(Network),
    /// Append an operation to the body
    AppendOperation(Operation),
}

/// Apply one tagged mutation to a body, honoring per-field idempotence.
/// Returns the network when the mutation binds one, for the caller to
/// carry into the signing context.
pub fn apply(body: &mut TxBody, mutation: Mutation) -> Option<Network> {
    match mutation {
        Mutation::SetSource(source) => {
            if body.source.is_none() {
                body.source = Some(source);
            } else {
                debug!(%source, "source already resolved, skipping");
            }
            None
        }
        Mutation::SetSequence(sequence) => {
            if body.sequence == 0 {
                body.sequence = sequence;
            } else {
                debug!(sequence, "sequence already resolved, skipping");
            }
            None
        }
        Mutation::SetNetwork(network) => Some(network),
        Mutation::AppendOperation(op) => {
            body.operations.push(op);
            None
        }
    }
}

/// An envelope with a resolved body and a bound network, ready to sign.
#[derive(Debug, Clone)]
pub struct Prepared {
    envelope: Envelope,
    network: Network,
}

impl Prepared {
    pub fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    pub fn network(&self) -> &Network {
        &self.network
    }

    /// The transaction signature payload for the bound network
    pub fn payload(&self) -> Result<[u8; 32], PipelineError> {
        Ok(transaction_payload(&self.envelope.body, &self.network)?)
    }

    /// Sign with a secret key and append the signature
    pub fn sign(mut self, secret: &SecretKey) -> Result<Envelope, PipelineError> {
        let payload = transaction_payload(&self.envelope.body, &self.network)?;
        let sig = sign(secret, &payload);
        self.envelope.append_signature(sig)?;
        Ok(self.envelope)
    }

    /// Release the envelope unsigned
    pub fn into_envelope(self) -> Envelope {
        self.envelope
    }
}

/// Complete a skeleton envelope: resolve the source account (from the
/// override when the body carries none), resolve the sequence number (one
/// provider read when it is zero), and bind the network for the signing
/// step. Fields already resolved upstream are left untouched.
pub fn prepare<P: SequenceProvider>(
    skeleton: Envelope,
    source_override: Option<AccountId>,
    provider: &P,
    network: &Network,
) -> Result<Prepared, PipelineError> {
    let mut envelope = skeleton;

    // Skeleton -> SourceResolved
    let source = match envelope.body.source {
        Some(source) => source,
        None => {
            let source = source_override.ok_or(PipelineError::MissingSourceAccount)?;
            apply(&mut envelope.body, Mutation::SetSource(source));
            debug!(%source, "resolved source account");
            source
        }
    };

    // SourceResolved -> SequenceResolved
    if envelope.body.sequence == 0 {
        let sequence = provider.sequence_for(&source)?;
        apply(&mut envelope.body, Mutation::SetSequence(sequence));
        debug!(sequence, "resolved sequence number");
    }

    // SequenceResolved -> ReadyToSign
    let bound = apply(&mut envelope.body, Mutation::SetNetwork(network.clone()))
        .unwrap_or_else(|| network.clone());

    Ok(Prepared {
        envelope,
        network: bound,
    })
}

/// Append a signature to an envelope. Existing signatures are never
/// removed or reordered.
pub fn apply_signature(envelope: &mut Envelope, sig: Sig) -> Result<(), PipelineError> {
    envelope.append_signature(sig)?;
    Ok(())
}
