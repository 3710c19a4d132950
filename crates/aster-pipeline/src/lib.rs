//! Aster Pipeline - envelope preparation, sequence allocation, collation
//!
//! This crate completes skeleton envelopes into submittable ones (source
//! resolution, sequence allocation, network binding, signing) and merges
//! signature sets from independently signed copies of one transaction.

pub mod collator;
pub mod error;
pub mod mutator;
pub mod sequence;

pub use collator::collate;
pub use error::PipelineError;
pub use mutator::{apply, apply_signature, prepare, Mutation, Prepared};
pub use sequence::{OffsetSequence, SequenceProvider, StaticSequence};
