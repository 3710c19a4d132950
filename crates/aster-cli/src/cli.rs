use clap::{Parser, Subcommand};

/// Aster - envelope signing utilities for the federated ledger
#[derive(Parser)]
#[command(name = "aster")]
#[command(about = "Sign, mutate, and collate transaction envelopes")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a new keypair
    Keygen,

    /// Complete and sign a base64-encoded envelope
    Sign {
        /// Base64-encoded envelope to sign
        #[arg(long)]
        envelope: String,

        /// Signer secret key (hex seed)
        #[arg(long)]
        secret: String,

        /// Network: "test", "public", or a raw passphrase
        #[arg(long)]
        network: String,

        /// Source account (hex public key) for skeleton envelopes
        #[arg(long)]
        source: Option<String>,

        /// Recorded sequence number of the source account, required when
        /// the envelope's sequence is unresolved
        #[arg(long)]
        sequence: Option<u64>,

        /// Offset added to the recorded sequence for pipelined signing
        #[arg(long, default_value = "0")]
        offset: u64,
    },

    /// Sign an arbitrary data payload under a namespace
    SignData {
        /// Namespace prefix for the signing domain
        #[arg(long, default_value = aster_core::URI_SIGNING_NAMESPACE)]
        namespace: String,

        /// Payload to sign
        #[arg(long)]
        data: String,

        /// Signer secret key (hex seed)
        #[arg(long)]
        secret: String,
    },

    /// Verify a data-payload signature
    VerifyData {
        /// Namespace prefix for the signing domain
        #[arg(long, default_value = aster_core::URI_SIGNING_NAMESPACE)]
        namespace: String,

        /// Payload that was signed
        #[arg(long)]
        data: String,

        /// Signer public key (hex)
        #[arg(long)]
        public: String,

        /// Base64-encoded signature
        #[arg(long)]
        signature: String,
    },

    /// Merge the signature sets of identically-bodied envelopes
    Collate {
        /// Base64-encoded envelopes, base first
        #[arg(required = true)]
        envelopes: Vec<String>,
    },

    /// Decode an envelope and print it as JSON
    Decode {
        /// Base64-encoded envelope
        #[arg(long)]
        envelope: String,
    },
}
