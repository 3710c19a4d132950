use anyhow::{bail, Context, Result};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use clap::Parser;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

mod cli;

use aster_core::{
    codec, data_payload, serialize, sign, verify, AccountId, KeyPair, Network, PublicKey, Sig,
};
use aster_pipeline::{collate, prepare, OffsetSequence, StaticSequence};
use cli::{Cli, Commands};

fn main() -> Result<()> {
    // Initialize logging
    let _subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Keygen => keygen(),
        Commands::Sign {
            envelope,
            secret,
            network,
            source,
            sequence,
            offset,
        } => sign_envelope(&envelope, &secret, &network, source.as_deref(), sequence, offset),
        Commands::SignData {
            namespace,
            data,
            secret,
        } => sign_data(&namespace, &data, &secret),
        Commands::VerifyData {
            namespace,
            data,
            public,
            signature,
        } => verify_data(&namespace, &data, &public, &signature),
        Commands::Collate { envelopes } => collate_envelopes(&envelopes),
        Commands::Decode { envelope } => decode_envelope(&envelope),
    }
}

/// Generate and print a fresh keypair
fn keygen() -> Result<()> {
    let kp = KeyPair::generate();
    println!("secret: {}", kp.secret.to_hex());
    println!("public: {}", kp.public.to_hex());
    Ok(())
}

/// Complete a skeleton envelope, sign it, and print the portable forms
fn sign_envelope(
    envelope: &str,
    secret: &str,
    network: &str,
    source: Option<&str>,
    sequence: Option<u64>,
    offset: u64,
) -> Result<()> {
    let skeleton = codec::decode(envelope).context("decoding envelope")?;
    let kp = KeyPair::from_secret_hex(secret).context("parsing secret key")?;
    let network = parse_network(network);

    let source_override = match source {
        Some(s) => Some(AccountId::from_hex(s).context("parsing source account")?),
        // default to the signer's own account, matching the common case
        // where the signing account is also the source
        None => Some(AccountId::from(kp.public)),
    };

    // the provider is only consulted when the sequence is unresolved
    let mut provider = StaticSequence::new();
    if skeleton.body.sequence == 0 {
        let recorded = match sequence {
            Some(s) => s,
            None => bail!("envelope sequence is unresolved; pass --sequence"),
        };
        let account = skeleton
            .body
            .source
            .or(source_override)
            .context("no source account to allocate a sequence for")?;
        provider = provider.record(account, recorded);
    }
    let provider = OffsetSequence::new(provider, offset);

    let prepared = prepare(skeleton, source_override, &provider, &network)?;
    let resolved_source = match prepared.envelope().body.source {
        Some(s) => s.to_hex(),
        None => String::new(),
    };
    info!(
        source = %resolved_source,
        sequence = prepared.envelope().body.sequence,
        network = network.passphrase(),
        "prepared envelope"
    );

    let signed = prepared.sign(&kp.secret)?;
    let text = codec::encode(&signed)?;

    println!("signed envelope:\n{}", text);
    println!("\nurl-encoded:\n{}", query_escape(&text));
    Ok(())
}

/// Sign a generic data payload under a namespace
fn sign_data(namespace: &str, data: &str, secret: &str) -> Result<()> {
    let kp = KeyPair::from_secret_hex(secret).context("parsing secret key")?;
    let payload = data_payload(namespace, data);
    let sig = sign(&kp.secret, &payload);

    let encoded = BASE64.encode(sig.as_bytes());
    println!("base64 signature:\n{}", encoded);
    println!("\nurl-encoded signature:\n{}", query_escape(&encoded));
    Ok(())
}

/// Verify a generic data-payload signature
fn verify_data(namespace: &str, data: &str, public: &str, signature: &str) -> Result<()> {
    let public = PublicKey::from_hex(public).context("parsing public key")?;
    let sig_bytes = BASE64
        .decode(signature.trim())
        .context("decoding signature")?;
    let sig = match Sig::from_slice(&sig_bytes) {
        Some(sig) => sig,
        None => bail!("signature must be 64 bytes"),
    };

    let payload = data_payload(namespace, data);
    verify(&public, &payload, &sig).context("verifying data signature")?;
    println!("signature is valid");
    Ok(())
}

/// Merge the signature sets of identically-bodied envelopes
fn collate_envelopes(encoded: &[String]) -> Result<()> {
    let envelopes = encoded
        .iter()
        .enumerate()
        .map(|(i, text)| codec::decode(text).with_context(|| format!("decoding envelope {}", i)))
        .collect::<Result<Vec<_>>>()?;

    let merged = collate(envelopes)?;
    info!(signatures = merged.signatures().len(), "collated envelope");
    println!("{}", codec::encode(&merged)?);
    Ok(())
}

/// Decode an envelope and print it as JSON
fn decode_envelope(envelope: &str) -> Result<()> {
    let decoded = codec::decode(envelope).context("decoding envelope")?;
    println!("{}", serialize::to_json_pretty(&decoded)?);
    Ok(())
}

fn parse_network(name: &str) -> Network {
    match name {
        "test" => Network::test(),
        "public" => Network::public(),
        passphrase => Network::new(passphrase),
    }
}

/// Percent-encode for embedding in a URI query, matching query escaping
/// on the wallet side
fn query_escape(s: &str) -> String {
    utf8_percent_encode(s, NON_ALPHANUMERIC).to_string()
}
