use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Malformed encoding: {0}")]
    MalformedEncoding(String),

    #[error("Schema violation: {0}")]
    SchemaViolation(String),

    #[error("Invalid key")]
    InvalidKey,

    #[error("Signature verification failed")]
    VerificationFailed,

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Hex decode error: {0}")]
    HexDecode(#[from] hex::FromHexError),
}
