//! Error types for the private-key-to-DER converter

use thiserror::Error;

/// Main error type for the conversion pipeline
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("key error: {0}")]
    Key(#[from] KeyError),

    #[error("encoding error: {0}")]
    Encoding(#[from] EncodingError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Key-material errors: reading, loading, and validating the key pair
#[derive(Error, Debug)]
pub enum KeyError {
    #[error("requires {expected} bytes of input, got {actual}")]
    InsufficientInput { expected: usize, actual: usize },

    #[error("private key scalar out of range (zero or not below the curve order)")]
    InvalidScalar,

    #[error("public key does not match the private scalar")]
    ValidationFailed,

    #[error("public key is not an uncompressed SEC1 point")]
    MalformedPoint,
}

/// DER serialization errors
#[derive(Error, Debug)]
pub enum EncodingError {
    #[error("DER size computation failed: {0}")]
    Size(String),

    #[error("DER encoder wrote {actual} bytes, expected {expected}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("DER write failed: {0}")]
    Write(String),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, ConvertError>;
