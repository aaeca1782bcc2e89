//! Private key to DER converter
//!
//! Converts a raw 32-byte secp256k1 private key into the 279-byte
//! DER-encoded `ECPrivateKey` structure with explicit curve parameters,
//! containing both the private scalar and the derived public point. The
//! byte layout matches the historical OpenSSL encoding: the private key
//! occupies offsets 9..=40 and the uncompressed public point the trailing
//! 65 bytes, with fixed curve boilerplate in between.

pub mod encoder;
pub mod error;
pub mod key;
pub mod pipeline;

pub use encoder::encode_key_pair;
pub use error::{ConvertError, EncodingError, KeyError, Result};
pub use key::{KeyEngine, KeyPair};

#[cfg(test)]
mod tests;

/// Size of a raw private key in bytes
pub const PRIVATE_KEY_SIZE: usize = 32;

/// Size of an uncompressed SEC1 public key in bytes
pub const PUBLIC_KEY_SIZE: usize = 65;

/// Size of the DER-encoded key pair for secp256k1 with an uncompressed point
pub const DER_KEY_SIZE: usize = 279;
