//! secp256k1 key loading, public key derivation, and key-pair validation

use secp256k1::{All, PublicKey, Secp256k1, SecretKey};

use crate::error::{KeyError, Result};
use crate::{PRIVATE_KEY_SIZE, PUBLIC_KEY_SIZE};

/// A private scalar together with its derived public point
#[derive(Debug)]
pub struct KeyPair {
    secret: SecretKey,
    public: PublicKey,
}

impl KeyPair {
    /// The private scalar as 32 big-endian bytes
    pub fn secret_bytes(&self) -> [u8; PRIVATE_KEY_SIZE] {
        self.secret.secret_bytes()
    }

    /// The public point in uncompressed SEC1 form (0x04 || x || y)
    pub fn public_uncompressed(&self) -> [u8; PUBLIC_KEY_SIZE] {
        self.public.serialize_uncompressed()
    }
}

impl Drop for KeyPair {
    fn drop(&mut self) {
        self.secret.non_secure_erase();
    }
}

/// Curve engine for secp256k1 key operations
///
/// All scalar and point arithmetic is delegated to libsecp256k1 via the
/// `secp256k1` crate; this type only orchestrates the calls.
#[derive(Debug)]
pub struct KeyEngine {
    secp: Secp256k1<All>,
}

impl Default for KeyEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyEngine {
    /// Create a new engine with a fresh secp256k1 context
    pub fn new() -> Self {
        Self {
            secp: Secp256k1::new(),
        }
    }

    /// Load a 32-byte big-endian scalar as a private key
    ///
    /// The scalar must lie in `[1, n-1]` where `n` is the curve order; zero
    /// and out-of-range values are rejected here rather than at validation.
    pub fn load_secret(&self, raw: &[u8; PRIVATE_KEY_SIZE]) -> Result<SecretKey> {
        SecretKey::from_slice(raw).map_err(|_| KeyError::InvalidScalar.into())
    }

    /// Compute `scalar * G` and bind the point to the scalar
    pub fn derive_key_pair(&self, secret: SecretKey) -> KeyPair {
        let public = PublicKey::from_secret_key(&self.secp, &secret);
        KeyPair { secret, public }
    }

    /// Check that the key pair is internally consistent
    ///
    /// Recomputes the public point from the private scalar and compares it
    /// to the one stored in the pair. A point that is not on the curve or
    /// is the point at infinity cannot be represented by the underlying
    /// library, so the remaining check is the scalar/point correspondence
    /// and the uncompressed SEC1 shape.
    pub fn validate(&self, pair: &KeyPair) -> Result<()> {
        let encoded = pair.public_uncompressed();
        if encoded[0] != 0x04 {
            return Err(KeyError::MalformedPoint.into());
        }
        let expected = PublicKey::from_secret_key(&self.secp, &pair.secret);
        if expected != pair.public {
            return Err(KeyError::ValidationFailed.into());
        }
        Ok(())
    }
}
