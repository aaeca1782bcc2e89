//! DER serialization of the key pair
//!
//! Produces the OpenSSL-compatible `ECPrivateKey` structure (SEC1 / RFC 5915
//! shape) with *explicit* curve parameters rather than a named-curve OID,
//! matching the historical 279-byte secp256k1 encoding:
//!
//! ```text
//! ECPrivateKey ::= SEQUENCE {
//!     version      INTEGER (1),
//!     privateKey   OCTET STRING (32 bytes),
//!     parameters   [0] EXPLICIT SpecifiedECDomain,
//!     publicKey    [1] EXPLICIT BIT STRING (uncompressed point)
//! }
//! ```
//!
//! Tag and length encoding is owned entirely by the `der` crate; this module
//! only declares the structure and the fixed secp256k1 domain constants.

use der::asn1::{BitStringRef, ObjectIdentifier, OctetStringRef, UintRef};
use der::{Encode, Sequence, SliceWriter};
use hex_literal::hex;
use zeroize::Zeroizing;

use crate::error::{EncodingError, Result};
use crate::key::KeyPair;

/// X9.62 prime-field identifier
const PRIME_FIELD_OID: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.10045.1.1");

/// Field prime p = 2^256 - 2^32 - 977
const FIELD_PRIME: [u8; 32] =
    hex!("fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f");

/// Coefficient a of y^2 = x^3 + ax + b
const CURVE_A: [u8; 1] = hex!("00");

/// Coefficient b of y^2 = x^3 + ax + b
const CURVE_B: [u8; 1] = hex!("07");

/// Base point G, uncompressed SEC1
const GENERATOR: [u8; 65] = hex!(
    "0479be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798"
    "483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8"
);

/// Order n of the base point
pub(crate) const CURVE_ORDER: [u8; 32] =
    hex!("fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141");

/// X9.62 field description: prime-field OID plus the prime itself
#[derive(Sequence)]
struct FieldId<'a> {
    field_type: ObjectIdentifier,
    prime: UintRef<'a>,
}

/// Short-Weierstrass coefficients as octet strings
#[derive(Sequence)]
struct CurveCoefficients<'a> {
    a: OctetStringRef<'a>,
    b: OctetStringRef<'a>,
}

/// SpecifiedECDomain: the full explicit description of secp256k1
#[derive(Sequence)]
struct SpecifiedDomain<'a> {
    version: u8,
    field: FieldId<'a>,
    curve: CurveCoefficients<'a>,
    base: OctetStringRef<'a>,
    order: UintRef<'a>,
    cofactor: u8,
}

#[derive(Sequence)]
struct EcPrivateKeyDer<'a> {
    version: u8,
    private_key: OctetStringRef<'a>,
    #[asn1(context_specific = "0", tag_mode = "EXPLICIT")]
    parameters: SpecifiedDomain<'a>,
    #[asn1(context_specific = "1", tag_mode = "EXPLICIT")]
    public_key: BitStringRef<'a>,
}

fn size_err(err: der::Error) -> EncodingError {
    EncodingError::Size(err.to_string())
}

fn specified_domain() -> std::result::Result<SpecifiedDomain<'static>, EncodingError> {
    Ok(SpecifiedDomain {
        version: 1,
        field: FieldId {
            field_type: PRIME_FIELD_OID,
            prime: UintRef::new(&FIELD_PRIME).map_err(size_err)?,
        },
        curve: CurveCoefficients {
            a: OctetStringRef::new(&CURVE_A).map_err(size_err)?,
            b: OctetStringRef::new(&CURVE_B).map_err(size_err)?,
        },
        base: OctetStringRef::new(&GENERATOR).map_err(size_err)?,
        order: UintRef::new(&CURVE_ORDER).map_err(size_err)?,
        cofactor: 1,
    })
}

/// Encode a validated key pair as a DER `ECPrivateKey` structure
///
/// Two-pass: the encoded length is computed first, then the structure is
/// written into a buffer of exactly that size. A mismatch between the two
/// passes indicates an internal inconsistency and is fatal.
pub fn encode_key_pair(pair: &KeyPair) -> Result<Vec<u8>> {
    let secret = Zeroizing::new(pair.secret_bytes());
    let public = pair.public_uncompressed();

    let key = EcPrivateKeyDer {
        version: 1,
        private_key: OctetStringRef::new(secret.as_ref()).map_err(size_err)?,
        parameters: specified_domain()?,
        public_key: BitStringRef::from_bytes(&public).map_err(size_err)?,
    };

    let expected = u32::from(key.encoded_len().map_err(size_err)?) as usize;
    if expected == 0 {
        return Err(EncodingError::Size("encoder reported zero length".into()).into());
    }

    let mut buf = vec![0u8; expected];
    let actual = {
        let mut writer = SliceWriter::new(&mut buf);
        key.encode(&mut writer)
            .map_err(|e| EncodingError::Write(e.to_string()))?;
        writer
            .finish()
            .map_err(|e| EncodingError::Write(e.to_string()))?
            .len()
    };
    if actual != expected {
        return Err(EncodingError::LengthMismatch { expected, actual }.into());
    }

    Ok(buf)
}
