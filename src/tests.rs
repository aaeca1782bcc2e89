//! End-to-end tests for the conversion pipeline

use std::io::Cursor;

use crate::error::{ConvertError, KeyError};
use crate::{pipeline, KeyEngine, DER_KEY_SIZE, PRIVATE_KEY_SIZE};

/// Reference DER output for the scalar 1, produced by OpenSSL's
/// i2d_ECPrivateKey with explicit secp256k1 parameters. The public point
/// equals the generator G.
const SCALAR_ONE_DER_HEX: &str = concat!(
    "308201130201010420",
    "0000000000000000000000000000000000000000000000000000000000000001",
    "a081a53081a2020101302c06072a8648ce3d0101022100",
    "fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f",
    "30060401000401070441",
    "0479be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798",
    "483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8",
    "022100",
    "fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141",
    "020101",
    "a144034200",
    "0479be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798",
    "483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8",
);

fn scalar(last_byte: u8) -> [u8; PRIVATE_KEY_SIZE] {
    let mut raw = [0u8; PRIVATE_KEY_SIZE];
    raw[PRIVATE_KEY_SIZE - 1] = last_byte;
    raw
}

fn convert(input: &[u8]) -> crate::Result<Vec<u8>> {
    let mut reader = Cursor::new(input.to_vec());
    let mut output = Vec::new();
    pipeline::run(&mut reader, &mut output)?;
    Ok(output)
}

#[test]
fn scalar_one_matches_reference_der() {
    let output = convert(&scalar(1)).unwrap();
    assert_eq!(hex::encode(&output), SCALAR_ONE_DER_HEX);
    assert_eq!(output.len(), DER_KEY_SIZE);
}

#[test]
fn output_is_deterministic() {
    let input = scalar(0xab);
    let first = convert(&input).unwrap();
    let second = convert(&input).unwrap();
    assert_eq!(first, second);
}

#[test]
fn byte_layout_is_stable_across_keys() {
    let reference = hex::decode(SCALAR_ONE_DER_HEX).unwrap();
    let input = scalar(0x42);
    let output = convert(&input).unwrap();

    // Structural boilerplate is identical for every key on this curve
    assert_eq!(output[..9], reference[..9]);
    assert_eq!(output[41..214], reference[41..214]);

    // Private scalar at offsets 9..=40
    assert_eq!(&output[9..41], input);

    // Uncompressed public point fills the trailing 65 bytes
    let engine = KeyEngine::new();
    let secret = engine.load_secret(&input).unwrap();
    let pair = engine.derive_key_pair(secret);
    assert_eq!(&output[214..], pair.public_uncompressed());
}

#[test]
fn empty_input_fails_with_no_output() {
    let mut reader = Cursor::new(Vec::new());
    let mut output = Vec::new();
    let result = pipeline::run(&mut reader, &mut output);
    assert!(matches!(
        result,
        Err(ConvertError::Key(KeyError::InsufficientInput {
            expected: PRIVATE_KEY_SIZE,
            actual: 0,
        }))
    ));
    assert!(output.is_empty());
}

#[test]
fn short_input_fails_with_no_output() {
    let mut reader = Cursor::new(vec![0x11u8; 31]);
    let mut output = Vec::new();
    let result = pipeline::run(&mut reader, &mut output);
    assert!(matches!(
        result,
        Err(ConvertError::Key(KeyError::InsufficientInput {
            expected: PRIVATE_KEY_SIZE,
            actual: 31,
        }))
    ));
    assert!(output.is_empty());
}

#[test]
fn zero_scalar_fails_with_no_output() {
    let mut reader = Cursor::new(vec![0u8; PRIVATE_KEY_SIZE]);
    let mut output = Vec::new();
    let result = pipeline::run(&mut reader, &mut output);
    assert!(matches!(
        result,
        Err(ConvertError::Key(KeyError::InvalidScalar))
    ));
    assert!(output.is_empty());
}

#[test]
fn scalar_at_or_above_curve_order_fails() {
    let order =
        hex::decode("fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141").unwrap();
    for input in [order.clone(), vec![0xffu8; PRIVATE_KEY_SIZE]] {
        let mut reader = Cursor::new(input);
        let mut output = Vec::new();
        let result = pipeline::run(&mut reader, &mut output);
        assert!(matches!(
            result,
            Err(ConvertError::Key(KeyError::InvalidScalar))
        ));
        assert!(output.is_empty());
    }
}

#[test]
fn trailing_input_is_ignored() {
    let mut input = scalar(0x05).to_vec();
    input.extend_from_slice(&[0xee; 8]);
    let mut reader = Cursor::new(input);
    let mut output = Vec::new();
    pipeline::run(&mut reader, &mut output).unwrap();

    assert_eq!(output.len(), DER_KEY_SIZE);
    assert_eq!(&output[9..41], scalar(0x05));
    // Only the first 32 bytes were consumed
    assert_eq!(reader.position(), PRIVATE_KEY_SIZE as u64);
}

#[test]
fn errors_render_as_one_diagnostic_line() {
    let err = convert(&[0x11; 31]).unwrap_err();
    let rendered = format!("{:#}", anyhow::Error::new(err));
    assert!(!rendered.contains('\n'));
    assert!(rendered.contains("requires 32 bytes of input, got 31"));
}

#[test]
fn largest_valid_scalar_converts() {
    // n - 1, the largest scalar the curve accepts
    let input =
        hex::decode("fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364140").unwrap();
    let output = convert(&input).unwrap();
    assert_eq!(output.len(), DER_KEY_SIZE);
    assert_eq!(&output[9..41], input.as_slice());
}
