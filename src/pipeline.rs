//! The six-stage conversion pipeline
//!
//! Strict forward flow: read, load, derive, validate, encode, write. Any
//! stage failure aborts the run; nothing is written on a failure path.

use std::io::{ErrorKind, Read, Write};

use zeroize::Zeroizing;

use crate::encoder;
use crate::error::{KeyError, Result};
use crate::key::KeyEngine;
use crate::PRIVATE_KEY_SIZE;

/// Read exactly 32 bytes from the reader
///
/// Trailing input beyond the 32 bytes is left unread. The returned buffer
/// is zeroed when dropped.
pub fn read_private_key<R: Read>(reader: &mut R) -> Result<Zeroizing<[u8; PRIVATE_KEY_SIZE]>> {
    let mut buf = Zeroizing::new([0u8; PRIVATE_KEY_SIZE]);
    let mut filled = 0;
    while filled < PRIVATE_KEY_SIZE {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => {
                return Err(KeyError::InsufficientInput {
                    expected: PRIVATE_KEY_SIZE,
                    actual: filled,
                }
                .into())
            }
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }
    Ok(buf)
}

/// Write the DER buffer verbatim, no framing, and flush
pub fn write_der<W: Write>(writer: &mut W, der: &[u8]) -> Result<()> {
    writer.write_all(der)?;
    writer.flush()?;
    Ok(())
}

/// Run the full conversion: 32 raw bytes in, DER-encoded key pair out
pub fn run<R: Read, W: Write>(reader: &mut R, writer: &mut W) -> Result<()> {
    let raw = read_private_key(reader)?;
    let engine = KeyEngine::new();
    let secret = engine.load_secret(&raw)?;
    let pair = engine.derive_key_pair(secret);
    engine.validate(&pair)?;
    let der = encoder::encode_key_pair(&pair)?;
    write_der(writer, &der)
}
