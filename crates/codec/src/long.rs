//! Fixed-width big-endian `i64` <-> byte conversions.

use bytecodec_common::{CodecError, Result};
use tracing::warn;

/// Width of an encoded `i64`.
pub const LONG_BYTES: usize = std::mem::size_of::<i64>();

/// Big-endian two's-complement encoding of `value`.
pub fn long_to_bytes(value: i64) -> [u8; LONG_BYTES] {
    value.to_be_bytes()
}

/// Reads the first eight bytes as a big-endian `i64`. Trailing bytes are
/// ignored; fewer than eight is an error, never zero-padded.
pub fn bytes_to_long(bytes: &[u8]) -> Result<i64> {
    match bytes.get(..LONG_BYTES).and_then(|head| <[u8; LONG_BYTES]>::try_from(head).ok()) {
        Some(head) => Ok(i64::from_be_bytes(head)),
        None => {
            warn!(available = bytes.len(), "Too few bytes for a long");
            Err(CodecError::InsufficientBytes {
                needed: LONG_BYTES,
                available: bytes.len(),
            })
        }
    }
}
