//! Text <-> byte conversions in the fixed single-byte charset.

use crate::charset::{UnmappablePolicy, REPLACEMENT_BYTE, TEXT_CHARSET};
use bytecodec_common::{CodecError, Result};
use tracing::debug;

/// Encodes `text` one byte per character. Characters outside the charset are
/// replaced or rejected according to `policy`.
pub fn text_to_bytes(text: &str, policy: UnmappablePolicy) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(text.len());

    for (position, character) in text.chars().enumerate() {
        match TEXT_CHARSET.encode_char(character) {
            Some(b) => out.push(b),
            None => match policy {
                UnmappablePolicy::Replace => {
                    debug!(?character, position, "Replacing unmappable character");
                    out.push(REPLACEMENT_BYTE);
                }
                UnmappablePolicy::Strict => {
                    return Err(CodecError::Unmappable { character, position });
                }
            },
        }
    }

    Ok(out)
}

/// Decodes bytes in the same charset. Total: every byte has a character.
pub fn bytes_to_text(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| TEXT_CHARSET.decode_byte(b)).collect()
}
