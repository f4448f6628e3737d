//! Hex string <-> byte conversions.
//!
//! Input is case-insensitive and may have odd length, in which case the first
//! digit is the low nibble of byte 0. Output is uppercase with at most one
//! leading `'0'` dropped, so that decoding it reproduces the original bytes.

use tracing::debug;

/// Decodes a hex string. Returns `None` for blank input or anything that is
/// not purely hex digits.
pub fn hex_to_bytes(text: &str) -> Option<Vec<u8>> {
    if text.trim().is_empty() {
        debug!("Blank hex input, no result");
        return None;
    }

    if !is_hex(text) {
        debug!(len = text.len(), "Input is not a hex string, no result");
        return None;
    }

    let decoded = if text.len() % 2 == 1 {
        ::hex::decode(format!("0{}", text))
    } else {
        ::hex::decode(text)
    };

    // Validation above leaves nothing for the decoder to reject.
    decoded.ok()
}

/// Encodes bytes as uppercase hex. Returns `None` for empty input.
pub fn bytes_to_hex(bytes: &[u8]) -> Option<String> {
    if bytes.is_empty() {
        return None;
    }

    let mut encoded = ::hex::encode_upper(bytes);
    if encoded.starts_with('0') {
        encoded.remove(0);
    }
    Some(encoded)
}

fn is_hex(text: &str) -> bool {
    text.bytes().all(|b| b.is_ascii_hexdigit())
}
