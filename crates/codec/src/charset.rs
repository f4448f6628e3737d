use serde::{Deserialize, Serialize};

/// The charset used by every text conversion.
pub const TEXT_CHARSET: Charset = Charset::Latin1;

/// Byte written for an unmappable character under [`UnmappablePolicy::Replace`].
pub const REPLACEMENT_BYTE: u8 = b'?';

/// Single-byte character encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Charset {
    /// ISO-8859-1: byte `n` is code point `U+00nn`.
    Latin1,
}

impl Charset {
    /// Canonical charset name
    pub fn name(self) -> &'static str {
        match self {
            Charset::Latin1 => "ISO-8859-1",
        }
    }

    pub fn encode_char(self, c: char) -> Option<u8> {
        match self {
            Charset::Latin1 => u8::try_from(u32::from(c)).ok(),
        }
    }

    pub fn decode_byte(self, b: u8) -> char {
        match self {
            Charset::Latin1 => char::from(b),
        }
    }
}

/// What to do with a character the charset cannot represent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnmappablePolicy {
    /// Substitute [`REPLACEMENT_BYTE`]
    #[default]
    Replace,
    /// Fail the conversion
    Strict,
}
