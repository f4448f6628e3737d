use crate::charset::UnmappablePolicy;
use crate::long::LONG_BYTES;
use crate::settings::CodecSettings;
use crate::{hex, long, text};
use bytecodec_common::Result;

/// Entry point for hosts that pass nullable arguments.
///
/// `None` in means `None` out for the optional conversions. The only hard
/// failures are a short buffer in [`ByteCodec::bytes_to_long`] and, under
/// [`UnmappablePolicy::Strict`], an unmappable character in
/// [`ByteCodec::text_to_bytes`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ByteCodec {
    unmappable: UnmappablePolicy,
}

impl ByteCodec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_unmappable_policy(mut self, policy: UnmappablePolicy) -> Self {
        self.unmappable = policy;
        self
    }

    pub fn from_settings(settings: &CodecSettings) -> Self {
        Self::new().with_unmappable_policy(settings.text.unmappable)
    }

    pub fn unmappable_policy(&self) -> UnmappablePolicy {
        self.unmappable
    }

    pub fn hex_to_bytes(&self, text: Option<&str>) -> Option<Vec<u8>> {
        text.and_then(hex::hex_to_bytes)
    }

    pub fn bytes_to_hex(&self, bytes: Option<&[u8]>) -> Option<String> {
        bytes.and_then(hex::bytes_to_hex)
    }

    pub fn long_to_bytes(&self, value: i64) -> [u8; LONG_BYTES] {
        long::long_to_bytes(value)
    }

    pub fn bytes_to_long(&self, bytes: &[u8]) -> Result<i64> {
        long::bytes_to_long(bytes)
    }

    pub fn text_to_bytes(&self, text: Option<&str>) -> Result<Option<Vec<u8>>> {
        text.map(|t| text::text_to_bytes(t, self.unmappable)).transpose()
    }

    pub fn bytes_to_text(&self, bytes: Option<&[u8]>) -> Option<String> {
        bytes.map(text::bytes_to_text)
    }
}
