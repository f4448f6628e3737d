//! Byte sequence conversions: hex strings, big-endian `i64` and Latin-1 text.
//!
//! Every conversion is a pure function. The free functions in [`hex`],
//! [`long`] and [`text`] take plain borrowed input; [`ByteCodec`] wraps them
//! for hosts that pass nullable values and reports absence with `None`.

pub mod charset;
pub mod codec;
pub mod hex;
pub mod long;
pub mod settings;
pub mod text;

pub use bytecodec_common::{CodecError, Result};
pub use charset::{Charset, UnmappablePolicy, REPLACEMENT_BYTE, TEXT_CHARSET};
pub use codec::ByteCodec;
pub use long::LONG_BYTES;
pub use settings::{CodecSettings, TextSettings};
