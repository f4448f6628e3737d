//! Shared ambient pieces for the byte codec crates: the error taxonomy,
//! layered configuration loading and tracing setup.

pub mod error;
pub mod utils;

pub use error::{CodecError, Result};
pub use utils::logging::{init_logging, init_test_logging, LogFormat, LoggingConfig};
