use crate::charset::UnmappablePolicy;
use bytecodec_common::utils::config::{load_config, load_env_config};
use bytecodec_common::{init_logging, LoggingConfig, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Text conversion settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextSettings {
    #[serde(default)]
    pub unmappable: UnmappablePolicy,
}

/// Codec settings as read from a settings file and `BYTECODEC__*` overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CodecSettings {
    #[serde(default)]
    pub text: TextSettings,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl CodecSettings {
    /// Load settings from a file, with environment overrides applied.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let settings: Self = load_config(path.as_ref())?;
        info!(
            path = %path.as_ref().display(),
            unmappable = ?settings.text.unmappable,
            "Loaded codec settings"
        );
        Ok(settings)
    }

    /// Load settings from the environment alone.
    pub fn from_env() -> Result<Self> {
        Ok(load_env_config()?)
    }

    /// Install the global tracing subscriber described by `logging`.
    /// Hosts that already own a subscriber should skip this.
    pub fn init_logging(&self) -> Result<()> {
        init_logging(&self.logging)
    }
}
