use anyhow::{Context, Result};
use ::config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::path::Path;

/// Prefix for environment overrides, e.g. `BYTECODEC__TEXT__UNMAPPABLE=strict`.
pub const ENV_PREFIX: &str = "BYTECODEC";

/// Loads configuration from a file into a struct, layering environment overrides on top.
/// Supports TOML, YAML, JSON, etc. based on file extension.
pub fn load_config<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<T> {
    let path_str = path.as_ref().to_str().context("Invalid config path")?;

    let settings = Config::builder()
        .add_source(File::with_name(path_str))
        .add_source(env_source())
        .build()
        .context("Failed to build configuration")?;

    settings.try_deserialize::<T>().context("Failed to deserialize configuration")
}

/// Loads configuration from the environment alone.
pub fn load_env_config<T: DeserializeOwned>() -> Result<T> {
    let settings = Config::builder()
        .add_source(env_source())
        .build()
        .context("Failed to build configuration")?;

    settings.try_deserialize::<T>().context("Failed to deserialize configuration")
}

fn env_source() -> Environment {
    Environment::with_prefix(ENV_PREFIX).separator("__")
}
