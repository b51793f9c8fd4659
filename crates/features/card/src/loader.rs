use crate::error::{ConfigErrorExt, Result};
use crate::raw::RawConfig;
use config::{Config, Environment, File};
use std::path::Path;
use tracing::info;

/// Prefix of environment variables overriding file values.
pub const ENV_PREFIX: &str = "PAYCARD";

/// Loads a raw card configuration from a file with environment overrides.
///
/// This function implements a layered configuration strategy:
/// 1. **Base File**: JSON, TOML or YAML, picked by the file extension.
/// 2. **Environment Overrides**: variables prefixed with `PAYCARD__`, nested keys separated by
///    double underscores (e.g., `PAYCARD__CARD__HOLDER_NAME_REQUIRED=true` maps to
///    `card.holderNameRequired`). Booleans and numbers are parsed from their text form.
///
/// # Errors
/// Returns [`crate::ConfigError::Source`] if the file is missing, has an unsupported
/// extension or cannot be deserialized into a map.
pub fn load_raw_config(path: impl AsRef<Path>) -> Result<RawConfig> {
    let path = path.as_ref();

    let builder = Config::builder().add_source(File::from(path).required(true)).add_source(
        Environment::with_prefix(ENV_PREFIX)
            .separator("__")
            .convert_case(config::Case::Camel)
            .try_parsing(true),
    );

    info!("Loading card configuration from {}", path.display());

    let raw = builder
        .build()
        .context("Failed to build card configuration")?
        .try_deserialize::<RawConfig>()
        .context("Failed to deserialize card configuration")?;

    Ok(raw)
}
