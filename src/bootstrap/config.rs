//! # Configuration loader
//!
//! Reads the TOML file and maps it onto [`AppConfig`]. Pure data loading: no
//! validation and no defaults. Whatever is in the file is accepted as a fact;
//! defaults are applied by [`wiring`](super::wiring).

use anyhow::Context;
use lm_core::config::AppConfig;
use std::path::PathBuf;

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid TOML, or a
/// section has the wrong shape (for example `[sharing] roots` not being a
/// list of `{ name, path }` tables).
pub fn load_config(config_path: PathBuf) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}
