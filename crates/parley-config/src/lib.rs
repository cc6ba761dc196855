//! Parley configuration system.
//!
//! TOML-based configuration with validation. Every section has defaults
//! matching the skill's shipped behaviour, so partial configs work out of
//! the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use parley_config::load_config;
//!
//! let config = load_config(None).expect("failed to load config");
//! println!("listening on {}", config.server.bind_addr());
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{
    ConversationConfig, InferenceConfig, LogFormat, LoggingConfig, ParleyConfig, ServerConfig,
    SkillConfig, SpeechConfig, CONFIG_SCHEMA_VERSION,
};

use parley_common::ConfigError;
use std::path::Path;

/// Load and validate the configuration.
///
/// An explicit path (CLI flag or `PARLEY_CONFIG`) must exist. Without one,
/// the platform default is used and created from the template if missing.
pub fn load_config(cli_path: Option<&Path>) -> Result<ParleyConfig, ConfigError> {
    load_config_with(cli_path, |_| {})
}

/// Load the configuration, apply command-line overrides, then validate the
/// merged result.
pub fn load_config_with(
    cli_path: Option<&Path>,
    overrides: impl FnOnce(&mut ParleyConfig),
) -> Result<ParleyConfig, ConfigError> {
    let mut config = match toml_loader::explicit_config_path(cli_path) {
        Some(path) => toml_loader::load_from_path(&path)?,
        None => toml_loader::load_default()?,
    };

    overrides(&mut config);
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &ParleyConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
