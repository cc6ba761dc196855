//! Subscriber installation.

use parley_config::{LogFormat, LoggingConfig};
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset: the CLI flag, else the config level.
pub fn default_directive<'a>(cli_level: Option<&'a str>, logging: &'a LoggingConfig) -> &'a str {
    cli_level.unwrap_or(&logging.level)
}

pub fn init(cli_level: Option<&str>, logging: &LoggingConfig) {
    let directive = default_directive(cli_level, logging);
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match logging.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
}
