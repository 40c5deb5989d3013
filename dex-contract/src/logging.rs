use tracing_subscriber::EnvFilter;

use crate::error::WhitelistError;

/// Parse `level` as an `EnvFilter` directive string without reading `RUST_LOG`.
pub fn env_filter(level: &str) -> Result<EnvFilter, WhitelistError> {
    EnvFilter::try_new(level).map_err(|e| WhitelistError::ConfigError {
        reason: format!("invalid log level '{}': {}", level, e),
    })
}

/// Install a global fmt subscriber.
///
/// `RUST_LOG` wins when set; otherwise `level` is used as the filter.
pub fn init(level: &str) -> Result<(), WhitelistError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => env_filter(level)?,
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| WhitelistError::ConfigError {
            reason: format!("failed to install tracing subscriber: {}", e),
        })
}
