use dex_types::error::AddressError;
use thiserror::Error;

/// Errors that can occur while building or applying a contract whitelist.
#[derive(Debug, Error)]
pub enum WhitelistError {
    #[error("invalid address at index {index} ({address}): {source}")]
    InvalidAddress {
        index: usize,
        address: String,
        #[source]
        source: AddressError,
    },

    #[error("key not whitelisted: {key}")]
    NotWhitelisted { key: String },

    #[error("config error: {reason}")]
    ConfigError { reason: String },

    #[error("storage error: {0}")]
    StorageError(#[from] dex_storage::error::StorageError),

    #[error("io error: {0}")]
    IoError(#[from] std::io::Error),
}
