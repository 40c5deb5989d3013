use thiserror::Error;

/// Errors raised while turning address text into a contract account.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error("empty address")]
    Empty,

    #[error("invalid bech32 encoding: {reason}")]
    Encoding { reason: String },

    #[error("expected bech32 checksum, got bech32m")]
    WrongVariant,

    #[error("address prefix mismatch: expected {expected}, got {actual}")]
    PrefixMismatch { expected: String, actual: String },

    #[error("invalid account length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
}

/// Errors raised when raw bytes do not fit the tagged key-space.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeySpaceError {
    #[error("unknown key tag: 0x{0:02x}")]
    UnknownTag(u8),

    #[error("invalid prefix length: expected {expected}, got {actual}")]
    InvalidPrefixLength { expected: usize, actual: usize },

    #[error("invalid prefix hex: {reason}")]
    InvalidHex { reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_mismatch_display() {
        let err = AddressError::PrefixMismatch {
            expected: "sei".to_string(),
            actual: "cosmos".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("sei"));
        assert!(msg.contains("cosmos"));
    }

    #[test]
    fn test_unknown_tag_display() {
        assert_eq!(
            KeySpaceError::UnknownTag(0xab).to_string(),
            "unknown key tag: 0xab"
        );
    }
}
