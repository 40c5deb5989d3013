// ─── Account Identifiers ─────────────────────────────────────────────────────

/// Length of a decoded contract account identifier in bytes.
pub const ACCOUNT_ID_LEN: usize = 32;

/// Length of a key-space tag in bytes.
pub const KEY_TAG_LEN: usize = 1;

/// Length of a storage prefix: one tag byte followed by the account identifier.
pub const STORAGE_PREFIX_LEN: usize = KEY_TAG_LEN + ACCOUNT_ID_LEN;

// ─── Addressing ──────────────────────────────────────────────────────────────

/// Default bech32 human-readable part for account addresses.
pub const DEFAULT_BECH32_PREFIX: &str = "sei";
