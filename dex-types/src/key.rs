use std::fmt;

use crate::error::KeySpaceError;

/// Leading byte of every key in the wasm store.
///
/// Each variant reserves a disjoint tag, so keys belonging to different kinds
/// of record never share a prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum KeyTag {
    /// Uploaded code, keyed by code id.
    Code = 0x01,
    /// Contract metadata, keyed by contract account.
    ContractInfo = 0x02,
    /// Contract-owned state, keyed by contract account and the contract's own key.
    ContractStore = 0x03,
    /// Id sequences.
    Sequence = 0x04,
    /// Code history entries per contract.
    ContractCodeHistory = 0x05,
    /// Secondary index from code id to contracts.
    ContractByCodeId = 0x06,
    /// Pinned code index.
    PinnedCode = 0x07,
    /// Per-block transaction counter.
    TxCounter = 0x08,
}

impl KeyTag {
    /// Every tag in the key-space, in byte order.
    pub const ALL: [KeyTag; 8] = [
        KeyTag::Code,
        KeyTag::ContractInfo,
        KeyTag::ContractStore,
        KeyTag::Sequence,
        KeyTag::ContractCodeHistory,
        KeyTag::ContractByCodeId,
        KeyTag::PinnedCode,
        KeyTag::TxCounter,
    ];

    pub const fn as_byte(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            KeyTag::Code => "code",
            KeyTag::ContractInfo => "contract_info",
            KeyTag::ContractStore => "contract_store",
            KeyTag::Sequence => "sequence",
            KeyTag::ContractCodeHistory => "contract_code_history",
            KeyTag::ContractByCodeId => "contract_by_code_id",
            KeyTag::PinnedCode => "pinned_code",
            KeyTag::TxCounter => "tx_counter",
        }
    }
}

impl TryFrom<u8> for KeyTag {
    type Error = KeySpaceError;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        KeyTag::ALL
            .into_iter()
            .find(|tag| tag.as_byte() == byte)
            .ok_or(KeySpaceError::UnknownTag(byte))
    }
}

impl fmt::Display for KeyTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
