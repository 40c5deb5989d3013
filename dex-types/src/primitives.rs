use std::fmt;
use std::io;
use std::str::FromStr;

use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::constants::{ACCOUNT_ID_LEN, STORAGE_PREFIX_LEN};
use crate::error::KeySpaceError;
use crate::key::KeyTag;

/// 32-byte account identifier carried by a bech32 contract address.
pub type RawAccountId = [u8; ACCOUNT_ID_LEN];

/// A decoded contract account.
///
/// Holds only the raw identifier; the human-readable form is produced by the
/// address codec, which owns the bech32 prefix.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    BorshSerialize,
    BorshDeserialize,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct ContractAddress(RawAccountId);

impl ContractAddress {
    pub const fn from_bytes(id: RawAccountId) -> Self {
        Self(id)
    }

    pub fn as_bytes(&self) -> &RawAccountId {
        &self.0
    }
}

impl From<RawAccountId> for ContractAddress {
    fn from(id: RawAccountId) -> Self {
        Self(id)
    }
}

impl AsRef<[u8]> for ContractAddress {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Leading segment of every key in one record namespace: `tag || account_id`.
///
/// Distinct accounts yield distinct prefixes under the same tag, and no prefix
/// is a prefix of another, so per-contract scans never overlap.
///
/// Every value carries a known [`KeyTag`] in its first byte; all constructors,
/// including borsh and serde decoding, reject unknown tags.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StoragePrefix {
    bytes: [u8; STORAGE_PREFIX_LEN],
    tag: KeyTag,
}

impl StoragePrefix {
    pub fn new(tag: KeyTag, account: &ContractAddress) -> Self {
        let mut bytes = [0u8; STORAGE_PREFIX_LEN];
        bytes[0] = tag.as_byte();
        bytes[1..].copy_from_slice(account.as_bytes());
        Self { bytes, tag }
    }

    pub fn as_bytes(&self) -> &[u8; STORAGE_PREFIX_LEN] {
        &self.bytes
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.bytes.to_vec()
    }

    pub fn tag(&self) -> KeyTag {
        self.tag
    }

    pub fn account(&self) -> ContractAddress {
        let mut id = [0u8; ACCOUNT_ID_LEN];
        id.copy_from_slice(&self.bytes[1..]);
        ContractAddress::from_bytes(id)
    }

    /// Whether `key` lies in this prefix's namespace.
    pub fn is_prefix_of(&self, key: &[u8]) -> bool {
        key.starts_with(&self.bytes)
    }

    /// Exclusive upper bound of this prefix's key range.
    ///
    /// Every key starting with the prefix sorts strictly below the returned
    /// bound. `None` means the range is unbounded above, which only happens for
    /// an all-`0xff` byte string.
    pub fn range_end(&self) -> Option<Vec<u8>> {
        let mut end = self.bytes.to_vec();
        while let Some(last) = end.last_mut() {
            if *last < u8::MAX {
                *last += 1;
                return Some(end);
            }
            end.pop();
        }
        None
    }

    /// Build a full storage key: the prefix followed by `suffix`.
    pub fn join(&self, suffix: &[u8]) -> Vec<u8> {
        let mut key = Vec::with_capacity(STORAGE_PREFIX_LEN + suffix.len());
        key.extend_from_slice(&self.bytes);
        key.extend_from_slice(suffix);
        key
    }
}

impl TryFrom<&[u8]> for StoragePrefix {
    type Error = KeySpaceError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let bytes: [u8; STORAGE_PREFIX_LEN] =
            bytes
                .try_into()
                .map_err(|_| KeySpaceError::InvalidPrefixLength {
                    expected: STORAGE_PREFIX_LEN,
                    actual: bytes.len(),
                })?;
        let tag = KeyTag::try_from(bytes[0])?;
        Ok(Self { bytes, tag })
    }
}

impl AsRef<[u8]> for StoragePrefix {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Display for StoragePrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.bytes))
    }
}

impl fmt::Debug for StoragePrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StoragePrefix({})", self)
    }
}

impl FromStr for StoragePrefix {
    type Err = KeySpaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = hex::decode(s).map_err(|e| KeySpaceError::InvalidHex {
            reason: e.to_string(),
        })?;
        Self::try_from(bytes.as_slice())
    }
}

/// Encoded as the raw prefix bytes, with no length header.
impl BorshSerialize for StoragePrefix {
    fn serialize<W: io::Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(&self.bytes)
    }
}

impl BorshDeserialize for StoragePrefix {
    fn deserialize_reader<R: io::Read>(reader: &mut R) -> io::Result<Self> {
        let bytes: [u8; STORAGE_PREFIX_LEN] = BorshDeserialize::deserialize_reader(reader)?;
        Self::try_from(bytes.as_slice())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))
    }
}

/// Serialized as a lowercase hex string.
impl Serialize for StoragePrefix {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for StoragePrefix {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = <String as Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
