use bech32::{FromBase32, ToBase32, Variant};

use dex_types::constants::{ACCOUNT_ID_LEN, DEFAULT_BECH32_PREFIX};
use dex_types::error::AddressError;
use dex_types::primitives::{ContractAddress, RawAccountId};

/// Bech32 codec for contract account addresses under one human-readable part.
///
/// Only the original bech32 checksum is accepted. The decoded payload must be
/// exactly [`ACCOUNT_ID_LEN`] bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bech32Codec {
    hrp: String,
}

impl Bech32Codec {
    pub fn new(hrp: impl Into<String>) -> Self {
        Self {
            hrp: hrp.into().to_ascii_lowercase(),
        }
    }

    pub fn hrp(&self) -> &str {
        &self.hrp
    }

    /// Decode address text into a contract account.
    pub fn decode(&self, address: &str) -> Result<ContractAddress, AddressError> {
        if address.is_empty() {
            return Err(AddressError::Empty);
        }
        let (hrp, data, variant) =
            bech32::decode(address).map_err(|e| AddressError::Encoding {
                reason: e.to_string(),
            })?;
        if variant != Variant::Bech32 {
            return Err(AddressError::WrongVariant);
        }
        if hrp != self.hrp {
            return Err(AddressError::PrefixMismatch {
                expected: self.hrp.clone(),
                actual: hrp,
            });
        }
        let bytes = Vec::<u8>::from_base32(&data).map_err(|e| AddressError::Encoding {
            reason: e.to_string(),
        })?;
        let id: RawAccountId =
            bytes
                .as_slice()
                .try_into()
                .map_err(|_| AddressError::InvalidLength {
                    expected: ACCOUNT_ID_LEN,
                    actual: bytes.len(),
                })?;
        Ok(ContractAddress::from_bytes(id))
    }

    /// Encode a contract account as lowercase bech32 text.
    pub fn encode(&self, account: &ContractAddress) -> Result<String, AddressError> {
        bech32::encode(&self.hrp, account.as_bytes().to_base32(), Variant::Bech32).map_err(|e| {
            AddressError::Encoding {
                reason: e.to_string(),
            }
        })
    }
}

impl Default for Bech32Codec {
    fn default() -> Self {
        Self::new(DEFAULT_BECH32_PREFIX)
    }
}
