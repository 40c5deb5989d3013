use dex_types::key::KeyTag;
use dex_types::primitives::{ContractAddress, StoragePrefix};

use crate::address::Bech32Codec;
use crate::error::WhitelistError;

/// Prefix of a contract's namespace under `tag`.
pub fn key_prefix(tag: KeyTag, account: &ContractAddress) -> StoragePrefix {
    StoragePrefix::new(tag, account)
}

/// Prefix of every key holding a contract's own state: `0x03 || account_id`.
pub fn contract_store_prefix(account: &ContractAddress) -> StoragePrefix {
    key_prefix(KeyTag::ContractStore, account)
}

/// Full wasm-store key for `suffix` inside a contract's state namespace.
pub fn contract_store_key(account: &ContractAddress, suffix: &[u8]) -> Vec<u8> {
    contract_store_prefix(account).join(suffix)
}

/// Derive the contract-store prefix for each whitelisted address.
///
/// Output index `i` belongs to input index `i`; duplicates are kept. The first
/// address that fails to decode aborts the whole batch.
pub fn derive_whitelist_prefixes<S: AsRef<str>>(
    codec: &Bech32Codec,
    addresses: &[S],
) -> Result<Vec<StoragePrefix>, WhitelistError> {
    addresses
        .iter()
        .enumerate()
        .map(|(index, address)| {
            let address = address.as_ref();
            let account = codec.decode(address).map_err(|source| {
                tracing::warn!(index, address, error = %source, "rejecting whitelist address");
                WhitelistError::InvalidAddress {
                    index,
                    address: address.to_string(),
                    source,
                }
            })?;
            let prefix = contract_store_prefix(&account);
            tracing::debug!(index, address, prefix = %prefix, "derived contract store prefix");
            Ok(prefix)
        })
        .collect()
}

/// Whether `key` starts with any prefix in `whitelist`.
pub fn is_whitelisted(key: &[u8], whitelist: &[StoragePrefix]) -> bool {
    whitelist.iter().any(|prefix| prefix.is_prefix_of(key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use dex_types::error::AddressError;
    use proptest::prelude::*;

    const CONTRACT: &str = "sei14hj2tavq8fpesdwxxcu44rty3hh90vhujrvcmstl4zr3txmfvw9sh9m79m";
    const ONES: &str = "sei1qyqszqgpqyqszqgpqyqszqgpqyqszqgpqyqszqgpqyqszqgpqyqsgf6nud";
    const FFS: &str = "sei1llllllllllllllllllllllllllllllllllllllllllllllllllls09qcrc";

    #[test]
    fn test_known_contract_prefix() {
        let prefixes = derive_whitelist_prefixes(&Bech32Codec::default(), &[CONTRACT]).unwrap();
        let expected = hex::decode(
            "03ade4a5f5803a439835c636395a8d648dee57b2fc90d98dc17fa887159b69638b",
        )
        .unwrap();
        assert_eq!(prefixes.len(), 1);
        assert_eq!(prefixes[0].to_vec(), expected);
    }

    #[test]
    fn test_length_and_tag() {
        let prefixes =
            derive_whitelist_prefixes(&Bech32Codec::default(), &[CONTRACT, ONES, FFS]).unwrap();
        for prefix in &prefixes {
            assert_eq!(prefix.as_bytes().len(), 33);
            assert_eq!(prefix.as_bytes()[0], 0x03);
        }
    }

    #[test]
    fn test_deterministic() {
        let codec = Bech32Codec::default();
        let a = derive_whitelist_prefixes(&codec, &[CONTRACT, ONES]).unwrap();
        let b = derive_whitelist_prefixes(&codec, &[CONTRACT, ONES]).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_order_preserved() {
        let codec = Bech32Codec::default();
        let forward = derive_whitelist_prefixes(&codec, &[CONTRACT, ONES, FFS]).unwrap();
        let reverse = derive_whitelist_prefixes(&codec, &[FFS, ONES, CONTRACT]).unwrap();
        assert_eq!(forward[0], reverse[2]);
        assert_eq!(forward[1], reverse[1]);
        assert_eq!(forward[2], reverse[0]);
        assert_eq!(forward[1].account().as_bytes(), &[1u8; 32]);
        assert_eq!(forward[2].account().as_bytes(), &[0xffu8; 32]);
    }

    #[test]
    fn test_duplicates_preserved() {
        let prefixes =
            derive_whitelist_prefixes(&Bech32Codec::default(), &[CONTRACT, CONTRACT]).unwrap();
        assert_eq!(prefixes.len(), 2);
        assert_eq!(prefixes[0], prefixes[1]);
    }

    #[test]
    fn test_empty_input() {
        let none: [&str; 0] = [];
        let prefixes = derive_whitelist_prefixes(&Bech32Codec::default(), &none).unwrap();
        assert!(prefixes.is_empty());
    }

    #[test]
    fn test_bad_checksum_aborts_batch() {
        let mut corrupted = CONTRACT.to_string();
        corrupted.pop();
        corrupted.push('n');
        let addresses = vec![ONES.to_string(), corrupted.clone(), FFS.to_string()];
        let err = derive_whitelist_prefixes(&Bech32Codec::default(), addresses.as_slice()).unwrap_err();
        match err {
            WhitelistError::InvalidAddress {
                index,
                address,
                source,
            } => {
                assert_eq!(index, 1);
                assert_eq!(address, corrupted);
                assert!(matches!(source, AddressError::Encoding { .. }));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_wrong_length_aborts_batch() {
        let short = "sei1qurswpc8qurswpc8qurswpc8qurswpc87lkvxq";
        let err = derive_whitelist_prefixes(&Bech32Codec::default(), &[CONTRACT, short])
            .unwrap_err();
        assert!(matches!(
            err,
            WhitelistError::InvalidAddress {
                index: 1,
                source: AddressError::InvalidLength {
                    expected: 32,
                    actual: 20
                },
                ..
            }
        ));
    }

    #[test]
    fn test_is_whitelisted_prefix_match() {
        let whitelist = derive_whitelist_prefixes(&Bech32Codec::default(), &[CONTRACT]).unwrap();
        let prefix = whitelist[0];

        assert!(is_whitelisted(prefix.as_bytes(), &whitelist));
        assert!(is_whitelisted(&prefix.join(b"orderbook/long"), &whitelist));

        for i in 0..33 {
            let mut key = prefix.join(b"suffix");
            key[i] ^= 0x01;
            assert!(!is_whitelisted(&key, &whitelist), "byte {i} flipped");
        }
        assert!(!is_whitelisted(&prefix.as_bytes()[..32], &whitelist));
        assert!(!is_whitelisted(&[], &whitelist));
    }

    #[test]
    fn test_is_whitelisted_empty_whitelist() {
        assert!(!is_whitelisted(b"anything", &[]));
    }

    #[test]
    fn test_contract_store_key() {
        let account = Bech32Codec::default().decode(ONES).unwrap();
        let key = contract_store_key(&account, b"k");
        assert_eq!(key[0], 0x03);
        assert_eq!(&key[1..33], &[1u8; 32]);
        assert_eq!(&key[33..], b"k");
    }

    #[test]
    fn test_key_prefix_other_tag_not_whitelisted() {
        let account = Bech32Codec::default().decode(CONTRACT).unwrap();
        let whitelist = vec![contract_store_prefix(&account)];
        let info = key_prefix(KeyTag::ContractInfo, &account);
        assert_eq!(info.as_bytes()[0], 0x02);
        assert!(!is_whitelisted(info.as_bytes(), &whitelist));
    }

    proptest! {
        #[test]
        fn prop_distinct_addresses_distinct_prefixes(
            a in proptest::array::uniform32(any::<u8>()),
            b in proptest::array::uniform32(any::<u8>()),
        ) {
            prop_assume!(a != b);
            let codec = Bech32Codec::default();
            let addr_a = codec.encode(&ContractAddress::from_bytes(a)).unwrap();
            let addr_b = codec.encode(&ContractAddress::from_bytes(b)).unwrap();
            prop_assert_ne!(&addr_a, &addr_b);

            let prefixes = derive_whitelist_prefixes(&codec, &[addr_a, addr_b]).unwrap();
            prop_assert_ne!(prefixes[0], prefixes[1]);
            prop_assert_eq!(*prefixes[0].account().as_bytes(), a);
            prop_assert_eq!(*prefixes[1].account().as_bytes(), b);
        }

        #[test]
        fn prop_suffixed_keys_whitelisted(
            id in proptest::array::uniform32(any::<u8>()),
            suffix in proptest::collection::vec(any::<u8>(), 0..64),
        ) {
            let account = ContractAddress::from_bytes(id);
            let whitelist = vec![contract_store_prefix(&account)];
            prop_assert!(is_whitelisted(&contract_store_key(&account, &suffix), &whitelist));
        }
    }
}
