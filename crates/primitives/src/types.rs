//! Newtypes for chain ids, amounts, addresses and transaction hashes.

use std::{fmt, num::NonZeroU128, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::{AmountError, ParseError};

/// Number of wei in one ETH.
pub const WEI_PER_ETH: u128 = 1_000_000_000_000_000_000;

/// Size of an EVM address in bytes.
pub const ADDRESS_SIZE: usize = 20;

/// Size of an EVM transaction hash in bytes.
pub const TX_HASH_SIZE: usize = 32;

/// An EVM chain identifier.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChainId(u64);

impl ChainId {
    /// Creates a new chain id.
    pub const fn new(id: u64) -> Self {
        ChainId(id)
    }

    /// Returns the raw chain id.
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for ChainId {
    fn from(id: u64) -> Self {
        ChainId(id)
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A strictly positive amount of ETH denominated in wei.
///
/// Zero amounts are unrepresentable, which pushes the `amount > 0` precondition of the bridge
/// into the type system.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WeiAmount(NonZeroU128);

impl WeiAmount {
    /// Creates an amount from a wei value, rejecting zero.
    pub fn from_wei(wei: u128) -> Result<Self, AmountError> {
        NonZeroU128::new(wei)
            .map(WeiAmount)
            .ok_or(AmountError::ZeroAmount)
    }

    /// Returns the amount in wei.
    pub const fn wei(&self) -> u128 {
        self.0.get()
    }
}

impl fmt::Display for WeiAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} wei", self.0)
    }
}

impl Serialize for WeiAmount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.wei().to_string())
    }
}

impl<'de> Deserialize<'de> for WeiAmount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        let wei: u128 = raw.parse().map_err(serde::de::Error::custom)?;
        WeiAmount::from_wei(wei).map_err(serde::de::Error::custom)
    }
}

/// A 20-byte EVM account address.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct EvmAddress([u8; ADDRESS_SIZE]);

impl EvmAddress {
    /// Creates an address from a byte array.
    pub const fn new(bytes: [u8; ADDRESS_SIZE]) -> Self {
        EvmAddress(bytes)
    }

    /// Returns the address as a byte slice.
    pub const fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for EvmAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl FromStr for EvmAddress {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = decode_hex(s)?;
        let array: [u8; ADDRESS_SIZE] =
            bytes
                .try_into()
                .map_err(|bytes: Vec<u8>| ParseError::InvalidLength {
                    expected: ADDRESS_SIZE,
                    got: bytes.len(),
                })?;
        Ok(EvmAddress(array))
    }
}

impl Serialize for EvmAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for EvmAddress {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// A 32-byte EVM transaction hash.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TxHash([u8; TX_HASH_SIZE]);

impl TxHash {
    /// Creates a transaction hash from a byte array.
    pub const fn new(bytes: [u8; TX_HASH_SIZE]) -> Self {
        TxHash(bytes)
    }

    /// Returns the hash as a byte slice.
    pub const fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for TxHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl FromStr for TxHash {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = decode_hex(s)?;
        let array: [u8; TX_HASH_SIZE] =
            bytes
                .try_into()
                .map_err(|bytes: Vec<u8>| ParseError::InvalidLength {
                    expected: TX_HASH_SIZE,
                    got: bytes.len(),
                })?;
        Ok(TxHash(array))
    }
}

impl Serialize for TxHash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for TxHash {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

fn decode_hex(s: &str) -> Result<Vec<u8>, ParseError> {
    let stripped = s.strip_prefix("0x").unwrap_or(s);
    hex::decode(stripped).map_err(|e| ParseError::InvalidHex(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_amount_is_rejected() {
        assert_eq!(WeiAmount::from_wei(0), Err(AmountError::ZeroAmount));
        assert_eq!(WeiAmount::from_wei(1).unwrap().wei(), 1);
    }

    #[test]
    fn tx_hash_roundtrips_through_display() {
        let hash = TxHash::new([0xab; TX_HASH_SIZE]);
        let parsed: TxHash = hash.to_string().parse().unwrap();
        assert_eq!(parsed, hash);
    }

    #[test]
    fn address_rejects_wrong_length() {
        let err = "0xdeadbeef".parse::<EvmAddress>().unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidLength {
                expected: ADDRESS_SIZE,
                got: 4
            }
        );
    }

    #[test]
    fn address_parses_without_prefix() {
        let with_prefix: EvmAddress =
            "0x00112233445566778899aabbccddeeff00112233".parse().unwrap();
        let without_prefix: EvmAddress =
            "00112233445566778899aabbccddeeff00112233".parse().unwrap();
        assert_eq!(with_prefix, without_prefix);
    }
}
