//! # Account Addresses
//!
//! Address layout (64 ASCII characters):
//!
//! ```text
//! ban_ | 52 symbols: base32(public key) | 8 symbols: base32(checksum)
//! ```
//!
//! The first key symbol is always `1` or `3`: it carries four pad bits and
//! a single key bit. Validation checks that literally instead of deriving it
//! from the decoded bytes, because decoding discards the pad bits.

use super::base32;
use super::checksum::{self, ENCODED_CHECKSUM_LEN};
use super::errors::AddressError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Address prefix for the Banano network.
pub const ADDRESS_PREFIX: &str = "ban_";

/// Encoded public key segment length.
pub const KEY_SEGMENT_LEN: usize = base32::encoded_len(32);

/// Address body length (key segment plus checksum segment).
pub const ADDRESS_BODY_LEN: usize = KEY_SEGMENT_LEN + ENCODED_CHECKSUM_LEN;

/// Full address length including the prefix.
pub const ADDRESS_LEN: usize = ADDRESS_PREFIX.len() + ADDRESS_BODY_LEN;

// =============================================================================
// PUBLIC KEY
// =============================================================================

/// Ed25519 account public key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PublicKey([u8; 32]);

impl PublicKey {
    /// Wrap raw key bytes.
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Parse 64 hex characters (either case).
    pub fn from_hex(public_key_hex: &str) -> Result<Self, AddressError> {
        let bytes = hex::decode(public_key_hex)
            .map_err(|e| AddressError::InvalidPublicKey(e.to_string()))?;
        let bytes: [u8; 32] = bytes.try_into().map_err(|b: Vec<u8>| {
            AddressError::InvalidPublicKey(format!("expected 32 bytes, got {}", b.len()))
        })?;
        Ok(Self(bytes))
    }

    /// Raw key bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Upper-case hex, as used in block fields.
    pub fn to_hex(&self) -> String {
        hex::encode_upper(self.0)
    }

    /// Address for this key.
    pub fn to_address(&self) -> Address {
        Address(encode_address(self))
    }
}

// =============================================================================
// ADDRESS
// =============================================================================

/// A validated account address.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address(String);

impl Address {
    /// Parse and validate an address string.
    pub fn parse(address: &str) -> Result<Self, AddressError> {
        if validate_address(address) {
            Ok(Self(address.to_owned()))
        } else {
            Err(AddressError::InvalidFormat(address.to_owned()))
        }
    }

    /// The address text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The public key this address encodes.
    pub fn public_key(&self) -> Result<PublicKey, AddressError> {
        address_to_public_key(&self.0)
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Address {
    type Error = AddressError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if validate_address(&value) {
            Ok(Self(value))
        } else {
            Err(AddressError::InvalidFormat(value))
        }
    }
}

impl From<Address> for String {
    fn from(address: Address) -> Self {
        address.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// CODEC OPERATIONS
// =============================================================================

fn encode_address(public_key: &PublicKey) -> String {
    let mut address = String::with_capacity(ADDRESS_LEN);
    address.push_str(ADDRESS_PREFIX);
    address.push_str(&base32::encode(public_key.as_bytes()));
    address.push_str(&checksum::encoded_checksum(public_key.as_bytes()));
    address
}

/// Derive the address of a hex-encoded public key.
///
/// # Errors
/// * `AddressError::InvalidPublicKey` - not 64 hex characters
pub fn derive_address(public_key_hex: &str) -> Result<String, AddressError> {
    Ok(encode_address(&PublicKey::from_hex(public_key_hex)?))
}

/// `^ban_[13][alphabet]{59}$`
fn matches_address_pattern(address: &str) -> bool {
    let Some(body) = address.strip_prefix(ADDRESS_PREFIX) else {
        return false;
    };
    let bytes = body.as_bytes();

    bytes.len() == ADDRESS_BODY_LEN
        && matches!(bytes[0], b'1' | b'3')
        && bytes.iter().all(|&b| base32::is_alphabet_symbol(char::from(b)))
}

fn decode_key_segment(segment: &str) -> Result<[u8; 32], AddressError> {
    base32::decode(segment)?
        .try_into()
        .map_err(|_| AddressError::InvalidCharacters)
}

/// Whether `address` is a well-formed address with a matching checksum.
///
/// Never fails: malformed input of any kind is simply `false`. Comparison is
/// case-sensitive, so upper-case addresses are rejected.
pub fn validate_address(address: &str) -> bool {
    if !matches_address_pattern(address) {
        return false;
    }

    let body = &address[ADDRESS_PREFIX.len()..];
    let (key_segment, checksum_segment) = body.split_at(KEY_SEGMENT_LEN);

    match decode_key_segment(key_segment) {
        Ok(key) => checksum::encoded_checksum(&key) == checksum_segment,
        Err(_) => false,
    }
}

/// Decode the public key from an address, re-checking its checksum.
///
/// Only the last 60 characters are inspected, so the prefix is not checked.
///
/// # Errors
/// * `AddressError::InvalidCharacters` - fewer than 60 characters, or any outside the alphabet
/// * `AddressError::ChecksumMismatch` - checksum segment does not match the key
pub fn address_to_public_key(address: &str) -> Result<PublicKey, AddressError> {
    let start = address
        .char_indices()
        .rev()
        .nth(ADDRESS_BODY_LEN - 1)
        .map(|(idx, _)| idx)
        .ok_or(AddressError::InvalidCharacters)?;
    let body = &address[start..];

    if !body.chars().all(base32::is_alphabet_symbol) {
        return Err(AddressError::InvalidCharacters);
    }

    let (key_segment, checksum_segment) = body.split_at(KEY_SEGMENT_LEN);
    let key = decode_key_segment(key_segment)?;
    let expected = base32::decode(checksum_segment)?;

    if checksum::checksum(&key).as_slice() != expected.as_slice() {
        return Err(AddressError::ChecksumMismatch);
    }

    Ok(PublicKey(key))
}

/// Decode an address to its upper-case hex public key.
pub fn address_to_public_key_hex(address: &str) -> Result<String, AddressError> {
    address_to_public_key(address).map(|key| key.to_hex())
}
