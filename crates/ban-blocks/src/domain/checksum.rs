//! # Address Checksum
//!
//! BLAKE2b-40 of the public key, stored byte-reversed. The reversal is part
//! of the network's address format; without it checksums never match.

use super::base32;
use ban_crypto::{blake2b_checksum, Checksum};

/// Length of the encoded checksum segment of an address.
pub const ENCODED_CHECKSUM_LEN: usize = base32::encoded_len(ban_crypto::CHECKSUM_LEN);

/// Checksum bytes for `public_key`.
pub fn checksum(public_key: &[u8; 32]) -> Checksum {
    let mut bytes = blake2b_checksum(public_key);
    bytes.reverse();
    bytes
}

/// Checksum of `public_key` as it appears at the end of an address.
pub fn encoded_checksum(public_key: &[u8; 32]) -> String {
    base32::encode(&checksum(public_key))
}
