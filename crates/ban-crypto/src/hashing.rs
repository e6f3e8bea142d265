//! # BLAKE2b Hashing
//!
//! The two BLAKE2b configurations the ledger relies on:
//!
//! - 40-bit output for address checksums
//! - 256-bit output for state block hashes (the message that gets signed)

use blake2::digest::consts::{U32, U5};
use blake2::{Blake2b, Digest};

/// Address checksum length in bytes.
pub const CHECKSUM_LEN: usize = 5;

/// BLAKE2b-40 output.
pub type Checksum = [u8; CHECKSUM_LEN];

/// BLAKE2b-256 output.
pub type BlockHash = [u8; 32];

type Blake2b40 = Blake2b<U5>;
type Blake2b256 = Blake2b<U32>;

/// Stateful BLAKE2b-256 hasher.
#[derive(Clone)]
pub struct BlockHasher {
    inner: Blake2b256,
}

impl BlockHasher {
    /// Create new hasher.
    pub fn new() -> Self {
        Self {
            inner: Blake2b256::new(),
        }
    }

    /// Update with data.
    pub fn update(&mut self, data: &[u8]) -> &mut Self {
        Digest::update(&mut self.inner, data);
        self
    }

    /// Finalize and return hash.
    pub fn finalize(&self) -> BlockHash {
        let mut out = [0u8; 32];
        out.copy_from_slice(&self.inner.clone().finalize());
        out
    }
}

impl Default for BlockHasher {
    fn default() -> Self {
        Self::new()
    }
}

/// Hash data with BLAKE2b-256 (one-shot).
pub fn blake2b_256(data: &[u8]) -> BlockHash {
    let mut out = [0u8; 32];
    out.copy_from_slice(&Blake2b256::digest(data));
    out
}

/// Raw BLAKE2b-40 digest of `data`, in hash output order.
///
/// Address checksums store these bytes reversed; see `ban_blocks::domain::checksum`.
pub fn blake2b_checksum(data: &[u8]) -> Checksum {
    let mut out = [0u8; CHECKSUM_LEN];
    out.copy_from_slice(&Blake2b40::digest(data));
    out
}
