//! # Ban Crypto - Hashing and Signing Primitives
//!
//! ## Components
//!
//! | Module | Algorithm | Use Case |
//! |--------|-----------|----------|
//! | `hashing` | BLAKE2b-40, BLAKE2b-256 | Address checksums, block hashes |
//! | `signatures` | Ed25519 over BLAKE2b-512 | State block signing |
//!
//! ## Security Properties
//!
//! - **Ed25519-BLAKE2b**: deterministic nonces, no RNG dependency
//! - Secret key material is zeroized on drop

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod errors;
pub mod hashing;
pub mod signatures;

// Re-exports
pub use errors::CryptoError;
pub use hashing::{blake2b_256, blake2b_checksum, BlockHash, BlockHasher, Checksum, CHECKSUM_LEN};
pub use signatures::{BlakeEd25519KeyPair, BlakeEd25519PublicKey, BlakeEd25519Signature};

