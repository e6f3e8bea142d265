//! # Ban Blocks
//!
//! Address codec, unit conversion and offline state-block assembly for the
//! Banano ledger.
//!
//! ## Architecture
//!
//! This crate follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): Pure encoding and arithmetic, no I/O
//! - **Ports Layer** (`ports/`): Trait definitions for inbound/outbound interfaces
//! - **Service Layer** (`service.rs`): Validates input, assembles and signs blocks
//! - **Adapters Layer** (`adapters/`): Ed25519-BLAKE2b signer
//!
//! ## Example
//!
//! ```
//! use ban_blocks::{derive_address, validate_address, address_to_public_key_hex};
//!
//! let key = "E89208DD038FBB269987689621D52292AE9C35941A7484756ECCED92A65093BA";
//! let address = derive_address(key).unwrap();
//! assert!(validate_address(&address));
//! assert_eq!(address_to_public_key_hex(&address).unwrap(), key);
//! ```
//!
//! ## Security Notes
//!
//! - The assembler never parses, stores or logs private keys; they are only
//!   borrowed for the duration of the signer call
//! - A send that would leave a negative balance is rejected before signing

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod service;

// Re-export public API
pub use adapters::signer::{verify_block_signature, Blake2bEd25519Signer};
pub use config::AssemblerConfig;
pub use domain::address::{
    address_to_public_key, address_to_public_key_hex, derive_address, validate_address, Address,
    PublicKey, ADDRESS_PREFIX,
};
pub use domain::block::{BlockPreimage, PREAMBLE};
pub use domain::decimal::{Decimal, Rounding};
pub use domain::entities::{BlockKind, BlockType, ReceiveInput, SendInput, SignedBlock};
pub use domain::errors::{AddressError, BlockError, CodecError, UnitError};
pub use domain::units::{convert as convert_unit, Unit};
pub use ports::inbound::BlockAssemblyApi;
pub use ports::outbound::{BlockSigner, SignerError};
pub use service::BlockAssembler;
