//! # Inbound Ports (Driving Ports / API)
//!
//! Traits that define the public API of this crate.

use crate::domain::entities::{ReceiveInput, SendInput, SignedBlock};
use crate::domain::errors::{AddressError, BlockError, UnitError};

/// Primary address and block assembly API.
///
/// Implementations must be thread-safe (`Send + Sync`).
pub trait BlockAssemblyApi: Send + Sync {
    // =========================================================================
    // Addresses
    // =========================================================================

    /// Derive the address for a hex public key.
    fn derive_address(&self, public_key_hex: &str) -> Result<String, AddressError>;

    /// Whether `address` is well formed with a matching checksum. Never fails.
    fn validate_address(&self, address: &str) -> bool;

    /// Decode an address to its upper-case hex public key.
    fn address_to_public_key_hex(&self, address: &str) -> Result<String, AddressError>;

    // =========================================================================
    // Units
    // =========================================================================

    /// Convert a decimal amount between RAW, BAN and BANOSHI.
    fn convert_unit(&self, value: &str, from: &str, to: &str) -> Result<String, UnitError>;

    // =========================================================================
    // Blocks
    // =========================================================================

    /// Build and sign a receive block.
    fn sign_receive_block(
        &self,
        input: &ReceiveInput,
        private_key: &str,
    ) -> Result<SignedBlock, BlockError>;

    /// Build and sign a send block.
    fn sign_send_block(
        &self,
        input: &SendInput,
        private_key: &str,
    ) -> Result<SignedBlock, BlockError>;
}
