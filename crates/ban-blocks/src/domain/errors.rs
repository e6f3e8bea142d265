//! # Domain Errors
//!
//! One error enum per concern. Validation is eager: every operation reports
//! the first violation it finds.

use thiserror::Error;

/// Errors from the base32 variant codec.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CodecError {
    /// A character outside the address alphabet
    #[error("Invalid character found: {symbol:?} at position {position}")]
    InvalidSymbol { symbol: char, position: usize },
}

/// Errors from address composition and decomposition.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AddressError {
    /// The address body contains characters outside the alphabet
    #[error("Address contains invalid characters")]
    InvalidCharacters,

    /// The checksum segment does not match the key segment
    #[error("Address checksum mismatch")]
    ChecksumMismatch,

    /// The address does not have the `ban_` shape
    #[error("Malformed address: {0}")]
    InvalidFormat(String),

    /// The public key is not 32 bytes of hex
    #[error("Invalid public key: {0}")]
    InvalidPublicKey(String),
}

impl From<CodecError> for AddressError {
    fn from(_: CodecError) -> Self {
        AddressError::InvalidCharacters
    }
}

/// Errors from unit conversion.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UnitError {
    /// Unit name is not one of RAW, BAN, BANOSHI
    #[error("Unknown unit {0}, expected one of the following: RAW, BAN, BANOSHI")]
    UnknownUnit(String),

    /// Value is not a decimal number
    #[error("Invalid amount: {0:?}")]
    InvalidAmount(String),
}

/// Errors from state block assembly.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BlockError {
    /// A precondition on the caller's input failed
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The signer rejected the block
    #[error("Signing failed: {0}")]
    SigningFailed(String),
}

impl BlockError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        BlockError::InvalidInput(message.into())
    }
}
