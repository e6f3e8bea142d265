//! # Outbound Ports (Driven Ports / SPI)
//!
//! Traits that define dependencies this crate needs.

use crate::domain::errors::BlockError;
use thiserror::Error;

/// Error from a block signer.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SignerError {
    /// The private key could not be used
    #[error("Invalid private key: {0}")]
    InvalidKey(String),

    /// A block field could not be decoded
    #[error("Invalid block field: {0}")]
    InvalidField(String),

    /// Signing backend failure
    #[error("Signer backend error: {0}")]
    Backend(String),
}

/// Ed25519 signer for state blocks.
///
/// Receives the six preimage fields as hex, in signing order, and returns the
/// signature as hex. The private key is opaque to the assembler and is only
/// borrowed for the duration of this call.
pub trait BlockSigner: Send + Sync {
    /// Sign a state block.
    ///
    /// # Errors
    /// * `SignerError::InvalidKey` - the key is malformed
    /// * `SignerError::InvalidField` - a field is not hex
    #[allow(clippy::too_many_arguments)]
    fn sign(
        &self,
        private_key: &str,
        preamble: &str,
        account: &str,
        previous: &str,
        representative: &str,
        balance: &str,
        link: &str,
    ) -> Result<String, SignerError>;
}

impl<T: BlockSigner + ?Sized> BlockSigner for &T {
    #[allow(clippy::too_many_arguments)]
    fn sign(
        &self,
        private_key: &str,
        preamble: &str,
        account: &str,
        previous: &str,
        representative: &str,
        balance: &str,
        link: &str,
    ) -> Result<String, SignerError> {
        (**self).sign(
            private_key,
            preamble,
            account,
            previous,
            representative,
            balance,
            link,
        )
    }
}

impl From<SignerError> for BlockError {
    fn from(err: SignerError) -> Self {
        BlockError::SigningFailed(err.to_string())
    }
}
