//! # Ed25519-BLAKE2b Signatures
//!
//! Ed25519 as used by Nano-family ledgers: the secret key is expanded with
//! BLAKE2b-512 instead of SHA-512, and the same hash drives nonce
//! derivation and the challenge. Everything else (curve, clamping, encoding)
//! is standard Ed25519.
//!
//! ## Security Properties
//!
//! - No RNG dependency (deterministic nonce from message)
//! - Expanded secret material is zeroized on drop

use crate::CryptoError;
use blake2::{Blake2b512, Digest};
use ed25519_dalek::hazmat::{raw_sign, raw_verify, ExpandedSecretKey};
use ed25519_dalek::VerifyingKey;
use zeroize::Zeroize;

/// Ed25519 public key (32 bytes).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlakeEd25519PublicKey([u8; 32]);

impl BlakeEd25519PublicKey {
    /// Create from bytes.
    pub fn from_bytes(bytes: [u8; 32]) -> Result<Self, CryptoError> {
        // Validate it's a valid point
        VerifyingKey::from_bytes(&bytes).map_err(|_| CryptoError::InvalidPublicKey)?;
        Ok(Self(bytes))
    }

    /// Get raw bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Verify a signature.
    pub fn verify(
        &self,
        message: &[u8],
        signature: &BlakeEd25519Signature,
    ) -> Result<(), CryptoError> {
        let verifying_key =
            VerifyingKey::from_bytes(&self.0).map_err(|_| CryptoError::InvalidPublicKey)?;

        let sig = ed25519_dalek::Signature::from_bytes(&signature.0);

        raw_verify::<Blake2b512>(&verifying_key, message, &sig)
            .map_err(|_| CryptoError::SignatureVerificationFailed)
    }
}

/// Ed25519 signature (64 bytes).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlakeEd25519Signature([u8; 64]);

impl BlakeEd25519Signature {
    /// Create from bytes.
    pub fn from_bytes(bytes: [u8; 64]) -> Self {
        Self(bytes)
    }

    /// Get raw bytes.
    pub fn as_bytes(&self) -> &[u8; 64] {
        &self.0
    }
}

/// Ed25519-BLAKE2b keypair.
pub struct BlakeEd25519KeyPair {
    expanded: ExpandedSecretKey,
    verifying_key: VerifyingKey,
}

impl BlakeEd25519KeyPair {
    /// Create from a 32-byte private key.
    pub fn from_private_key(private_key: &[u8; 32]) -> Self {
        let mut digest = [0u8; 64];
        digest.copy_from_slice(&Blake2b512::digest(private_key));

        let expanded = ExpandedSecretKey::from_bytes(&digest);
        digest.zeroize();

        let verifying_key = VerifyingKey::from(&expanded);
        Self {
            expanded,
            verifying_key,
        }
    }

    /// Create from a private key slice, checking its length.
    pub fn from_slice(private_key: &[u8]) -> Result<Self, CryptoError> {
        let bytes: &[u8; 32] =
            private_key
                .try_into()
                .map_err(|_| CryptoError::InvalidKeyLength {
                    expected: 32,
                    actual: private_key.len(),
                })?;
        Ok(Self::from_private_key(bytes))
    }

    /// Get public key.
    pub fn public_key(&self) -> BlakeEd25519PublicKey {
        BlakeEd25519PublicKey(self.verifying_key.to_bytes())
    }

    /// Sign a message (deterministic - no RNG needed).
    pub fn sign(&self, message: &[u8]) -> BlakeEd25519Signature {
        let sig = raw_sign::<Blake2b512>(&self.expanded, message, &self.verifying_key);
        BlakeEd25519Signature(sig.to_bytes())
    }
}

impl Drop for BlakeEd25519KeyPair {
    fn drop(&mut self) {
        self.expanded.scalar.zeroize();
        self.expanded.hash_prefix.zeroize();
    }
}
