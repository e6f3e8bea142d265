//! # Ed25519-BLAKE2b Block Signer
//!
//! `BlockSigner` implementation that signs the way the network verifies:
//! the preimage fields are hex-decoded, hashed with BLAKE2b-256, and the
//! 32-byte hash is signed with Ed25519-BLAKE2b.
//!
//! The private key is a 32-byte hex string. Its decoded bytes live in a
//! zeroizing buffer for the duration of one `sign` call only.

use crate::domain::block::BlockPreimage;
use crate::ports::outbound::{BlockSigner, SignerError};
use ban_crypto::{BlakeEd25519KeyPair, BlakeEd25519PublicKey, BlakeEd25519Signature, BlockHasher};
use zeroize::Zeroizing;

/// Signs state blocks with Ed25519 over BLAKE2b.
#[derive(Debug, Clone, Copy, Default)]
pub struct Blake2bEd25519Signer;

impl Blake2bEd25519Signer {
    /// Create a new signer.
    pub fn new() -> Self {
        Self
    }
}

impl BlockSigner for Blake2bEd25519Signer {
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
        let mut hasher = BlockHasher::new();
        for field in [preamble, account, previous, representative, balance, link] {
            let bytes = hex::decode(field).map_err(|e| SignerError::InvalidField(e.to_string()))?;
            hasher.update(&bytes);
        }
        let hash = hasher.finalize();

        let key = Zeroizing::new(
            hex::decode(private_key).map_err(|e| SignerError::InvalidKey(e.to_string()))?,
        );
        let keypair = BlakeEd25519KeyPair::from_slice(&key)
            .map_err(|e| SignerError::InvalidKey(e.to_string()))?;

        Ok(hex::encode_upper(keypair.sign(&hash).as_bytes()))
    }
}

/// Check a block signature against the preimage's account key.
///
/// # Errors
/// * `SignerError::InvalidField` - preimage or signature is not valid hex
/// * `SignerError::Backend` - the account key is not a curve point or the
///   signature does not verify
pub fn verify_block_signature(
    preimage: &BlockPreimage,
    signature_hex: &str,
) -> Result<(), SignerError> {
    let hash = preimage
        .hash()
        .map_err(|e| SignerError::InvalidField(e.to_string()))?;

    let account: [u8; 32] = hex::decode(preimage.account())
        .ok()
        .and_then(|bytes| bytes.try_into().ok())
        .ok_or_else(|| SignerError::InvalidField("account is not a 32-byte key".into()))?;
    let signature: [u8; 64] = hex::decode(signature_hex)
        .ok()
        .and_then(|bytes| bytes.try_into().ok())
        .ok_or_else(|| SignerError::InvalidField("signature is not 64 bytes of hex".into()))?;

    BlakeEd25519PublicKey::from_bytes(account)
        .and_then(|key| key.verify(&hash, &BlakeEd25519Signature::from_bytes(signature)))
        .map_err(|e| SignerError::Backend(e.to_string()))
}
