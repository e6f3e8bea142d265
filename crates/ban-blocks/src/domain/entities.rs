//! # Domain Entities
//!
//! Inputs and outputs of state block assembly. Field names serialize in the
//! camelCase shapes wallets exchange with nodes.

use serde::{Deserialize, Serialize};

/// Which side of a transfer a block records.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    /// Pocketing an incoming send.
    Receive,
    /// Moving funds out of the account.
    Send,
}

/// Block type tag. Every block this crate builds is a state block.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockType {
    /// The universal state block layout
    #[default]
    State,
}

/// Data required to sign a receive block.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiveInput {
    /// Current account balance in RAW
    pub wallet_balance_raw: String,
    /// Receiving account (the block's account)
    pub to_address: String,
    /// Hash of the send block being received
    pub transaction_hash: String,
    /// Hash of the account's previous block
    pub frontier: String,
    /// Representative to set on the block
    pub representative_address: String,
    /// Amount being received in RAW
    pub amount_raw: String,
    /// Precomputed proof of work, passed through untouched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work: Option<String>,
}

/// Data required to sign a send block.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendInput {
    /// Current account balance in RAW
    pub wallet_balance_raw: String,
    /// Sending account (the block's account)
    pub from_address: String,
    /// Destination account (becomes the link)
    pub to_address: String,
    /// Representative to set on the block
    pub representative_address: String,
    /// Hash of the account's previous block
    pub frontier: String,
    /// Amount being sent in RAW
    pub amount_raw: String,
    /// Precomputed proof of work, passed through untouched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work: Option<String>,
}

/// A signed state block, ready to publish.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedBlock {
    /// Always `"state"`
    #[serde(rename = "type")]
    pub block_type: BlockType,
    /// Account address
    pub account: String,
    /// Previous block hash (the frontier)
    pub previous: String,
    /// Representative address
    pub representative: String,
    /// New balance in RAW, decimal
    pub balance: String,
    /// Link field exactly as signed
    pub link: String,
    /// Signature returned by the signer
    pub signature: String,
    /// Proof of work, empty when none was supplied
    pub work: String,
}
