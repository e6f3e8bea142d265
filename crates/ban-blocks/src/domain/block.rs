//! # State Block Preimage
//!
//! The signed message of a state block is the BLAKE2b-256 hash of six
//! concatenated fields, in this order:
//!
//! | Field | Bytes | receive | send |
//! |-------|-------|---------|------|
//! | preamble | 32 | `0x…06` | `0x…06` |
//! | account | 32 | receiver key | sender key |
//! | previous | 32 | frontier | frontier |
//! | representative | 32 | representative key | representative key |
//! | balance | 16 | old + amount | old - amount |
//! | link | 32 | send block hash | destination key |
//!
//! Balances are big-endian 128-bit integers.

use super::decimal::Decimal;
use super::entities::BlockKind;
use super::errors::BlockError;
use super::units::{convert_amount, Unit};
use ban_crypto::{BlockHash, BlockHasher};
use num_bigint::BigUint;

/// State block type tag: the digit 6 left-padded to 32 bytes.
pub const PREAMBLE: &str = "0000000000000000000000000000000000000000000000000000000000000006";

/// Hex width of the balance field (128 bits).
pub const BALANCE_HEX_LEN: usize = 32;

/// The six hex fields a state block signature covers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlockPreimage {
    account: String,
    previous: String,
    representative: String,
    balance: String,
    link: String,
}

impl BlockPreimage {
    /// Assemble a preimage; the preamble is implied.
    pub fn new(
        account: impl Into<String>,
        previous: impl Into<String>,
        representative: impl Into<String>,
        balance: impl Into<String>,
        link: impl Into<String>,
    ) -> Self {
        Self {
            account: account.into(),
            previous: previous.into(),
            representative: representative.into(),
            balance: balance.into(),
            link: link.into(),
        }
    }

    /// Preamble field.
    pub fn preamble(&self) -> &str {
        PREAMBLE
    }

    /// Account public key.
    pub fn account(&self) -> &str {
        &self.account
    }

    /// Previous block hash.
    pub fn previous(&self) -> &str {
        &self.previous
    }

    /// Representative public key.
    pub fn representative(&self) -> &str {
        &self.representative
    }

    /// New balance, hex.
    pub fn balance(&self) -> &str {
        &self.balance
    }

    /// Link field.
    pub fn link(&self) -> &str {
        &self.link
    }

    /// Fields in signing order.
    pub fn fields(&self) -> [&str; 6] {
        [
            PREAMBLE,
            &self.account,
            &self.previous,
            &self.representative,
            &self.balance,
            &self.link,
        ]
    }

    /// The concatenated hex preimage.
    pub fn to_hex(&self) -> String {
        self.fields().concat()
    }

    /// BLAKE2b-256 of the decoded preimage: the block hash.
    ///
    /// # Errors
    /// * `BlockError::InvalidInput` - a field is not valid hex
    pub fn hash(&self) -> Result<BlockHash, BlockError> {
        const NAMES: [&str; 6] = [
            "preamble",
            "account",
            "previous",
            "representative",
            "balance",
            "link",
        ];

        let mut hasher = BlockHasher::new();
        for (name, field) in NAMES.iter().zip(self.fields()) {
            let bytes = hex::decode(field)
                .map_err(|e| BlockError::invalid(format!("{name} is not hex: {e}")))?;
            hasher.update(&bytes);
        }
        Ok(hasher.finalize())
    }
}

// =============================================================================
// BALANCE ARITHMETIC
// =============================================================================

/// Parse a non-negative decimal RAW amount. `None` when the input is empty,
/// not a number, or negative.
pub fn parse_raw_amount(value: &str) -> Option<Decimal> {
    if value.is_empty() {
        return None;
    }
    Decimal::parse(value)
        .ok()
        .filter(|d| *d >= Decimal::zero())
}

/// New balance in RAW after applying `amount` to `balance`.
///
/// Both values pass through BAN (29 fractional digits, truncated) before
/// the arithmetic, so sub-RAW fractions are dropped.
///
/// # Errors
/// * `BlockError::InvalidInput` - a send would leave a negative balance
pub fn apply_amount(
    balance: &Decimal,
    amount: &Decimal,
    kind: BlockKind,
) -> Result<String, BlockError> {
    let to_ban = |raw: &Decimal| {
        Decimal::parse(&convert_amount(raw, Unit::Raw, Unit::Ban))
            .map_err(|_| BlockError::invalid("Amount could not be converted"))
    };
    let balance_ban = to_ban(balance)?;
    let amount_ban = to_ban(amount)?;

    let new_balance = match kind {
        BlockKind::Receive => &balance_ban + &amount_ban,
        BlockKind::Send => &balance_ban - &amount_ban,
    };
    if new_balance < Decimal::zero() {
        return Err(BlockError::invalid(
            "Insufficient balance: amount exceeds wallet balance",
        ));
    }

    Ok(convert_amount(&new_balance, Unit::Ban, Unit::Raw))
}

/// Render a decimal RAW balance as the 128-bit upper-case hex field.
///
/// # Errors
/// * `BlockError::InvalidInput` - not a non-negative integer, or wider than 128 bits
pub fn balance_to_hex(balance_raw: &str) -> Result<String, BlockError> {
    let value = BigUint::parse_bytes(balance_raw.as_bytes(), 10)
        .ok_or_else(|| BlockError::invalid(format!("Balance {balance_raw:?} is not an integer")))?;

    let hex = value.to_str_radix(16).to_uppercase();
    if hex.len() > BALANCE_HEX_LEN {
        return Err(BlockError::invalid("Balance exceeds 128 bits"));
    }
    Ok(format!("{hex:0>width$}", width = BALANCE_HEX_LEN))
}
