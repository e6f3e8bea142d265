//! # Block Assembly Service
//!
//! Application service layer that implements the `BlockAssemblyApi` trait.
//!
//! ## Architecture
//!
//! This is the hexagonal "application service" that:
//! - Implements the inbound port (`BlockAssemblyApi`)
//! - Uses the outbound port (`BlockSigner`) for the signature
//! - Delegates encoding and balance arithmetic to the domain layer
//!
//! ## Validation Order
//!
//! Input is checked eagerly and the first failure is returned:
//! 1. wallet balance, then amount: non-empty, numeric, non-negative
//! 2. addresses (receive: to, representative; send: to, from, representative)
//! 3. transaction hash (receive only)
//! 4. frontier
//! 5. private key present
//!
//! The signer is never invoked for rejected input.

use crate::config::AssemblerConfig;
use crate::domain::address::{self, address_to_public_key_hex, validate_address};
use crate::domain::block::{apply_amount, balance_to_hex, parse_raw_amount, BlockPreimage};
use crate::domain::decimal::Decimal;
use crate::domain::entities::{BlockKind, BlockType, ReceiveInput, SendInput, SignedBlock};
use crate::domain::errors::{AddressError, BlockError, UnitError};
use crate::domain::units;
use crate::ports::inbound::BlockAssemblyApi;
use crate::ports::outbound::BlockSigner;
use tracing::{debug, warn};

/// Preimage plus the decimal balance it encodes.
struct Assembled {
    preimage: BlockPreimage,
    balance_raw: String,
}

/// Fields copied verbatim from the input into the signed block.
struct BlockHeader<'a> {
    account: &'a str,
    previous: &'a str,
    representative: &'a str,
    work: Option<&'a str>,
}

/// Block Assembly Service.
///
/// Stateless apart from its configuration; safe to share across threads.
pub struct BlockAssembler<S: BlockSigner> {
    signer: S,
    config: AssemblerConfig,
}

impl<S: BlockSigner> BlockAssembler<S> {
    /// Create a new assembler with default configuration.
    ///
    /// # Arguments
    /// * `signer` - The signer that produces block signatures
    pub fn new(signer: S) -> Self {
        Self::with_config(signer, AssemblerConfig::default())
    }

    /// Create a new assembler with explicit configuration.
    pub fn with_config(signer: S, config: AssemblerConfig) -> Self {
        Self { signer, config }
    }

    /// Active configuration.
    pub fn config(&self) -> &AssemblerConfig {
        &self.config
    }

    /// Validate a receive input and build its preimage without signing.
    pub fn receive_preimage(&self, input: &ReceiveInput) -> Result<BlockPreimage, BlockError> {
        let (balance, amount) = self.validate_receive(input)?;
        Ok(self.assemble_receive(input, &balance, &amount)?.preimage)
    }

    /// Validate a send input and build its preimage without signing.
    pub fn send_preimage(&self, input: &SendInput) -> Result<BlockPreimage, BlockError> {
        let (balance, amount) = self.validate_send(input)?;
        Ok(self.assemble_send(input, &balance, &amount)?.preimage)
    }

    // =========================================================================
    // Validation
    // =========================================================================

    fn reject(&self, kind: BlockKind, reason: &str) -> BlockError {
        if self.config.log_rejections {
            warn!(kind = ?kind, reason, "Rejected block input");
        }
        BlockError::invalid(reason)
    }

    fn check_amounts(
        &self,
        kind: BlockKind,
        wallet_balance_raw: &str,
        amount_raw: &str,
    ) -> Result<(Decimal, Decimal), BlockError> {
        let balance = parse_raw_amount(wallet_balance_raw)
            .ok_or_else(|| self.reject(kind, "Invalid format in wallet balance"))?;
        let amount = parse_raw_amount(amount_raw).ok_or_else(|| {
            self.reject(kind, &format!("Invalid format in {} amount", kind_name(kind)))
        })?;
        Ok((balance, amount))
    }

    fn check_address(&self, kind: BlockKind, field: &str, value: &str) -> Result<(), BlockError> {
        if validate_address(value) {
            Ok(())
        } else {
            Err(self.reject(kind, &format!("Invalid {field}")))
        }
    }

    fn check_frontier(&self, kind: BlockKind, frontier: &str) -> Result<(), BlockError> {
        if frontier.is_empty() {
            let reason = match kind {
                BlockKind::Receive => "No frontier",
                BlockKind::Send => "Frontier is not set",
            };
            return Err(self.reject(kind, reason));
        }
        Ok(())
    }

    fn check_private_key(&self, kind: BlockKind, private_key: &str) -> Result<(), BlockError> {
        if private_key.is_empty() {
            return Err(self.reject(kind, "Please input the private key to sign the block"));
        }
        Ok(())
    }

    fn validate_receive(&self, input: &ReceiveInput) -> Result<(Decimal, Decimal), BlockError> {
        let kind = BlockKind::Receive;
        let amounts = self.check_amounts(kind, &input.wallet_balance_raw, &input.amount_raw)?;
        self.check_address(kind, "toAddress", &input.to_address)?;
        self.check_address(kind, "representativeAddress", &input.representative_address)?;
        if input.transaction_hash.is_empty() {
            return Err(self.reject(kind, "No transaction hash"));
        }
        self.check_frontier(kind, &input.frontier)?;
        Ok(amounts)
    }

    fn validate_send(&self, input: &SendInput) -> Result<(Decimal, Decimal), BlockError> {
        let kind = BlockKind::Send;
        let amounts = self.check_amounts(kind, &input.wallet_balance_raw, &input.amount_raw)?;
        self.check_address(kind, "toAddress", &input.to_address)?;
        self.check_address(kind, "fromAddress", &input.from_address)?;
        self.check_address(kind, "representativeAddress", &input.representative_address)?;
        self.check_frontier(kind, &input.frontier)?;
        Ok(amounts)
    }

    // =========================================================================
    // Assembly
    // =========================================================================

    fn public_key_hex(
        &self,
        kind: BlockKind,
        field: &str,
        address: &str,
    ) -> Result<String, BlockError> {
        address_to_public_key_hex(address)
            .map_err(|e| self.reject(kind, &format!("Invalid {field}: {e}")))
    }

    fn new_balance(
        &self,
        kind: BlockKind,
        balance: &Decimal,
        amount: &Decimal,
    ) -> Result<(String, String), BlockError> {
        let log = |e: BlockError| {
            if let BlockError::InvalidInput(reason) = &e {
                if self.config.log_rejections {
                    warn!(kind = ?kind, reason = %reason, "Rejected block input");
                }
            }
            e
        };
        let balance_raw = apply_amount(balance, amount, kind).map_err(&log)?;
        let balance_hex = balance_to_hex(&balance_raw).map_err(&log)?;
        Ok((balance_raw, balance_hex))
    }

    fn assemble_receive(
        &self,
        input: &ReceiveInput,
        balance: &Decimal,
        amount: &Decimal,
    ) -> Result<Assembled, BlockError> {
        let kind = BlockKind::Receive;
        let (balance_raw, balance_hex) = self.new_balance(kind, balance, amount)?;
        let account = self.public_key_hex(kind, "toAddress", &input.to_address)?;
        let representative =
            self.public_key_hex(kind, "representativeAddress", &input.representative_address)?;

        Ok(Assembled {
            preimage: BlockPreimage::new(
                account,
                input.frontier.as_str(),
                representative,
                balance_hex,
                input.transaction_hash.as_str(),
            ),
            balance_raw,
        })
    }

    fn assemble_send(
        &self,
        input: &SendInput,
        balance: &Decimal,
        amount: &Decimal,
    ) -> Result<Assembled, BlockError> {
        let kind = BlockKind::Send;
        let (balance_raw, balance_hex) = self.new_balance(kind, balance, amount)?;
        let account = self.public_key_hex(kind, "fromAddress", &input.from_address)?;
        let link = self.public_key_hex(kind, "toAddress", &input.to_address)?;
        let representative =
            self.public_key_hex(kind, "representativeAddress", &input.representative_address)?;

        Ok(Assembled {
            preimage: BlockPreimage::new(
                account,
                input.frontier.as_str(),
                representative,
                balance_hex,
                link,
            ),
            balance_raw,
        })
    }

    // =========================================================================
    // Signing
    // =========================================================================

    fn sign_preimage(
        &self,
        private_key: &str,
        preimage: &BlockPreimage,
    ) -> Result<String, BlockError> {
        let [preamble, account, previous, representative, balance, link] = preimage.fields();
        Ok(self.signer.sign(
            private_key,
            preamble,
            account,
            previous,
            representative,
            balance,
            link,
        )?)
    }

    fn finish(
        &self,
        kind: BlockKind,
        assembled: Assembled,
        private_key: &str,
        header: BlockHeader<'_>,
    ) -> Result<SignedBlock, BlockError> {
        let signature = self.sign_preimage(private_key, &assembled.preimage)?;
        let work = header
            .work
            .filter(|w| !w.is_empty())
            .map(str::to_owned)
            .unwrap_or_else(|| self.config.default_work.clone());

        let block = SignedBlock {
            block_type: BlockType::State,
            account: header.account.to_owned(),
            previous: header.previous.to_owned(),
            representative: header.representative.to_owned(),
            balance: assembled.balance_raw,
            link: assembled.preimage.link().to_owned(),
            signature,
            work,
        };

        debug!(
            kind = ?kind,
            account = %block.account,
            previous = %block.previous,
            balance = %block.balance,
            "Signed state block"
        );
        Ok(block)
    }
}

fn kind_name(kind: BlockKind) -> &'static str {
    match kind {
        BlockKind::Receive => "receive",
        BlockKind::Send => "send",
    }
}

impl<S: BlockSigner> BlockAssemblyApi for BlockAssembler<S> {
    fn derive_address(&self, public_key_hex: &str) -> Result<String, AddressError> {
        address::derive_address(public_key_hex)
    }

    fn validate_address(&self, address: &str) -> bool {
        validate_address(address)
    }

    fn address_to_public_key_hex(&self, address: &str) -> Result<String, AddressError> {
        address_to_public_key_hex(address)
    }

    fn convert_unit(&self, value: &str, from: &str, to: &str) -> Result<String, UnitError> {
        units::convert(value, from, to)
    }

    fn sign_receive_block(
        &self,
        input: &ReceiveInput,
        private_key: &str,
    ) -> Result<SignedBlock, BlockError> {
        let kind = BlockKind::Receive;
        let (balance, amount) = self.validate_receive(input)?;
        self.check_private_key(kind, private_key)?;

        let assembled = self.assemble_receive(input, &balance, &amount)?;
        let header = BlockHeader {
            account: &input.to_address,
            previous: &input.frontier,
            representative: &input.representative_address,
            work: input.work.as_deref(),
        };
        self.finish(kind, assembled, private_key, header)
    }

    fn sign_send_block(
        &self,
        input: &SendInput,
        private_key: &str,
    ) -> Result<SignedBlock, BlockError> {
        let kind = BlockKind::Send;
        let (balance, amount) = self.validate_send(input)?;
        self.check_private_key(kind, private_key)?;

        let assembled = self.assemble_send(input, &balance, &amount)?;
        let header = BlockHeader {
            account: &input.from_address,
            previous: &input.frontier,
            representative: &input.representative_address,
            work: input.work.as_deref(),
        };
        self.finish(kind, assembled, private_key, header)
    }
}
