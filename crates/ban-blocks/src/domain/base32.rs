//! # Base32 Variant Codec
//!
//! The 32-symbol encoding used in account addresses. It is NOT RFC 4648
//! base32: the alphabet drops `0`, `2`, `l` and `v`, and the bit stream is
//! left-padded with zero bits so that the total is a multiple of the symbol
//! width. A 32-byte key therefore encodes to 52 symbols whose first symbol
//! only carries one key bit, and a 5-byte checksum encodes to 8 symbols.
//!
//! Decoding applies the mirror padding and drops the leading pad byte when
//! the symbol count does not fill whole bytes. Round-trips are only
//! guaranteed for strings produced by [`encode`].

use super::errors::CodecError;

/// Address alphabet, in symbol-value order.
pub const ALPHABET: &str = "13456789abcdefghijkmnopqrstuwxyz";

const SYMBOL_BITS: usize = 5;
const SYMBOL_MASK: u32 = 0x1f;

/// Number of symbols [`encode`] produces for `byte_len` input bytes.
pub const fn encoded_len(byte_len: usize) -> usize {
    (byte_len * 8 + SYMBOL_BITS - 1) / SYMBOL_BITS
}

/// Whether `symbol` belongs to the address alphabet.
pub fn is_alphabet_symbol(symbol: char) -> bool {
    symbol_index(symbol).is_some()
}

fn symbol_index(symbol: char) -> Option<u32> {
    ALPHABET
        .bytes()
        .position(|b| char::from(b) == symbol)
        .map(|idx| idx as u32)
}

fn symbol_at(index: u32) -> char {
    char::from(ALPHABET.as_bytes()[(index & SYMBOL_MASK) as usize])
}

/// Encode bytes into alphabet symbols, most significant bit first.
pub fn encode(bytes: &[u8]) -> String {
    let leftover = (bytes.len() * 8) % SYMBOL_BITS;
    let offset = if leftover == 0 { 0 } else { SYMBOL_BITS - leftover };

    let mut output = String::with_capacity(encoded_len(bytes.len()));
    // Only the low bits+offset bits of the buffer are live; older bits fall off the top.
    let mut value: u32 = 0;
    let mut bits: usize = 0;

    for &byte in bytes {
        value = (value << 8) | u32::from(byte);
        bits += 8;

        while bits >= SYMBOL_BITS {
            output.push(symbol_at(value >> (bits + offset - SYMBOL_BITS)));
            bits -= SYMBOL_BITS;
        }
    }

    if bits > 0 {
        // offset pads the stream to whole symbols, so the residue fills exactly one
        debug_assert_eq!(bits + offset, SYMBOL_BITS);
        output.push(symbol_at(value << (SYMBOL_BITS - (bits + offset))));
    }

    output
}

/// Decode alphabet symbols back into bytes.
///
/// # Errors
/// * `CodecError::InvalidSymbol` - a character outside [`ALPHABET`]
pub fn decode(input: &str) -> Result<Vec<u8>, CodecError> {
    let length = input.chars().count();
    let leftover = (length * SYMBOL_BITS) % 8;
    let offset = if leftover == 0 { 0 } else { 8 - leftover };

    let mut output = Vec::with_capacity((length * SYMBOL_BITS + 7) / 8);
    let mut value: u32 = 0;
    let mut bits: usize = 0;

    for (position, symbol) in input.chars().enumerate() {
        let index = symbol_index(symbol).ok_or(CodecError::InvalidSymbol { symbol, position })?;
        value = (value << SYMBOL_BITS) | index;
        bits += SYMBOL_BITS;

        if bits >= 8 {
            output.push(((value >> (bits + offset - 8)) & 0xff) as u8);
            bits -= 8;
        }
    }

    if bits > 0 {
        debug_assert_eq!(bits + offset, 8);
        output.push(((value << (bits + offset - 8)) & 0xff) as u8);
    }

    if leftover != 0 {
        // leading byte holds only pad bits
        output.remove(0);
    }

    Ok(output)
}
