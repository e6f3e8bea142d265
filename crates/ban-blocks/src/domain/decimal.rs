//! # Exact Decimal Amounts
//!
//! Fixed-point decimal over an arbitrary-precision integer:
//! `value = digits * 10^-scale`. Amounts reach ~10^38 RAW and BAN values
//! carry 29 fractional digits, so neither `f64` nor `u128` fixed-point is
//! enough for the intermediate values.

use num_bigint::BigInt;
use num_traits::{Signed, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

/// Largest accepted exponent magnitude in scientific notation.
pub const MAX_EXPONENT: i64 = 4096;

/// How [`Decimal::to_fixed`] disposes of dropped digits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rounding {
    /// Truncate toward zero.
    Down,
    /// Round to nearest, ties away from zero.
    HalfUp,
}

/// Error parsing a decimal string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseDecimalError;

impl fmt::Display for ParseDecimalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("not a decimal number")
    }
}

impl std::error::Error for ParseDecimalError {}

/// Arbitrary-precision decimal number.
#[derive(Clone, Debug)]
pub struct Decimal {
    digits: BigInt,
    scale: u32,
}

fn pow10(exponent: u32) -> BigInt {
    num_traits::pow(BigInt::from(10u8), exponent as usize)
}

impl Decimal {
    /// Zero.
    pub fn zero() -> Self {
        Self {
            digits: BigInt::zero(),
            scale: 0,
        }
    }

    /// Parse `[+-]digits[.digits][(e|E)[+-]digits]`, tolerating surrounding
    /// whitespace. At least one mantissa digit is required.
    pub fn parse(input: &str) -> Result<Self, ParseDecimalError> {
        let s = input.trim();
        let (negative, s) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };

        let (mantissa, exponent) = match s.find(['e', 'E']) {
            Some(idx) => (&s[..idx], Some(&s[idx + 1..])),
            None => (s, None),
        };

        let (int_part, frac_part) = match mantissa.split_once('.') {
            Some((int_part, frac_part)) => (int_part, frac_part),
            None => (mantissa, ""),
        };

        let is_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if (int_part.is_empty() && frac_part.is_empty())
            || !is_digits(int_part)
            || !is_digits(frac_part)
        {
            return Err(ParseDecimalError);
        }

        let exponent = match exponent {
            Some(text) => parse_exponent(text)?,
            None => 0,
        };

        let all_digits = format!("{int_part}{frac_part}");
        let mut digits =
            BigInt::parse_bytes(all_digits.as_bytes(), 10).ok_or(ParseDecimalError)?;
        if negative {
            digits = -digits;
        }

        let scale = u32::try_from(frac_part.len()).map_err(|_| ParseDecimalError)?;
        Ok(Self { digits, scale }.shifted_by(exponent))
    }

    /// Multiply by `10^places` (negative `places` divides). Exact.
    pub fn shifted_by(&self, places: i64) -> Self {
        let scale = i64::from(self.scale) - places;
        if scale >= 0 {
            Self {
                digits: self.digits.clone(),
                scale: scale as u32,
            }
        } else {
            Self {
                digits: &self.digits * pow10((-scale) as u32),
                scale: 0,
            }
        }
    }

    /// Render with exactly `places` fractional digits.
    pub fn to_fixed(&self, places: u32, rounding: Rounding) -> String {
        let scaled = if self.scale <= places {
            &self.digits * pow10(places - self.scale)
        } else {
            let divisor = pow10(self.scale - places);
            // BigInt division truncates toward zero
            let quotient = &self.digits / &divisor;
            let remainder = &self.digits % &divisor;
            match rounding {
                Rounding::Down => quotient,
                Rounding::HalfUp => {
                    if remainder.abs() * 2u8 >= divisor {
                        if self.digits.is_negative() {
                            quotient - 1u8
                        } else {
                            quotient + 1u8
                        }
                    } else {
                        quotient
                    }
                }
            }
        };

        let mut text = scaled.abs().to_string();
        let width = places as usize + 1;
        if text.len() < width {
            text.insert_str(0, &"0".repeat(width - text.len()));
        }
        if places > 0 {
            text.insert(text.len() - places as usize, '.');
        }
        // no negative zero
        if scaled.is_negative() {
            text.insert(0, '-');
        }
        text
    }

    fn aligned(&self, other: &Self) -> (BigInt, BigInt, u32) {
        match self.scale.cmp(&other.scale) {
            Ordering::Equal => (self.digits.clone(), other.digits.clone(), self.scale),
            Ordering::Less => (
                &self.digits * pow10(other.scale - self.scale),
                other.digits.clone(),
                other.scale,
            ),
            Ordering::Greater => (
                self.digits.clone(),
                &other.digits * pow10(self.scale - other.scale),
                self.scale,
            ),
        }
    }
}

fn parse_exponent(text: &str) -> Result<i64, ParseDecimalError> {
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseDecimalError);
    }
    let magnitude: i64 = digits.parse().map_err(|_| ParseDecimalError)?;
    if magnitude > MAX_EXPONENT {
        return Err(ParseDecimalError);
    }
    Ok(if negative { -magnitude } else { magnitude })
}

impl FromStr for Decimal {
    type Err = ParseDecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl PartialEq for Decimal {
    fn eq(&self, other: &Self) -> bool {
        let (a, b, _) = self.aligned(other);
        a == b
    }
}

impl Eq for Decimal {}

impl PartialOrd for Decimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Decimal {
    fn cmp(&self, other: &Self) -> Ordering {
        let (a, b, _) = self.aligned(other);
        a.cmp(&b)
    }
}

impl Add for &Decimal {
    type Output = Decimal;

    fn add(self, rhs: Self) -> Decimal {
        let (a, b, scale) = self.aligned(rhs);
        Decimal {
            digits: a + b,
            scale,
        }
    }
}

impl Sub for &Decimal {
    type Output = Decimal;

    fn sub(self, rhs: Self) -> Decimal {
        let (a, b, scale) = self.aligned(rhs);
        Decimal {
            digits: a - b,
            scale,
        }
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_fixed(self.scale, Rounding::Down))
    }
}
