//! # Unit Conversion
//!
//! | Unit | RAW per unit |
//! |------|--------------|
//! | `RAW` | 1 |
//! | `BANOSHI` | 10^27 |
//! | `BAN` | 10^29 |
//!
//! Conversion is a decimal shift, never floating point. BAN and BANOSHI
//! output is truncated to the unit's full fractional precision; RAW output
//! is rounded half-up to an integer.

use super::decimal::{Decimal, Rounding};
use super::errors::UnitError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Amount denomination.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Unit {
    /// Smallest indivisible amount
    Raw,
    /// 10^29 RAW
    Ban,
    /// 10^27 RAW
    Banoshi,
}

impl Unit {
    /// Power of ten relating this unit to RAW. Also the number of fractional
    /// digits rendered for the unit.
    pub const fn raw_exponent(self) -> u32 {
        match self {
            Unit::Raw => 0,
            Unit::Ban => 29,
            Unit::Banoshi => 27,
        }
    }

    /// Canonical upper-case name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Unit::Raw => "RAW",
            Unit::Ban => "BAN",
            Unit::Banoshi => "BANOSHI",
        }
    }

    fn rounding(self) -> Rounding {
        match self {
            Unit::Raw => Rounding::HalfUp,
            Unit::Ban | Unit::Banoshi => Rounding::Down,
        }
    }
}

impl FromStr for Unit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "RAW" => Ok(Unit::Raw),
            "BAN" => Ok(Unit::Ban),
            "BANOSHI" => Ok(Unit::Banoshi),
            other => Err(UnitError::UnknownUnit(other.to_owned())),
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Convert an already-parsed amount, rendering it in `to`.
pub fn convert_amount(value: &Decimal, from: Unit, to: Unit) -> String {
    let exponent = i64::from(from.raw_exponent()) - i64::from(to.raw_exponent());
    value
        .shifted_by(exponent)
        .to_fixed(to.raw_exponent(), to.rounding())
}

/// Convert a decimal string between units.
///
/// # Errors
/// * `UnitError::UnknownUnit` - `from` or `to` is not RAW, BAN or BANOSHI
/// * `UnitError::InvalidAmount` - `value` is not a decimal number
pub fn convert(value: &str, from: &str, to: &str) -> Result<String, UnitError> {
    let from: Unit = from.parse()?;
    let to: Unit = to.parse()?;
    let amount =
        Decimal::parse(value).map_err(|_| UnitError::InvalidAmount(value.to_owned()))?;
    Ok(convert_amount(&amount, from, to))
}
