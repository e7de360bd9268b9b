// 💵 Balance - BCD packing of the significant balance digits
// Balances are up to six digits; only the first four are used.
// "250700" → high $25, low $07 (the trailing "00" is ignored)

use crate::error::BalanceError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Digits consumed from the balance text
pub const SIGNIFICANT_DIGITS: usize = 4;

/// Largest balance the legacy format can hold
pub const MAX_DOLLARS: u32 = 999_999;

/// The two BCD bytes the account number is built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct BcdBalance {
    /// First two digits, e.g. "25" → 0x25
    pub high: u8,
    /// Third and fourth digits, e.g. "07" → 0x07
    pub low: u8,
}

impl BcdBalance {
    pub fn new(high: u8, low: u8) -> Self {
        BcdBalance { high, low }
    }

    /// Parse a balance string.
    ///
    /// The first four characters must be decimal digits. Anything after them
    /// is never looked at, so "250700", "2507" and "2507xx" all agree.
    pub fn parse(text: &str) -> Result<Self, BalanceError> {
        let mut digits = [0u8; SIGNIFICANT_DIGITS];
        let mut seen = 0;

        for (position, c) in text.chars().take(SIGNIFICANT_DIGITS).enumerate() {
            let digit = c.to_digit(10).ok_or_else(|| BalanceError::NotADigit {
                input: text.to_string(),
                position,
                found: c,
            })?;
            digits[position] = digit as u8;
            seen += 1;
        }

        if seen < SIGNIFICANT_DIGITS {
            return Err(BalanceError::TooShort {
                input: text.to_string(),
            });
        }

        Ok(BcdBalance {
            high: pack_bcd(digits[0], digits[1]),
            low: pack_bcd(digits[2], digits[3]),
        })
    }

    /// Build from a whole-dollar amount (zero padded to six digits)
    ///
    /// Example: 250700 → $25 $07, 1234 → "001234" → $00 $12
    pub fn from_dollars(amount: u32) -> Result<Self, BalanceError> {
        if amount > MAX_DOLLARS {
            return Err(BalanceError::OutOfRange(amount));
        }
        Self::parse(&format!("{:06}", amount))
    }

    /// The four significant digits, e.g. "2507"
    pub fn digits(&self) -> String {
        format!("{:02x}{:02x}", self.high, self.low)
    }
}

impl fmt::Display for BcdBalance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}00", self.digits())
    }
}

impl FromStr for BcdBalance {
    type Err = BalanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BcdBalance::parse(s)
    }
}

/// Two decimal digits as one BCD byte: digit_high * 16 + digit_low
pub fn pack_bcd(digit_high: u8, digit_low: u8) -> u8 {
    ((u16::from(digit_high) * 16 + u16::from(digit_low)) & 0xff) as u8
}

// ============================================================================
// TESTS
// ============================================================================
