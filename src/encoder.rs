// 🔐 Account Number Encoder - 24 bits → eight octal digits
// <BCD balance high> <check byte> <BCD balance low>
//
// The 24-bit value is cut into 3-bit groups, least significant first.
// Groups are taken two at a time and each pair is written with the later
// (more significant) group first. Worked example:
//
//   $25 $87 $07
//   00100101 10000111 00000111
//   001 001 011 000 011 100 000 111   (most significant first)
//   extracted: 7 0 4 3 0 3 1 1
//   pairs:     07 34 30 11  → "07343011"

use crate::error::AccountNumberError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Number of digits in an account number
pub const ACCOUNT_DIGITS: usize = 8;

const GROUP_MASK: u32 = 0x07;

// ============================================================================
// ACCOUNT NUMBER
// ============================================================================

/// An 8-digit account number, each digit in 0..=7.
///
/// Stored as raw digit values; rendered as text with leading zeros kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AccountNumber {
    digits: [u8; ACCOUNT_DIGITS],
}

impl AccountNumber {
    /// Parse the textual form, e.g. "07343011"
    pub fn parse(text: &str) -> Result<Self, AccountNumberError> {
        let count = text.chars().count();
        if count != ACCOUNT_DIGITS {
            return Err(AccountNumberError::WrongLength(count));
        }

        let mut digits = [0u8; ACCOUNT_DIGITS];
        for (position, c) in text.chars().enumerate() {
            match c.to_digit(8) {
                Some(d) => digits[position] = d as u8,
                None => return Err(AccountNumberError::InvalidDigit { position, found: c }),
            }
        }

        Ok(AccountNumber { digits })
    }

    /// Raw digit values in display order
    pub fn digits(&self) -> [u8; ACCOUNT_DIGITS] {
        self.digits
    }

    /// Recover `(dollar_high, check_byte, dollar_low)`.
    pub fn decode(&self) -> (u8, u8, u8) {
        let bits = deinterleave_pairs(&self.digits);
        (
            ((bits >> 16) & 0xff) as u8,
            ((bits >> 8) & 0xff) as u8,
            (bits & 0xff) as u8,
        )
    }
}

impl fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in self.digits {
            write!(f, "{}", d)?;
        }
        Ok(())
    }
}

impl FromStr for AccountNumber {
    type Err = AccountNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AccountNumber::parse(s)
    }
}

impl Serialize for AccountNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for AccountNumber {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        AccountNumber::parse(&text).map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// ENCODING
// ============================================================================

/// Pack the three bytes big-endian into a 24-bit value
pub fn pack_bytes(dollar_high: u8, check_byte: u8, dollar_low: u8) -> u32 {
    (u32::from(dollar_high) << 16) | (u32::from(check_byte) << 8) | u32::from(dollar_low)
}

/// Slice 24 bits into eight 3-bit digits in account number order.
///
/// Each step pulls two groups; the second one pulled (more significant)
/// is written first.
pub fn interleave_pairs(bits: u32) -> [u8; ACCOUNT_DIGITS] {
    let mut bits = bits;
    let mut digits = [0u8; ACCOUNT_DIGITS];

    for pair in digits.chunks_exact_mut(2) {
        let second = (bits & GROUP_MASK) as u8;
        bits >>= 3;
        let first = (bits & GROUP_MASK) as u8;
        bits >>= 3;
        pair[0] = first;
        pair[1] = second;
    }

    digits
}

/// Inverse of [`interleave_pairs`]
pub fn deinterleave_pairs(digits: &[u8; ACCOUNT_DIGITS]) -> u32 {
    let mut bits: u32 = 0;

    for (index, pair) in digits.chunks_exact(2).enumerate() {
        let shift = index * 6;
        bits |= (u32::from(pair[1]) & GROUP_MASK) << shift;
        bits |= (u32::from(pair[0]) & GROUP_MASK) << (shift + 3);
    }

    bits
}

/// Build the account number from the balance bytes and check byte
pub fn encode(dollar_high: u8, check_byte: u8, dollar_low: u8) -> AccountNumber {
    AccountNumber {
        digits: interleave_pairs(pack_bytes(dollar_high, check_byte, dollar_low)),
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_worked_example_encoding() {
        let account = encode(0x25, 0x87, 0x07);
        assert_eq!(account.to_string(), "07343011");
    }

    #[test]
    fn test_pack_bytes() {
        assert_eq!(pack_bytes(0x25, 0x87, 0x07), 0x258707);
    }

    #[test]
    fn test_interleave_pairs_order() {
        assert_eq!(interleave_pairs(0x258707), [0, 7, 3, 4, 3, 0, 1, 1]);
        // lowest group lands in the second slot of the first pair
        assert_eq!(interleave_pairs(0o1), [0, 1, 0, 0, 0, 0, 0, 0]);
        // highest group lands in the first slot of the last pair
        assert_eq!(interleave_pairs(0o70000000), [0, 0, 0, 0, 0, 0, 7, 0]);
    }

    #[test]
    fn test_leading_zeros_kept() {
        let account = encode(0x00, 0x00, 0x00);
        assert_eq!(account.to_string(), "00000000");
        assert_eq!(account.to_string().len(), ACCOUNT_DIGITS);
    }

    #[test]
    fn test_decode_worked_example() {
        let account = AccountNumber::parse("07343011").unwrap();
        assert_eq!(account.decode(), (0x25, 0x87, 0x07));
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(
            AccountNumber::parse("0734301"),
            Err(AccountNumberError::WrongLength(7))
        );
        assert_eq!(
            AccountNumber::parse("07343018"),
            Err(AccountNumberError::InvalidDigit { position: 7, found: '8' })
        );
        assert_eq!(
            AccountNumber::parse("0734x011"),
            Err(AccountNumberError::InvalidDigit { position: 4, found: 'x' })
        );
    }

    #[test]
    fn test_serde_as_string() {
        let account = encode(0x25, 0x87, 0x07);
        let json = serde_json::to_string(&account).unwrap();
        assert_eq!(json, "\"07343011\"");

        let back: AccountNumber = serde_json::from_str(&json).unwrap();
        assert_eq!(back, account);

        assert!(serde_json::from_str::<AccountNumber>("\"99999999\"").is_err());
    }

    proptest! {
        #[test]
        fn test_encoding_is_octal_and_fixed_width(high: u8, check: u8, low: u8) {
            let text = encode(high, check, low).to_string();
            prop_assert_eq!(text.len(), ACCOUNT_DIGITS);
            prop_assert!(text.chars().all(|c| ('0'..='7').contains(&c)));
        }

        #[test]
        fn test_decode_recovers_bytes(high: u8, check: u8, low: u8) {
            prop_assert_eq!(encode(high, check, low).decode(), (high, check, low));
        }
    }
}
