// 🔢 Name Checksum - Iteration count for check byte mixing
// Eight bit sum of the uppercased name's character codes

use tracing::trace;

/// Compute the 8-bit checksum of a name.
///
/// Every character is uppercased first (a character may expand into several,
/// e.g. 'ß' becomes "SS"), then the code points are summed modulo 256.
///
/// An empty name yields 0. That is valid input: the check byte derivation
/// raises a zero iteration count to one.
///
/// Example: "DUCK,DONALD" → 5
pub fn checksum8(name: &str) -> u8 {
    let mut sum: u32 = 0;

    for c in name.chars().flat_map(char::to_uppercase) {
        sum = (sum + c as u32) & 0xff;
    }

    trace!(name, checksum = sum, "name checksum");
    sum as u8
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_worked_example_checksum() {
        assert_eq!(checksum8("DUCK,DONALD"), 5);
    }

    #[test]
    fn test_checksum_is_case_insensitive() {
        assert_eq!(checksum8("duck,donald"), 5);
        assert_eq!(checksum8("Duck,Donald"), checksum8("DUCK,DONALD"));
    }

    #[test]
    fn test_empty_name_is_zero() {
        assert_eq!(checksum8(""), 0);
    }

    #[test]
    fn test_checksum_wraps() {
        // 'A' = 65, four of them = 260 → 4
        assert_eq!(checksum8("AAAA"), 4);
        // 'Z' = 90, 18 of them = 1620 → 84
        assert_eq!(checksum8(&"Z".repeat(18)), 84);
    }

    #[test]
    fn test_multi_char_uppercase_expansion() {
        // 'ß' uppercases to "SS": 83 + 83 = 166
        assert_eq!(checksum8("ß"), 166);
        assert_eq!(checksum8("ß"), checksum8("SS"));
    }

    #[test]
    fn test_non_letters_unchanged() {
        // ' ' = 32, ',' = 44, '1' = 49
        assert_eq!(checksum8(" ,1"), 125);
    }

    proptest! {
        #[test]
        fn test_checksum_matches_wide_sum(name in "\\PC{0,18}") {
            let wide: u64 = name
                .chars()
                .flat_map(char::to_uppercase)
                .map(|c| c as u64)
                .sum();
            prop_assert_eq!(checksum8(&name) as u64, wide % 256);
        }
    }
}
