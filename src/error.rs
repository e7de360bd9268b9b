// ⚠️ Error Types - Boundary layer failures
// The core (checksum, check byte, encoder) is total and never fails.
// Only parsing user input can go wrong.

use thiserror::Error;

// ============================================================================
// BALANCE ERRORS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BalanceError {
    /// Fewer than the four significant digits were supplied
    #[error("balance {input:?} is too short: need at least 4 digits")]
    TooShort { input: String },

    /// A non-digit character among the four significant positions
    #[error("balance {input:?} has a non-digit {found:?} at position {position}")]
    NotADigit {
        input: String,
        position: usize,
        found: char,
    },

    /// Amount does not fit in six decimal digits
    #[error("balance {0} exceeds 999999")]
    OutOfRange(u32),
}

// ============================================================================
// ACCOUNT NUMBER ERRORS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccountNumberError {
    #[error("account number must be 8 digits, got {0}")]
    WrongLength(usize),

    /// Every digit is a 3-bit group, so only 0-7 are legal
    #[error("account number has invalid digit {found:?} at position {position}")]
    InvalidDigit { position: usize, found: char },
}

// ============================================================================
// BATCH ERRORS
// ============================================================================

#[derive(Debug, Error)]
pub enum BatchError {
    #[error("failed to read batch input")]
    Csv(#[from] csv::Error),

    #[error("line {line}: {source}")]
    Balance {
        line: u64,
        #[source]
        source: BalanceError,
    },

    #[error("failed to write batch output")]
    Io(#[from] std::io::Error),

    #[error("failed to encode record as JSON")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balance_error_messages() {
        let err = BalanceError::TooShort {
            input: "25".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "balance \"25\" is too short: need at least 4 digits"
        );

        let err = BalanceError::NotADigit {
            input: "25x7".to_string(),
            position: 2,
            found: 'x',
        };
        assert!(err.to_string().contains("position 2"));
    }
}
