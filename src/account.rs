// 🧾 Account Holder - Name + balance → account number pipeline
//
// name    → checksum8        → iteration count
// balance → BCD bytes        → check byte (seeded by balance, mixed N times)
// (high, check byte, low)    → account number

use crate::balance::BcdBalance;
use crate::check_byte::derive_check_byte;
use crate::checksum::checksum8;
use crate::encoder::{encode, AccountNumber};
use serde::Serialize;
use tracing::debug;

/// Names longer than this are cut before checksumming
pub const MAX_NAME_LEN: usize = 18;

/// First `MAX_NAME_LEN` characters of a name
pub fn truncate_name(name: &str) -> &str {
    match name.char_indices().nth(MAX_NAME_LEN) {
        Some((end, _)) => &name[..end],
        None => name,
    }
}

// ============================================================================
// ACCOUNT HOLDER
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountHolder {
    /// Name as used by the checksum (already truncated)
    pub name: String,
    pub balance: BcdBalance,
}

impl AccountHolder {
    pub fn new(name: &str, balance: BcdBalance) -> Self {
        AccountHolder {
            name: truncate_name(name).to_string(),
            balance,
        }
    }

    pub fn iteration_count(&self) -> u8 {
        checksum8(&self.name)
    }

    pub fn check_byte(&self) -> u8 {
        derive_check_byte(self.balance.high, self.balance.low, self.iteration_count())
    }

    pub fn account_number(&self) -> AccountNumber {
        let iterations = self.iteration_count();
        let check = derive_check_byte(self.balance.high, self.balance.low, iterations);
        let account = encode(self.balance.high, check, self.balance.low);

        debug!(
            name = %self.name,
            balance = %self.balance.digits(),
            iterations,
            check_byte = %format!("{:#04x}", check),
            account = %account,
            "derived account number"
        );

        account
    }

    /// Does `account` belong to this name and balance?
    pub fn verify(&self, account: &AccountNumber) -> bool {
        let (high, check, low) = account.decode();
        if high != self.balance.high || low != self.balance.low {
            debug!(account = %account, "balance bytes do not match");
            return false;
        }
        check == self.check_byte()
    }
}

/// Derive an account number in one call
pub fn derive_account_number(name: &str, balance: BcdBalance) -> AccountNumber {
    AccountHolder::new(name, balance).account_number()
}

// ============================================================================
// TESTS
// ============================================================================
