// gbaccount - Core Library
// Legacy account number derivation: (name, balance) → 8 octal digits
// Exposes all modules for use in the CLI and tests

pub mod checksum;    // Name → iteration count
pub mod check_byte;  // Balance bytes + iteration count → check byte
pub mod encoder;     // (high, check byte, low) → account number
pub mod balance;     // Balance text → BCD bytes
pub mod account;     // Pipeline + verification
pub mod batch;       // CSV in, CSV/JSON out
pub mod config;
pub mod error;

// Re-export commonly used types
pub use checksum::checksum8;
pub use check_byte::{derive_check_byte, mix_round, seed};
pub use encoder::{
    encode, interleave_pairs, deinterleave_pairs, pack_bytes,
    AccountNumber, ACCOUNT_DIGITS,
};
pub use balance::{BcdBalance, pack_bcd, MAX_DOLLARS, SIGNIFICANT_DIGITS};
pub use account::{AccountHolder, derive_account_number, truncate_name, MAX_NAME_LEN};
pub use batch::{
    AccountRecord, HolderRow,
    load_csv, read_holders, render_record, write_records,
};
pub use config::{Config, OutputFormat, FORMAT_ENV};
pub use error::{AccountNumberError, BalanceError, BatchError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
