// 📦 Batch Mode - Account numbers for a whole CSV of holders
// Input:  name,balance
// Output: name,balance,account_number (CSV or JSON lines)

use crate::account::AccountHolder;
use crate::balance::BcdBalance;
use crate::config::OutputFormat;
use crate::encoder::AccountNumber;
use crate::error::BatchError;
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};
use std::path::Path;
use tracing::{debug, info};

// ============================================================================
// RECORDS
// ============================================================================

/// One input row
#[derive(Debug, Clone, Deserialize)]
pub struct HolderRow {
    pub name: String,
    pub balance: String,
}

/// One output row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountRecord {
    pub name: String,
    /// Six digits with the unused last two zeroed: "250799" is written as "250700"
    pub balance: String,
    pub account_number: AccountNumber,
}

impl AccountRecord {
    pub fn from_holder(holder: &AccountHolder) -> Self {
        AccountRecord {
            name: holder.name.clone(),
            balance: holder.balance.to_string(),
            account_number: holder.account_number(),
        }
    }
}

// ============================================================================
// LOADING
// ============================================================================

/// Read holders from any CSV source with a `name,balance` header
pub fn read_holders<R: Read>(reader: R) -> Result<Vec<AccountHolder>, BatchError> {
    let mut rdr = csv::Reader::from_reader(reader);
    let headers = rdr.headers()?.clone();
    let mut holders = Vec::new();

    for result in rdr.records() {
        let record = result?;
        // where the record starts; blank lines and quoted newlines both count
        let line = record.position().map(|p| p.line()).unwrap_or_default();

        let row: HolderRow = record.deserialize(Some(&headers))?;
        let balance = BcdBalance::parse(row.balance.trim())
            .map_err(|source| BatchError::Balance { line, source })?;

        holders.push(AccountHolder::new(&row.name, balance));
    }

    debug!(count = holders.len(), "loaded holders");
    Ok(holders)
}

pub fn load_csv(csv_path: &Path) -> Result<Vec<AccountHolder>, BatchError> {
    let file = std::fs::File::open(csv_path)?;
    info!(path = %csv_path.display(), "reading batch file");
    read_holders(file)
}

// ============================================================================
// WRITING
// ============================================================================

/// Single-account output line
pub fn render_record(record: &AccountRecord, format: OutputFormat) -> Result<String, BatchError> {
    match format {
        OutputFormat::Text => Ok(format!("account number: {}", record.account_number)),
        OutputFormat::Json => Ok(serde_json::to_string(record)?),
    }
}

/// Derive and write one record per holder; returns the number written
pub fn write_records<W: Write>(
    holders: &[AccountHolder],
    format: OutputFormat,
    mut out: W,
) -> Result<usize, BatchError> {
    let records = holders.iter().map(AccountRecord::from_holder);

    match format {
        OutputFormat::Text => {
            let mut wtr = csv::Writer::from_writer(out);
            for record in records {
                wtr.serialize(&record)?;
            }
            wtr.flush()?;
        }
        OutputFormat::Json => {
            for record in records {
                serde_json::to_writer(&mut out, &record)?;
                writeln!(out)?;
            }
        }
    }

    Ok(holders.len())
}

// ============================================================================
// TESTS
// ============================================================================
