// ⚙️ Configuration - Resolved settings for a run
// Values come from the command line, with environment fallbacks.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Environment variable consulted when `--format` is not given
pub const FORMAT_ENV: &str = "GBACCOUNT_FORMAT";

// ============================================================================
// OUTPUT FORMAT
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `account number: 07343011` (CSV in batch mode)
    #[default]
    Text,

    /// One JSON object per account
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }
}

// ============================================================================
// CONFIG
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub format: OutputFormat,

    /// Number of `-v` flags
    pub verbosity: u8,
}

impl Config {
    pub fn new(format: OutputFormat, verbosity: u8) -> Self {
        Config { format, verbosity }
    }

    /// Log filter used when `RUST_LOG` is unset
    pub fn default_log_filter(&self) -> &'static str {
        match self.verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
