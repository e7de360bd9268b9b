use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// Use library instead of local modules
use gbaccount::{
    load_csv, render_record, write_records, AccountHolder, AccountNumber, AccountRecord,
    BcdBalance, Config, OutputFormat, FORMAT_ENV,
};

#[derive(Parser, Debug)]
#[command(name = "gbaccount")]
#[command(version, about = "Derive a legacy account number from a name and balance")]
struct Cli {
    /// Account holder name (only the first 18 characters are used)
    #[arg(required_unless_present = "batch")]
    name: Option<String>,

    /// Six digit dollar amount (only the first four digits are used)
    #[arg(required_unless_present = "batch")]
    balance: Option<String>,

    /// Check the derived number against this account number
    #[arg(long, value_name = "ACCOUNT", conflicts_with = "batch")]
    verify: Option<String>,

    /// Read `name,balance` rows from a CSV file instead
    #[arg(long, value_name = "FILE", conflicts_with_all = ["name", "balance"])]
    batch: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, env = FORMAT_ENV, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// More logging on stderr (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// How a successful run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Done,
    /// `--verify` was given and did not match
    Mismatch,
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Done => ExitCode::SUCCESS,
            Outcome::Mismatch => ExitCode::from(1),
        }
    }
}

/// Exit status for a failed parse. Help and version are not failures;
/// usage errors exit 1, not clap's default 2.
fn parse_failure_status(err: &clap::Error) -> u8 {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => 1,
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let status = parse_failure_status(&err);
            if status == 0 {
                err.exit();
            }
            eprint!("{err}");
            return ExitCode::from(status);
        }
    };

    let config = Config::new(cli.format, cli.verbose);
    init_logging(&config);

    let stdout = io::stdout();
    match run(&cli, &config, &mut stdout.lock()) {
        Ok(outcome) => outcome.into(),
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::from(1)
        }
    }
}

fn init_logging(config: &Config) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.default_log_filter().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn run<W: Write>(cli: &Cli, config: &Config, out: &mut W) -> Result<Outcome> {
    if let Some(path) = &cli.batch {
        return run_batch(path, config, out);
    }

    // clap guarantees both positionals when --batch is absent
    let (Some(name), Some(balance)) = (&cli.name, &cli.balance) else {
        anyhow::bail!("missing <NAME> or <BALANCE>");
    };

    let balance = BcdBalance::parse(balance).context("Invalid balance")?;
    let holder = AccountHolder::new(name, balance);
    let record = AccountRecord::from_holder(&holder);

    writeln!(out, "{}", render_record(&record, config.format)?)?;

    if let Some(expected) = &cli.verify {
        let expected = AccountNumber::parse(expected).context("Invalid account number")?;
        if holder.verify(&expected) {
            writeln!(out, "verification: match")?;
        } else {
            tracing::warn!(expected = %expected, derived = %record.account_number, "verification failed");
            writeln!(out, "verification: mismatch")?;
            return Ok(Outcome::Mismatch);
        }
    }

    Ok(Outcome::Done)
}

fn run_batch<W: Write>(path: &Path, config: &Config, out: &mut W) -> Result<Outcome> {
    let holders = load_csv(path)
        .with_context(|| format!("Failed to load batch file: {:?}", path))?;

    let written = write_records(&holders, config.format, &mut *out)
        .context("Failed to write account numbers")?;

    tracing::info!(written, format = config.format.as_str(), "batch complete");
    Ok(Outcome::Done)
}

// ============================================================================
// TESTS
// ============================================================================
