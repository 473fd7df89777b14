//! CLI definition and dispatch.
//!
//! All user-facing text lives here: quote rendering, violation messages
//! and currency formatting. Status and warnings go to stderr, data to
//! stdout.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::adapters::csv_market::{self, IngestReport, SkipReason};
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::memory_store::MemoryLenderStore;
use crate::domain::config_validation::validate_loan_config;
use crate::domain::error::RatequoteError;
use crate::domain::quote::{calculate_quote, Quote};
use crate::domain::terms::{self, LoanTerms};
use crate::domain::validation::AmountViolation;
use crate::ports::config_port::ConfigPort;
use crate::ports::lender_store::LenderStore;

#[derive(Parser, Debug)]
#[command(name = "ratequote", about = "Personal loan quoting against a lender market")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Quote a loan amount against a market file
    Quote {
        #[arg(short, long)]
        market: PathBuf,
        #[arg(short, long)]
        amount: f64,
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// List the lender pool sorted by rate
    Lenders {
        #[arg(short, long)]
        market: PathBuf,
    },
    /// Check a market file and report rows that would be skipped
    Check {
        #[arg(short, long)]
        market: PathBuf,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Quote {
            market,
            amount,
            config,
        } => run_quote(&market, amount, config.as_ref()),
        Command::Lenders { market } => run_lenders(&market),
        Command::Check { market } => run_check(&market),
    }
}

pub fn load_config(path: &PathBuf) -> Result<FileConfigAdapter, ExitCode> {
    FileConfigAdapter::from_file(path).map_err(|e| {
        let err = RatequoteError::ConfigParse {
            file: path.display().to_string(),
            reason: e.to_string(),
        };
        eprintln!("error: {err}");
        ExitCode::from(&err)
    })
}

/// Resolves loan terms from the `[loan]` config section, falling back to
/// the stock terms for missing keys.
pub fn build_loan_terms(config: &dyn ConfigPort) -> LoanTerms {
    LoanTerms {
        increment: config.get_double("loan", "increment", terms::DEFAULT_INCREMENT),
        minimum: config.get_double("loan", "minimum", terms::DEFAULT_MINIMUM),
        maximum: config.get_double("loan", "maximum", terms::DEFAULT_MAXIMUM),
        term_months: config.get_int(
            "loan",
            "term_months",
            i64::from(terms::DEFAULT_TERM_MONTHS),
        ) as u32,
    }
}

fn resolve_terms(config_path: Option<&PathBuf>) -> Result<LoanTerms, ExitCode> {
    let Some(path) = config_path else {
        return Ok(LoanTerms::default());
    };

    eprintln!("Loading config from {}", path.display());
    let adapter = load_config(path)?;
    if let Err(e) = validate_loan_config(&adapter) {
        eprintln!("error: {e}");
        return Err((&e).into());
    }
    Ok(build_loan_terms(&adapter))
}

fn load_market(market: &Path, store: &mut dyn LenderStore) -> Result<IngestReport, ExitCode> {
    csv_market::load_market(market, store).map_err(|e| {
        eprintln!("error: {e}");
        (&e).into()
    })
}

fn run_quote(market: &Path, amount: f64, config_path: Option<&PathBuf>) -> ExitCode {
    let terms = match resolve_terms(config_path) {
        Ok(t) => t,
        Err(code) => return code,
    };

    let mut store = MemoryLenderStore::new();
    let report = match load_market(market, &mut store) {
        Ok(r) => r,
        Err(code) => return code,
    };
    print_ingest_summary(&report, market);

    match calculate_quote(&store, amount, &terms) {
        Ok(quote) => {
            print_quote(&quote);
            ExitCode::SUCCESS
        }
        Err(RatequoteError::Violation(violation)) => {
            println!("{}", violation_message(&violation));
            (&RatequoteError::Violation(violation)).into()
        }
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}

fn run_lenders(market: &Path) -> ExitCode {
    let mut store = MemoryLenderStore::new();
    let report = match load_market(market, &mut store) {
        Ok(r) => r,
        Err(code) => return code,
    };
    print_ingest_summary(&report, market);

    if store.total() == 0 {
        eprintln!("No lenders in the pool");
        return ExitCode::SUCCESS;
    }

    for lender in store.find_all_by_rate() {
        println!(
            "{:>4}  {:<16} {:>6.3}  {:>12}",
            lender.id,
            lender.name,
            lender.rate,
            format_gbp(lender.available)
        );
    }
    eprintln!("{} lenders in the pool", store.total());
    ExitCode::SUCCESS
}

fn run_check(market: &Path) -> ExitCode {
    eprintln!("Checking {}", market.display());

    let mut store = MemoryLenderStore::new();
    let report = match load_market(market, &mut store) {
        Ok(r) => r,
        Err(code) => return code,
    };

    for field in &report.defaulted {
        eprintln!(
            "warning: row {}: could not parse {} {:?}, defaulted to 0",
            field.row, field.field, field.value
        );
    }
    for skip in &report.skipped {
        let why = match skip.reason {
            SkipReason::MissingName => "missing lender name",
            SkipReason::NoCapacity => "no available capacity",
        };
        eprintln!("warning: row {}: skipped ({})", skip.row, why);
    }

    println!(
        "{} rows read, {} lenders loaded, {} skipped",
        report.rows,
        report.saved,
        report.skipped.len()
    );
    ExitCode::SUCCESS
}

fn print_ingest_summary(report: &IngestReport, market: &Path) {
    if report.skipped.is_empty() {
        eprintln!("Loaded {} lenders from {}", report.saved, market.display());
    } else {
        eprintln!(
            "Loaded {} lenders from {} ({} rows skipped)",
            report.saved,
            market.display(),
            report.skipped.len()
        );
    }
}

fn print_quote(quote: &Quote) {
    println!("Requested amount: {}", format_gbp(quote.amount));
    println!("Rate: {:.1}%", quote.rate * 100.0);
    println!("Monthly repayment: {}", format_gbp(quote.monthly_repayment));
    println!("Total repayment: {}", format_gbp(quote.total_repayment));
}

/// Renders a violation as the caller-facing rejection message. The
/// structured values carry the thresholds; this is the only place they
/// become text.
pub fn violation_message(violation: &AmountViolation) -> String {
    match violation {
        AmountViolation::NotAStepMultiple { amount, increment } => format!(
            "The requested amount of {} is not valid, amounts move in increments of {}.",
            format_gbp(*amount),
            format_gbp(*increment)
        ),
        AmountViolation::BelowMinimum { amount, minimum } => format!(
            "The requested amount of {} is below the minimum loan of {}.",
            format_gbp(*amount),
            format_gbp(*minimum)
        ),
        AmountViolation::AboveMaximum { amount, maximum } => format!(
            "The requested amount of {} is above the maximum loan of {}.",
            format_gbp(*amount),
            format_gbp(*maximum)
        ),
        AmountViolation::PoolInsufficient { amount } => format!(
            "It is not possible to provide a quote of {} from the current market.",
            format_gbp(*amount)
        ),
    }
}

/// Two decimal places with thousands grouping, e.g. 15000 -> "£15,000.00".
fn format_gbp(value: f64) -> String {
    let formatted = format!("{:.2}", value.abs());
    let (whole, frac) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));

    let mut grouped = String::new();
    for (i, c) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}£{grouped}.{frac}")
}
