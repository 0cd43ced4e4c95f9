//! Command-line front-end: argument parsing, logging setup and rendering.

use std::io::Write;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{BillingPeriod, BillingPeriods, CutoffDay, Month, PeriodYear};

#[derive(Parser, Debug, Clone)]
#[command(name = "billing-periods")]
#[command(about = "Print the monthly billing periods of a year for a cutoff day")]
pub struct CliConfig {
    /// Day of month the billing cycle closes on (1-31)
    #[arg(long, env = "BILLING_CUTOFF", allow_negative_numbers = true)]
    pub cutoff: i64,

    /// Four-digit year starting with 2
    #[arg(long, env = "BILLING_YEAR")]
    pub year: String,

    /// Only print the period of this month (1-12)
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=12))]
    pub month: Option<u8>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

pub fn init_logger(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("billing_periods=debug,info"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("billing_periods=info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

/// Generates the periods described by `config` and writes them to `out`.
///
/// # Errors
/// Fails on an invalid cutoff or year, or when `out` cannot be written.
pub fn run(config: &CliConfig, out: &mut impl Write) -> anyhow::Result<()> {
    tracing::debug!(?config, "parsed configuration");

    let year = config
        .year
        .parse::<PeriodYear>()
        .context("--year must be a four-digit year starting with 2")?;
    let cutoff = CutoffDay::new(config.cutoff).context("--cutoff must be a day of month")?;
    let periods = BillingPeriods::for_year(cutoff, year)?;
    tracing::info!(%cutoff, %year, count = periods.len(), "generated billing periods");

    match config.month {
        Some(month) => {
            let month = Month::new(month)?;
            let period = periods
                .for_month(month)
                .with_context(|| format!("no period for month {month}"))?;
            match config.format {
                OutputFormat::Text => writeln!(out, "{}", text_line(period))?,
                OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(period)?)?,
            }
        },
        None => match config.format {
            OutputFormat::Text => {
                for period in &periods {
                    writeln!(out, "{}", text_line(period))?;
                }
            },
            OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&periods)?)?,
        },
    }

    Ok(())
}

fn text_line(period: &BillingPeriod) -> String {
    let month = period.month();
    format!(
        "{}-{}  {} -> {} ({} days)",
        month.year(),
        month.month(),
        period.start_date(),
        period.end_date(),
        period.days()
    )
}
