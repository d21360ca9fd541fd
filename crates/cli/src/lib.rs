//! `checkout-report`: load a snapshot document and print its statistics.
//!
//! Settings come from the command line, falling back to `CHECKOUT_*`
//! environment variables and then to the report defaults.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use checkout_analytics::AggregationEngine;
use checkout_reporting::{ReportConfig, ReportFormatter};

/// Descriptive statistics for one day of checkout data.
#[derive(Parser, Debug)]
#[command(name = "checkout-report", version, about)]
pub struct Args {
    /// Path to the JSON snapshot document
    #[arg(env = "CHECKOUT_SNAPSHOT")]
    pub snapshot: PathBuf,

    /// Length of the revenue intervals, in minutes
    #[arg(
        long,
        env = "CHECKOUT_INTERVAL_MINUTES",
        default_value_t = 15,
        value_parser = clap::value_parser!(i64).range(1..)
    )]
    pub interval_minutes: i64,

    /// Zip codes printed per line in the product listing
    #[arg(
        long,
        default_value_t = 8,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub zip_codes_per_line: usize,

    /// Currency label printed next to bills
    #[arg(long, default_value = "euro")]
    pub currency: String,

    /// Disable ANSI highlighting
    #[arg(long, env = "CHECKOUT_PLAIN")]
    pub plain: bool,
}

impl Args {
    pub fn report_config(&self) -> ReportConfig {
        let base = if self.plain {
            ReportConfig::plain()
        } else {
            ReportConfig::default()
        };

        base.with_interval_minutes(self.interval_minutes)
            .with_zip_codes_per_line(self.zip_codes_per_line)
            .with_currency(self.currency.clone())
    }
}

/// Load the snapshot named by `args` and render the full report.
pub fn run(args: &Args) -> anyhow::Result<String> {
    let config = args.report_config();

    tracing::info!(
        snapshot = %args.snapshot.display(),
        interval_minutes = config.interval_minutes,
        zip_codes_per_line = config.zip_codes_per_line,
        plain = args.plain,
        "config_loaded"
    );

    let snapshot = checkout_loader::load_from_path(&args.snapshot)
        .with_context(|| format!("failed to load snapshot {}", args.snapshot.display()))?;

    let formatter = ReportFormatter::new(AggregationEngine::new(&snapshot), config);
    let report = formatter.render().context("failed to render report")?;

    tracing::info!(bytes = report.len(), "report_rendered");
    Ok(report)
}
