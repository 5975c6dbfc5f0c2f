use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use tracing::info;

mod aggregate;
mod charts;
mod clean;
mod config;
mod fetch;
mod logging;
mod models;
mod omscentral;
mod pipeline;
mod report;
mod semester;

use config::{Config, LogLevel};
use fetch::HttpSource;

#[derive(Parser, Debug)]
#[command(name = "omscs_review_plots")]
#[command(
    about = "Scrape OMS Central course reviews and plot them into an HTML report",
    long_about = None
)]
struct Cli {
    /// TOML config file; defaults are used when it does not exist
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,
    /// Report file to overwrite
    #[arg(long)]
    output: Option<PathBuf>,
    /// Minimum all-time review count for a course to be plotted
    #[arg(long)]
    min_reviews: Option<u32>,
    /// Also write the chart table as CSV
    #[arg(long)]
    table_csv: Option<PathBuf>,
    /// Log filter, e.g. `debug`
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(&cli.config)?;
    if let Some(output) = cli.output {
        config.report.output = output;
    }
    if let Some(min_reviews) = cli.min_reviews {
        config.filter.min_review_count = min_reviews;
    }
    if let Some(level) = cli.log_level {
        config.log_level = LogLevel(level);
    }
    logging::setup_logging(&config.log_level.0);

    if !cli.config.exists() {
        info!(path = %cli.config.display(), "No config file, using defaults");
    }

    let source = HttpSource::new(
        &config.site.user_agent,
        config.http.timeout_secs.map(Duration::from_secs),
        config.http.retry_policy(),
    )
    .context("failed to build HTTP client")?;

    let summary = pipeline::run(&config, &source, cli.table_csv.as_deref(), Utc::now())?;
    info!(
        courses = summary.courses_kept,
        reviews = summary.reviews,
        skipped_reviews = summary.skipped_reviews,
        unknown_semester = summary.unknown_semester,
        unrecognized_semesters = summary.unrecognized_semesters,
        rows = summary.table_rows,
        "Report updated"
    );
    Ok(())
}
