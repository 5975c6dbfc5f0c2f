//! Scrape, clean, aggregate, chart, write: one run of the report

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::aggregate;
use crate::charts::ChartSet;
use crate::clean::clean;
use crate::config::Config;
use crate::fetch::PageSource;
use crate::models::ChartData;
use crate::omscentral::{extract_courses, extract_reviews, review_url};
use crate::report;

/// What a run collected, for logging
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub courses_listed: usize,
    pub courses_kept: usize,
    pub reviews: usize,
    pub skipped_reviews: usize,
    pub unknown_semester: usize,
    pub unrecognized_semesters: usize,
    pub table_rows: usize,
    pub charts: usize,
}

/// Scrapes the course list and every kept course's reviews into chart tables
pub fn collect(config: &Config, source: &dyn PageSource) -> Result<(ChartData, RunSummary)> {
    let mut summary = RunSummary::default();

    let landing_url = config.site.landing_url();
    let landing = source
        .fetch(&landing_url)
        .with_context(|| format!("failed to fetch course list from {landing_url}"))?;
    let raw = extract_courses(&landing).context("failed to read course list")?;
    summary.courses_listed = raw.len();

    let courses = clean(&raw, &config.filter).context("failed to clean course list")?;
    summary.courses_kept = courses.len();
    info!(
        listed = summary.courses_listed,
        kept = summary.courses_kept,
        min_reviews = config.filter.min_review_count,
        "Cleaned course list"
    );

    let mut reviews = Vec::new();
    for course in &courses {
        let url = review_url(&config.site.base_url, &course.name);
        let page = source
            .fetch(&url)
            .with_context(|| format!("failed to fetch reviews of {}", course.name))?;
        let extraction = extract_reviews(&page, &course.name);
        info!(
            course = %course.name,
            kept = extraction.reviews.len(),
            skipped = extraction.skipped,
            "Scraped reviews"
        );
        if extraction.unknown_semester > 0 {
            debug!(
                course = %course.name,
                count = extraction.unknown_semester,
                "Reviews without a semester"
            );
        }
        summary.skipped_reviews += extraction.skipped;
        summary.unknown_semester += extraction.unknown_semester;
        reviews.extend(extraction.reviews);
    }
    summary.reviews = reviews.len();

    let summaries = aggregate::summarize(&reviews);
    summary.unrecognized_semesters = summaries.unrecognized;
    let merged = aggregate::merge_with_courses(&summaries.rows, &courses);
    let combined = aggregate::combine(merged, &courses);
    let by_semester = aggregate::per_semester(&combined);
    summary.table_rows = combined.len();

    Ok((
        ChartData {
            courses,
            combined,
            by_semester,
        },
        summary,
    ))
}

/// Runs the whole report and overwrites the output file
///
/// Nothing is written until every chart has been rendered, so a failed run leaves the previous
/// report in place.
pub fn run(
    config: &Config,
    source: &dyn PageSource,
    table_csv: Option<&Path>,
    generated_at: DateTime<Utc>,
) -> Result<RunSummary> {
    let (data, mut summary) = collect(config, source)?;

    let charts = ChartSet::build(&data, &config.report.subject);
    summary.charts = charts.figure_count();
    let html = report::render(config, &charts, generated_at)
        .context("failed to render report")?;

    report::write_report(&config.report.output, &html)?;
    info!(path = %config.report.output.display(), charts = summary.charts, "Wrote report");

    if let Some(path) = table_csv {
        report::write_table_file(&data.combined, path)?;
        info!(path = %path.display(), rows = summary.table_rows, "Wrote chart table");
    }

    Ok(summary)
}
