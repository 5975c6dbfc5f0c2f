//! Assembles the HTML report and writes the output files

use std::fmt::{self, Write as _};
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};

use crate::charts::ChartSet;
use crate::config::Config;
use crate::models::CombinedRow;

const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";
/// Column names of [`CombinedRow`] as serialized
const TABLE_HEADER: [&str; 10] = [
    "name",
    "semester",
    "tag",
    "dept",
    "code",
    "description",
    "reviewCount",
    "rating",
    "difficulty",
    "workload",
];

/// Renders the full report page
///
/// The timestamp is written in UTC and converted to the reader's timezone by an inline script.
pub fn render(
    config: &Config,
    charts: &ChartSet,
    generated_at: DateTime<Utc>,
) -> Result<String, fmt::Error> {
    let report = &config.report;
    let site = config.site.landing_url();
    let source = text(&report.source_name);
    let timestamp = generated_at.to_rfc3339_opts(SecondsFormat::Secs, true);

    let mut html = String::new();
    writeln!(html, "<!DOCTYPE html>")?;
    writeln!(html, "<html lang=\"en\">")?;
    writeln!(html, "<head>")?;
    writeln!(html, "<meta charset=\"UTF-8\">")?;
    writeln!(html, "<title>{}</title>", text(&report.title))?;
    writeln!(html, "<script src=\"{PLOTLY_CDN}\" charset=\"utf-8\"></script>")?;
    writeln!(html, "</head>")?;
    writeln!(html, "<body>")?;
    writeln!(
        html,
        "<h1>{}</h1><h2>{}</h2>",
        text(&report.title),
        text(&report.subtitle)
    )?;
    writeln!(html, "<h3>Last updated: <span id='timestring'></span></h3>")?;
    writeln!(
        html,
        "<script>var date = new Date('{timestamp}'); \
         document.getElementById('timestring').innerHTML += date.toString()</script>"
    )?;
    writeln!(
        html,
        "The data is pulled from <a href=\"{}\">{source}</a> daily to update the summary \
         information in this page.<br><br>",
        attr(&site)
    )?;
    writeln!(
        html,
        "Credits to <a href=\"{}\">{source}</a> for the information, review and rating of the \
         courses. I do not own any of this data.",
        attr(&site)
    )?;
    html.push_str(&render_links(config));

    for figure in &charts.overview {
        html.push_str(&figure.to_html());
    }
    writeln!(
        html,
        "<h2>Plots by Semester</h2> <p>Slide the slider below each plot to see the data for each \
         semester.</p>"
    )?;
    for figure in &charts.by_semester {
        html.push_str(&figure.to_html());
    }
    for figure in &charts.distributions {
        html.push_str(&figure.to_html());
    }
    if let Some(id) = &report.analytics_id {
        html.push_str(&analytics_snippet(id));
    }

    writeln!(html, "</body>")?;
    writeln!(html, "</html>")?;
    Ok(html)
}

fn render_links(config: &Config) -> String {
    let report = &config.report;
    let mut links = Vec::new();
    if let Some(url) = &report.article_url {
        links.push(format!("<a href=\"{}\">Explanatory Article</a>", attr(url)));
    }
    if let Some(url) = &report.source_code_url {
        links.push(format!("<a href=\"{}\">Source Code</a>", attr(url)));
    }
    if let Some(author) = &report.author {
        links.push(format!("Created by {}", text(author)));
    }
    if links.is_empty() {
        return String::new();
    }
    format!(
        "<h3>Explanation and Source Code</h3>\n{}\n",
        links.join(" | ")
    )
}

fn analytics_snippet(id: &str) -> String {
    let id = attr(id);
    format!(
        r#"<!-- Google tag (gtag.js) -->
<script async src="https://www.googletagmanager.com/gtag/js?id={id}"></script>
<script>
  window.dataLayer = window.dataLayer || [];
  function gtag(){{dataLayer.push(arguments);}}
  gtag('js', new Date());

  gtag('config', '{id}');
</script>
"#
    )
}

/// Replaces whatever is at `path` with `html`
pub fn write_report(path: &Path, html: &str) -> Result<()> {
    fs::write(path, html).with_context(|| format!("failed to write report {}", path.display()))
}

/// Writes the combined chart table as CSV, header first even when there are no rows
pub fn write_table_csv<W: std::io::Write>(rows: &[CombinedRow], writer: W) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    writer
        .write_record(TABLE_HEADER)
        .context("failed to write table header")?;
    for row in rows {
        writer.serialize(row).context("failed to serialize table row")?;
    }
    writer.flush().context("failed to flush table")?;
    Ok(())
}

pub fn write_table_file(rows: &[CombinedRow], path: &Path) -> Result<()> {
    let file = fs::File::create(path)
        .with_context(|| format!("failed to create table {}", path.display()))?;
    write_table_csv(rows, file)
}
