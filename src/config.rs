//! Run configuration, read from `config.toml`
//!
//! Every field has a default, so a missing file (or a partial one) falls back to the values the
//! report has always been generated with.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::fetch::{Backoff, RetryPolicy};

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub log_level: LogLevel,
    pub site: SiteConfig,
    pub http: HttpConfig,
    pub filter: FilterConfig,
    pub report: ReportConfig,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(transparent)]
pub struct LogLevel(pub String);

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel("info".to_string())
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct SiteConfig {
    pub base_url: String,
    pub user_agent: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            base_url: "https://www.omscentral.com".to_string(),
            user_agent: "Mozilla/5.0 (Windows NT 6.1; WOW64; rv:20.0) Gecko/20100101 Firefox/20.0"
                .to_string(),
        }
    }
}

impl SiteConfig {
    /// Landing page holding the embedded course list
    pub fn landing_url(&self) -> String {
        format!("{}/", self.base_url.trim_end_matches('/'))
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct HttpConfig {
    pub max_attempts: u32,
    pub retry_delay_secs: u64,
    pub backoff: Backoff,
    pub timeout_secs: Option<u64>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        HttpConfig {
            max_attempts: 2,
            retry_delay_secs: 10,
            backoff: Backoff::Fixed,
            timeout_secs: None,
        }
    }
}

impl HttpConfig {
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_attempts: self.max_attempts.max(1),
            delay: Duration::from_secs(self.retry_delay_secs),
            backoff: self.backoff,
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct FilterConfig {
    pub min_review_count: u32,
    pub prefilter_positive: bool,
}

impl Default for FilterConfig {
    fn default() -> Self {
        FilterConfig {
            min_review_count: 5,
            prefilter_positive: false,
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ReportConfig {
    pub output: PathBuf,
    pub title: String,
    pub subtitle: String,
    /// Prefix used in chart titles, e.g. "OMSCS Course Rating"
    pub subject: String,
    pub source_name: String,
    pub article_url: Option<String>,
    pub source_code_url: Option<String>,
    pub author: Option<String>,
    pub analytics_id: Option<String>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            output: PathBuf::from("omscs_courses_rating_difficulty.html"),
            title: "Georgia Tech OMSCS".to_string(),
            subtitle: "Summary of Course Difficulty and Rating".to_string(),
            subject: "OMSCS".to_string(),
            source_name: "OMSCentral".to_string(),
            article_url: None,
            source_code_url: None,
            author: None,
            analytics_id: None,
        }
    }
}

impl Config {
    /// Reads the config at `path`, falling back to defaults when the file does not exist
    pub fn load(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(file) => toml::from_str(&file)
                .with_context(|| format!("failed to parse config {}", path.display())),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Config::default()),
            Err(err) => {
                Err(err).with_context(|| format!("failed to read config {}", path.display()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let config = Config::load(Path::new("does/not/exist.toml")).unwrap();
        assert_eq!(config.filter.min_review_count, 5);
        assert_eq!(config.http.max_attempts, 2);
        assert_eq!(config.site.landing_url(), "https://www.omscentral.com/");
        assert_eq!(
            config.report.output,
            PathBuf::from("omscs_courses_rating_difficulty.html")
        );
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config: Config = toml::from_str(
            r#"
            log_level = "debug"

            [filter]
            min_review_count = 10

            [http]
            backoff = "exponential"
            retry_delay_secs = 1
            "#,
        )
        .unwrap();
        assert_eq!(config.log_level.0, "debug");
        assert_eq!(config.filter.min_review_count, 10);
        assert!(!config.filter.prefilter_positive);
        let policy = config.http.retry_policy();
        assert_eq!(policy.max_attempts, 2);
        assert_eq!(policy.delay, Duration::from_secs(1));
        assert_eq!(policy.backoff, Backoff::Exponential);
        assert_eq!(config.report.title, "Georgia Tech OMSCS");
    }
}
