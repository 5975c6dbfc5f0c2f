//! Semester labels and their chronological ordering
//!
//! Review pages label every review with a term such as `"Fall 2021"`. Charts step through the
//! terms in order of year, then Spring, Summer, Fall; the synthetic `"All"` bucket holding the
//! all-time summary sorts after every dated term.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::Serializer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Period {
    Spring,
    Summer,
    Fall,
    All,
}

impl Period {
    pub fn as_str(self) -> &'static str {
        match self {
            Period::Spring => "Spring",
            Period::Summer => "Summer",
            Period::Fall => "Fall",
            Period::All => "All",
        }
    }
}

impl FromStr for Period {
    type Err = SemesterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Spring" => Ok(Period::Spring),
            "Summer" => Ok(Period::Summer),
            "Fall" => Ok(Period::Fall),
            "All" => Ok(Period::All),
            other => Err(SemesterError::UnknownPeriod(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SemesterError {
    #[error("unknown semester period {0:?}")]
    UnknownPeriod(String),
    #[error("semester label {0:?} has no year")]
    MissingYear(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Semester {
    pub period: Period,
    /// Trailing token of the label. Compared as text, which orders four digit years correctly.
    /// `None` for the all-time bucket.
    pub year: Option<String>,
}

impl Semester {
    pub fn all() -> Self {
        Semester {
            period: Period::All,
            year: None,
        }
    }

    pub fn is_all(&self) -> bool {
        self.period == Period::All
    }

    /// Splits a label into its leading period token and trailing year token
    pub fn parse(label: &str) -> Result<Self, SemesterError> {
        let mut tokens = label.split_whitespace();
        let first = tokens
            .next()
            .ok_or_else(|| SemesterError::UnknownPeriod(String::new()))?;
        let period: Period = first.parse()?;
        if period == Period::All {
            return Ok(Semester::all());
        }
        let year = tokens
            .last()
            .ok_or_else(|| SemesterError::MissingYear(label.to_string()))?;
        Ok(Semester {
            period,
            year: Some(year.to_string()),
        })
    }

    fn sort_key(&self) -> (bool, Option<&str>, Period) {
        (self.year.is_none(), self.year.as_deref(), self.period)
    }
}

impl Ord for Semester {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

impl PartialOrd for Semester {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// `"Fall 2021"`; the all-time bucket is plain `"All"` rather than `"All All"`
impl fmt::Display for Semester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.year {
            Some(year) => write!(f, "{} {}", self.period.as_str(), year),
            None => f.write_str(self.period.as_str()),
        }
    }
}

pub fn serialize_label<S: Serializer>(
    semester: &Option<Semester>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match semester {
        Some(semester) => serializer.collect_str(semester),
        None => serializer.serialize_str(""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_by_year_then_period() {
        let mut semesters: Vec<Semester> = ["Fall 2021", "Spring 2021", "All", "Summer 2021"]
            .iter()
            .map(|label| Semester::parse(label).unwrap())
            .collect();
        semesters.sort();
        let labels: Vec<String> = semesters.iter().map(ToString::to_string).collect();
        assert_eq!(labels, ["Spring 2021", "Summer 2021", "Fall 2021", "All"]);
    }

    #[test]
    fn all_sorts_after_every_year() {
        let all = Semester::all();
        let early = Semester::parse("Spring 2014").unwrap();
        let late = Semester::parse("Fall 2030").unwrap();
        assert!(early < late);
        assert!(late < all);
        assert!(Semester::parse("Fall 2020").unwrap() < Semester::parse("Spring 2021").unwrap());
    }

    #[test]
    fn all_time_label_is_plain_all() {
        assert_eq!(Semester::all().to_string(), "All");
        assert_eq!(Semester::parse("All All").unwrap(), Semester::all());
    }

    #[test]
    fn rejects_unknown_periods() {
        assert_eq!(
            Semester::parse("Winter 2021"),
            Err(SemesterError::UnknownPeriod("Winter".to_string()))
        );
        assert_eq!(
            Semester::parse("Fall"),
            Err(SemesterError::MissingYear("Fall".to_string()))
        );
        assert!(Semester::parse("").is_err());
    }
}
