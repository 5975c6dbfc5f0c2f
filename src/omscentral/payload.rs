use scraper::{ElementRef, Html, Selector};
use serde_json::Value;

use super::title_case;
use crate::models::{RawCourse, ReviewRecord};

const COURSES_PATH: [&str; 3] = ["props", "pageProps", "courses"];
const UNKNOWN_SEMESTER: &str = "Unknown Semester";
const BADGE: &str = r#"span[class="inline-flex items-center px-2.5 py-0.5 rounded-full text-xs font-medium bg-green-100 text-green-800"]"#;

#[derive(Debug, thiserror::Error)]
pub enum PayloadError {
    #[error("page has no <script> element")]
    NoScript,
    #[error("embedded payload is not valid JSON")]
    Json(#[from] serde_json::Error),
    #[error("embedded payload has no key {0:?}")]
    MissingKey(String),
    #[error("course {0:?} has no course code")]
    MissingCode(String),
}

/// Reads the course list out of the JSON embedded in the landing page's last `<script>` tag
pub fn extract_courses(page: &str) -> Result<Vec<RawCourse>, PayloadError> {
    let document = Html::parse_document(page);
    let script_find = Selector::parse("script").unwrap();
    let script = document
        .select(&script_find)
        .last()
        .ok_or(PayloadError::NoScript)?;
    let json_text: String = script.text().collect();
    let mut payload: Value = serde_json::from_str(&json_text)?;

    let mut node = &mut payload;
    for key in COURSES_PATH {
        node = node
            .get_mut(key)
            .ok_or_else(|| PayloadError::MissingKey(key.to_string()))?;
    }
    Ok(serde_json::from_value(node.take())?)
}

/// Reviews kept from one review page, and how many list items were passed over
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ReviewExtraction {
    pub reviews: Vec<ReviewRecord>,
    /// Items with a semester whose badges were missing or not whole numbers
    pub skipped: usize,
    /// Items labelled "Unknown Semester"
    pub unknown_semester: usize,
}

/// Collects every review on a course's review page
///
/// A review is kept only when its rating, difficulty and workload badges are all present and all
/// whole numbers. Anything else is counted in [`ReviewExtraction::skipped`].
pub fn extract_reviews(page: &str, course_name: &str) -> ReviewExtraction {
    let document = Html::parse_document(page);
    let item_find = Selector::parse("li").unwrap();
    let semester_find = Selector::parse("span.capitalize").unwrap();
    let badge_find = Selector::parse(BADGE).unwrap();
    let mut extraction = ReviewExtraction::default();

    for item in document.select(&item_find) {
        let Some(label) = item.select(&semester_find).next() else {
            continue;
        };
        let semester = title_case(&element_text(label));
        if semester == UNKNOWN_SEMESTER {
            extraction.unknown_semester += 1;
            continue;
        }

        let (mut rating, mut difficulty, mut workload) = (None, None, None);
        for badge in item.select(&badge_find) {
            let text = element_text(badge);
            if text.contains("Rating") {
                rating = Some(badge_value(&text, " / ", "Rating: ".len()));
            }
            if text.contains("Difficulty") {
                difficulty = Some(badge_value(&text, " / ", "Difficulty: ".len()));
            }
            if text.contains("Workload") {
                workload = Some(badge_value(&text, " hours / ", "Workload: ".len()));
            }
        }

        match (
            rating.as_deref().and_then(parse_whole),
            difficulty.as_deref().and_then(parse_whole),
            workload.as_deref().and_then(parse_whole),
        ) {
            (Some(rating), Some(difficulty), Some(workload)) => {
                extraction.reviews.push(ReviewRecord {
                    name: course_name.to_string(),
                    semester,
                    rating,
                    difficulty,
                    workload,
                })
            }
            _ => extraction.skipped += 1,
        }
    }

    extraction
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect()
}

/// Text before `delimiter`, without its first `prefix_len` characters
fn badge_value(text: &str, delimiter: &str, prefix_len: usize) -> String {
    let head = text.split(delimiter).next().unwrap_or_default();
    head.chars().skip(prefix_len).collect()
}

fn parse_whole(value: &str) -> Option<f64> {
    if value.is_empty() || !value.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    value.parse().ok()
}
