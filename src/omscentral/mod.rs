//! Module for scraping course and review data from the OMS Central website
//!
//! The landing page embeds every course as JSON in its last `<script>` tag; each course then has
//! its own review page listing individual reviews as `<li>` items.

use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

mod payload;

pub use payload::{extract_courses, extract_reviews, PayloadError};

/// URL of the review page for a course
pub fn review_url(base_url: &str, course_name: &str) -> String {
    format!(
        "{}/courses/{}/reviews",
        base_url.trim_end_matches('/'),
        slugify(course_name)
    )
}

/// Turns a course name into the URL slug the site uses
///
/// Accents are folded to ASCII, apostrophes dropped, and every other run of characters outside
/// `[a-z0-9]` becomes a single `-`.
pub fn slugify(text: &str) -> String {
    static QUOTES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"['\u{2019}]+").unwrap());
    static DISALLOWED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z0-9]+").unwrap());

    let folded: String = text
        .nfkd()
        .filter(|c| !unicode_normalization::char::is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase();
    let unquoted = QUOTES.replace_all(&folded, "");
    DISALLOWED
        .replace_all(&unquoted, "-")
        .trim_matches('-')
        .to_string()
}

/// Upper-cases the first letter of every run of letters and lower-cases the rest
pub(crate) fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut previous_is_letter = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if previous_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            previous_is_letter = true;
        } else {
            out.push(c);
            previous_is_letter = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_match_site_urls() {
        assert_eq!(
            slugify("Machine Learning for Trading"),
            "machine-learning-for-trading"
        );
        assert_eq!(
            slugify("Human-Computer Interaction"),
            "human-computer-interaction"
        );
        assert_eq!(
            slugify("Special Topics: Game AI"),
            "special-topics-game-ai"
        );
        assert_eq!(slugify("Developer's Guide (C++)"), "developers-guide-c");
        assert_eq!(slugify("Café Économie"), "cafe-economie");
    }

    #[test]
    fn review_url_joins_base_and_slug() {
        assert_eq!(
            review_url("https://www.omscentral.com/", "Graduate Algorithms"),
            "https://www.omscentral.com/courses/graduate-algorithms/reviews"
        );
    }

    #[test]
    fn title_case_capitalizes_words() {
        assert_eq!(title_case("fall 2021"), "Fall 2021");
        assert_eq!(title_case("UNKNOWN SEMESTER"), "Unknown Semester");
        assert_eq!(title_case("summer  2019"), "Summer  2019");
    }
}
