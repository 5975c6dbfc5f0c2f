//! Normalizes the raw course list into [`CourseRecord`]s

use tracing::{debug, info};

use crate::config::FilterConfig;
use crate::models::{CourseRecord, RawCourse};
use crate::omscentral::PayloadError;

/// Tag whose workload is replaced, see [`correct_dc_workload`]
pub const OUTLIER_TAG: &str = "DC";

/// Cleans the raw course list and drops courses with too few reviews
pub fn clean(raw: &[RawCourse], filter: &FilterConfig) -> Result<Vec<CourseRecord>, PayloadError> {
    let candidates = if filter.prefilter_positive {
        let reviewed: Vec<&RawCourse> = raw
            .iter()
            .filter(|course| course.review_count.unwrap_or(0) > 0)
            .collect();
        info!(
            reviewed = reviewed.len(),
            total = raw.len(),
            "Dropped courses without reviews"
        );
        reviewed
    } else {
        raw.iter().collect()
    };

    let mut courses = Vec::with_capacity(candidates.len());
    for course in candidates {
        let code = course
            .codes
            .first()
            .ok_or_else(|| PayloadError::MissingCode(course.name.clone()))?;
        let review_count = match course.review_count {
            Some(count) if count >= filter.min_review_count => count,
            _ => continue,
        };
        let (Some(rating), Some(difficulty), Some(workload)) =
            (course.rating, course.difficulty, course.workload)
        else {
            debug!(course = %course.name, "Course has reviews but no summary metrics, skipping");
            continue;
        };
        courses.push(CourseRecord {
            name: course.name.clone(),
            code: code.clone(),
            department: department(code).to_string(),
            tag: tag(&course.name, course.tags.as_deref()),
            description: course.description.clone(),
            review_count,
            rating,
            difficulty,
            workload,
        });
    }

    Ok(correct_dc_workload(courses))
}

/// Department part of a course code, e.g. `"CS"` for `"CS-6515"`
pub fn department(code: &str) -> &str {
    code.split('-').next().unwrap_or(code)
}

/// The first explicit tag if there is one, otherwise the initials of the capitalized words
pub fn tag(name: &str, tags: Option<&[String]>) -> String {
    if let Some(first) = tags.and_then(|tags| tags.first()) {
        return first.clone();
    }
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .filter(|initial| initial.is_uppercase())
        .collect()
}

/// Replaces the workload of every "DC" course with the largest workload in the table.
///
/// Distributed Computing reports a far higher workload than anything else. Its workload is first
/// zeroed and then set to the table maximum, so the result is the highest workload among the other
/// courses only because "DC" was already the maximum.
pub fn correct_dc_workload(mut courses: Vec<CourseRecord>) -> Vec<CourseRecord> {
    if !courses.iter().any(|course| course.tag == OUTLIER_TAG) {
        return courses;
    }
    for course in courses.iter_mut().filter(|course| course.tag == OUTLIER_TAG) {
        course.workload = 0.0;
    }
    let max_workload = courses
        .iter()
        .map(|course| course.workload)
        .fold(f64::NEG_INFINITY, f64::max);
    for course in courses.iter_mut().filter(|course| course.tag == OUTLIER_TAG) {
        debug!(course = %course.name, workload = max_workload, "Corrected outlier workload");
        course.workload = max_workload;
    }
    courses
}
