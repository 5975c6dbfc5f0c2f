//! Groups scraped reviews by semester and merges them with the all-time course summaries

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

use tracing::warn;

use crate::models::{CombinedRow, CourseRecord, ReviewRecord, SemesterSummary};
use crate::semester::Semester;

/// Per-semester means, plus the number of groups whose label was not a recognizable semester
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Summaries {
    pub rows: Vec<SemesterSummary>,
    pub unrecognized: usize,
}

#[derive(Default)]
struct Totals {
    rating: f64,
    difficulty: f64,
    workload: f64,
    count: u32,
}

/// Averages rating, difficulty and workload per (course, semester label)
///
/// Groups come out ordered by course name, then label.
pub fn summarize(reviews: &[ReviewRecord]) -> Summaries {
    let mut groups: BTreeMap<(&str, &str), Totals> = BTreeMap::new();
    for review in reviews {
        let totals = groups
            .entry((review.name.as_str(), review.semester.as_str()))
            .or_default();
        totals.rating += review.rating;
        totals.difficulty += review.difficulty;
        totals.workload += review.workload;
        totals.count += 1;
    }

    let mut summaries = Summaries::default();
    for ((name, label), totals) in groups {
        let semester = match Semester::parse(label) {
            Ok(semester) => semester,
            Err(err) => {
                warn!(course = name, label, error = %err, "Skipping unrecognized semester");
                summaries.unrecognized += 1;
                continue;
            }
        };
        let count = f64::from(totals.count);
        summaries.rows.push(SemesterSummary {
            name: name.to_string(),
            semester,
            rating: totals.rating / count,
            difficulty: totals.difficulty / count,
            workload: totals.workload / count,
            review_count: totals.count,
        });
    }
    summaries
}

/// Outer join of semester summaries with course metadata on course name
///
/// Summaries of unknown courses keep empty metadata; courses without any summary become a row
/// with no semester. Rows are ordered by name.
pub fn merge_with_courses(
    summaries: &[SemesterSummary],
    courses: &[CourseRecord],
) -> Vec<CombinedRow> {
    let by_name: HashMap<&str, &CourseRecord> = courses
        .iter()
        .map(|course| (course.name.as_str(), course))
        .collect();

    let mut rows: Vec<CombinedRow> = summaries
        .iter()
        .map(|summary| {
            let course = by_name.get(summary.name.as_str()).copied();
            CombinedRow {
                name: summary.name.clone(),
                semester: Some(summary.semester.clone()),
                tag: course.map(|c| c.tag.clone()),
                department: course.map(|c| c.department.clone()),
                code: course.map(|c| c.code.clone()),
                description: course.and_then(|c| c.description.clone()),
                review_count: Some(summary.review_count),
                rating: Some(summary.rating),
                difficulty: Some(summary.difficulty),
                workload: Some(summary.workload),
            }
        })
        .collect();

    for course in courses {
        if summaries.iter().any(|summary| summary.name == course.name) {
            continue;
        }
        rows.push(CombinedRow {
            name: course.name.clone(),
            semester: None,
            tag: Some(course.tag.clone()),
            department: Some(course.department.clone()),
            code: Some(course.code.clone()),
            description: course.description.clone(),
            review_count: None,
            rating: None,
            difficulty: None,
            workload: None,
        });
    }

    rows.sort_by(|a, b| a.name.cmp(&b.name));
    rows
}

/// Appends the all-time view of every course and sorts the table chronologically
///
/// The sort is stable: within one semester, rows keep the order they were given in. Rows without a
/// semester go last.
pub fn combine(merged: Vec<CombinedRow>, courses: &[CourseRecord]) -> Vec<CombinedRow> {
    let mut rows = merged;
    rows.extend(courses.iter().map(CombinedRow::from));
    rows.sort_by(|a, b| compare_semesters(a.semester.as_ref(), b.semester.as_ref()));
    rows
}

fn compare_semesters(a: Option<&Semester>, b: Option<&Semester>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Rows belonging to a dated semester, for the semester-animated charts
pub fn per_semester(combined: &[CombinedRow]) -> Vec<CombinedRow> {
    combined
        .iter()
        .filter(|row| row.semester.is_some() && !row.is_all_time())
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review(
        name: &str,
        semester: &str,
        rating: f64,
        difficulty: f64,
        workload: f64,
    ) -> ReviewRecord {
        ReviewRecord {
            name: name.to_string(),
            semester: semester.to_string(),
            rating,
            difficulty,
            workload,
        }
    }

    fn course(name: &str, tag: &str) -> CourseRecord {
        CourseRecord {
            name: name.to_string(),
            code: "CS-6000".to_string(),
            department: "CS".to_string(),
            tag: tag.to_string(),
            description: Some(format!("About {name}")),
            review_count: 10,
            rating: 4.0,
            difficulty: 3.0,
            workload: 12.0,
        }
    }

    fn labels(rows: &[CombinedRow]) -> Vec<String> {
        rows.iter()
            .map(|row| row.semester.as_ref().map(ToString::to_string).unwrap_or_default())
            .collect()
    }

    #[test]
    fn means_and_counts_per_semester() {
        let summaries = summarize(&[
            review("Graduate Algorithms", "Fall 2021", 4.0, 4.0, 20.0),
            review("Graduate Algorithms", "Fall 2021", 2.0, 5.0, 30.0),
            review("Graduate Algorithms", "Spring 2022", 3.0, 4.0, 18.0),
            review("Computer Networks", "Fall 2021", 5.0, 2.0, 8.0),
            review("Computer Networks", "Winter 2021", 5.0, 2.0, 8.0),
        ]);
        assert_eq!(summaries.unrecognized, 1);
        assert_eq!(summaries.rows.len(), 3);

        let networks = &summaries.rows[0];
        assert_eq!(networks.name, "Computer Networks");
        assert_eq!(networks.review_count, 1);

        let fall = &summaries.rows[1];
        assert_eq!(fall.name, "Graduate Algorithms");
        assert_eq!(fall.semester.to_string(), "Fall 2021");
        assert_eq!(fall.rating, 3.0);
        assert_eq!(fall.difficulty, 4.5);
        assert_eq!(fall.workload, 25.0);
        assert_eq!(fall.review_count, 2);
    }

    #[test]
    fn no_reviews_no_summaries() {
        assert_eq!(summarize(&[]), Summaries::default());
    }

    #[test]
    fn outer_join_keeps_unmatched_rows() {
        let summaries = summarize(&[
            review("Graduate Algorithms", "Fall 2021", 4.0, 4.0, 20.0),
            review("Retired Course", "Spring 2015", 3.0, 3.0, 10.0),
        ])
        .rows;
        let courses = [
            course("Graduate Algorithms", "GA"),
            course("Artificial Intelligence", "AI"),
        ];
        let merged = merge_with_courses(&summaries, &courses);
        let names: Vec<&str> = merged.iter().map(|row| row.name.as_str()).collect();
        assert_eq!(
            names,
            ["Artificial Intelligence", "Graduate Algorithms", "Retired Course"]
        );

        assert_eq!(merged[0].semester, None);
        assert_eq!(merged[0].tag.as_deref(), Some("AI"));
        assert_eq!(merged[0].rating, None);

        assert_eq!(merged[1].tag.as_deref(), Some("GA"));
        assert_eq!(merged[1].review_count, Some(1));

        assert_eq!(merged[2].tag, None);
        assert_eq!(merged[2].department, None);
        assert_eq!(merged[2].rating, Some(3.0));
    }

    #[test]
    fn combined_table_is_chronological_with_all_last() {
        let summaries = summarize(&[
            review("Graduate Algorithms", "Fall 2021", 4.0, 4.0, 20.0),
            review("Graduate Algorithms", "Summer 2021", 4.0, 4.0, 20.0),
            review("Graduate Algorithms", "Spring 2021", 4.0, 4.0, 20.0),
            review("Computer Networks", "Fall 2020", 5.0, 2.0, 8.0),
        ])
        .rows;
        let courses = [
            course("Graduate Algorithms", "GA"),
            course("Computer Networks", "CN"),
            course("Artificial Intelligence", "AI"),
        ];
        let combined = combine(merge_with_courses(&summaries, &courses), &courses);
        assert_eq!(
            labels(&combined),
            [
                "Fall 2020",
                "Spring 2021",
                "Summer 2021",
                "Fall 2021",
                "All",
                "All",
                "All",
                "",
            ]
        );
        let all_time: Vec<&str> = combined
            .iter()
            .filter(|row| row.is_all_time())
            .map(|row| row.name.as_str())
            .collect();
        assert_eq!(
            all_time,
            ["Graduate Algorithms", "Computer Networks", "Artificial Intelligence"]
        );

        let animated = per_semester(&combined);
        assert_eq!(
            labels(&animated),
            ["Fall 2020", "Spring 2021", "Summer 2021", "Fall 2021"]
        );
    }
}
