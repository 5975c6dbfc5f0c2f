use serde::{Deserialize, Serialize};

use crate::semester::Semester;

/// A course as it appears in the OMS Central landing page payload
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCourse {
    pub name: String,
    #[serde(default)]
    pub codes: Vec<String>,
    pub review_count: Option<u32>,
    pub rating: Option<f64>,
    pub difficulty: Option<f64>,
    pub workload: Option<f64>,
    pub tags: Option<Vec<String>>,
    pub description: Option<String>,
}

/// A cleaned course with its all-time review summary
#[derive(Debug, Clone, PartialEq)]
pub struct CourseRecord {
    pub name: String,
    pub code: String,
    pub department: String,
    pub tag: String,
    pub description: Option<String>,
    pub review_count: u32,
    pub rating: f64,
    pub difficulty: f64,
    pub workload: f64,
}

/// One review scraped from a course's review page
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewRecord {
    pub name: String,
    pub semester: String,
    pub rating: f64,
    pub difficulty: f64,
    pub workload: f64,
}

/// Mean metrics of one course in one semester
#[derive(Debug, Clone, PartialEq)]
pub struct SemesterSummary {
    pub name: String,
    pub semester: Semester,
    pub rating: f64,
    pub difficulty: f64,
    pub workload: f64,
    pub review_count: u32,
}

/// A row of the chart table: either a per-semester summary or the all-time view of a course.
///
/// Columns an outer join could not fill stay `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CombinedRow {
    pub name: String,
    #[serde(serialize_with = "crate::semester::serialize_label")]
    pub semester: Option<Semester>,
    pub tag: Option<String>,
    #[serde(rename = "dept")]
    pub department: Option<String>,
    pub code: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "reviewCount")]
    pub review_count: Option<u32>,
    pub rating: Option<f64>,
    pub difficulty: Option<f64>,
    pub workload: Option<f64>,
}

impl CombinedRow {
    pub fn is_all_time(&self) -> bool {
        self.semester.as_ref().is_some_and(Semester::is_all)
    }
}

impl From<&CourseRecord> for CombinedRow {
    fn from(course: &CourseRecord) -> Self {
        CombinedRow {
            name: course.name.clone(),
            semester: Some(Semester::all()),
            tag: Some(course.tag.clone()),
            department: Some(course.department.clone()),
            code: Some(course.code.clone()),
            description: course.description.clone(),
            review_count: Some(course.review_count),
            rating: Some(course.rating),
            difficulty: Some(course.difficulty),
            workload: Some(course.workload),
        }
    }
}

/// Everything the charts are drawn from
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartData {
    /// Cleaned courses, all-time metrics
    pub courses: Vec<CourseRecord>,
    /// Per-semester and all-time rows, sorted chronologically
    pub combined: Vec<CombinedRow>,
    /// `combined` without the all-time rows
    pub by_semester: Vec<CombinedRow>,
}
