use serde::{Deserialize, Serialize};

/// A course in the catalog.
///
/// Prerequisites are stored as a self-referencing many-to-many relation and
/// surfaced here as course codes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: i64,
    /// Unique course code, e.g. `CS201`.
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub credits: u32,
    /// Estimated difficulty on a 1-5 scale.
    pub difficulty_level: Option<f64>,
    /// Average weekly study hours.
    pub avg_study_hours: Option<f64>,
    /// Codes of the courses that must be completed first.
    pub prerequisites: Vec<String>,
}

/// Input for creating a course.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCourseInput {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub credits: u32,
    pub difficulty_level: Option<f64>,
    pub avg_study_hours: Option<f64>,
}
