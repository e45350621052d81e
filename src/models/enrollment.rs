use serde::{Deserialize, Serialize};

/// A student's relationship to a course in a given semester.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enrollment {
    pub id: i64,
    pub student_id: i64,
    pub course_id: i64,
    /// Code of the enrolled course, joined from the catalog.
    pub course_code: String,
    /// Semester label, e.g. "Fall 2023".
    pub semester: String,
    /// Letter grade such as "A" or "B+". Only set once graded.
    pub grade: Option<String>,
    pub status: EnrollmentStatus,
}

/// Progress of an enrollment.
///
/// - `Planned`: Scheduled for a future semester
/// - `InProgress`: Currently being taken
/// - `Completed`: Finished, counts towards prerequisites
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum EnrollmentStatus {
    #[default]
    Planned,
    InProgress,
    Completed,
}

impl EnrollmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Planned => "planned",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "planned" => Some(Self::Planned),
            "in-progress" => Some(Self::InProgress),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }
}

/// Input for enrolling a student in a course.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEnrollmentInput {
    pub student_id: i64,
    pub course_id: i64,
    pub semester: String,
    pub grade: Option<String>,
    #[serde(default)]
    pub status: EnrollmentStatus,
}
