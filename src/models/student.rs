use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: i64,
    pub username: String,
    pub email: String,
    /// Programme code used by the recommender (e.g. `CS`, `MATH`, `ENG`).
    pub major: Option<String>,
    pub gpa: Option<f64>,
    pub created_at: DateTime<Utc>,
}

/// Input for registering a student.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateStudentInput {
    pub username: String,
    pub email: String,
    pub major: Option<String>,
    pub gpa: Option<f64>,
}
