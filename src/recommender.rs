//! Major-based course recommendations.
//!
//! The model is a table from major to an ordered list of course codes.
//! Recommending means taking the major's list, dropping anything the
//! student has completed, and keeping the first [`MAX_RECOMMENDATIONS`].

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::db::Database;
use crate::models::Course;

pub const MAX_RECOMMENDATIONS: usize = 5;

/// What the recommender needs to know about a student.
#[derive(Debug, Clone, Default)]
pub struct StudentProfile {
    pub major: String,
    pub completed_courses: Vec<String>,
    pub gpa: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRecommender {
    by_major: BTreeMap<String, Vec<String>>,
}

impl Default for CourseRecommender {
    fn default() -> Self {
        let table: [(&str, [&str; 3]); 3] = [
            ("CS", ["CS101", "CS201", "CS301"]),
            ("MATH", ["MATH101", "MATH201", "STAT101"]),
            ("ENG", ["ENG101", "ENG201", "LIT101"]),
        ];

        Self {
            by_major: table
                .into_iter()
                .map(|(major, codes)| {
                    (
                        major.to_string(),
                        codes.into_iter().map(str::to_string).collect(),
                    )
                })
                .collect(),
        }
    }
}

impl CourseRecommender {
    pub fn new(by_major: BTreeMap<String, Vec<String>>) -> Self {
        Self { by_major }
    }

    /// Load the model from `path`, or write the default model there if the
    /// file does not exist yet.
    pub fn load_or_create(path: &Path) -> Result<Self> {
        if path.exists() {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read recommender model {}", path.display()))?;
            let model = serde_json::from_str(&raw)
                .with_context(|| format!("Invalid recommender model {}", path.display()))?;
            tracing::info!("Loaded recommender model from {}", path.display());
            return Ok(model);
        }

        let model = Self::default();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(&model)?)?;
        tracing::info!("Wrote default recommender model to {}", path.display());
        Ok(model)
    }

    pub fn recommend_courses(&self, profile: &StudentProfile) -> Vec<String> {
        self.by_major
            .get(&profile.major)
            .map(|codes| {
                codes
                    .iter()
                    .filter(|code| !profile.completed_courses.contains(*code))
                    .take(MAX_RECOMMENDATIONS)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[derive(Debug, Error)]
pub enum RecommendationError {
    #[error("No data provided")]
    NoData,

    #[error("Student ID is required")]
    MissingStudentId,

    #[error("Student not found")]
    StudentNotFound,

    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

/// Recommend catalog courses for a stored student.
pub fn recommend_for_student(
    db: &Database,
    recommender: &CourseRecommender,
    student_id: i64,
) -> Result<Vec<Course>, RecommendationError> {
    let student = db
        .get_student(student_id)?
        .ok_or(RecommendationError::StudentNotFound)?;

    let profile = StudentProfile {
        major: student.major.unwrap_or_default(),
        completed_courses: db.get_completed_course_codes(student_id)?,
        gpa: student.gpa,
    };

    let codes = recommender.recommend_courses(&profile);
    tracing::debug!(student_id, major = %profile.major, ?codes, "Recommended courses");

    Ok(db.get_courses_by_codes(&codes)?)
}
