//! Domain models for StudyPath.
//!
//! # Core Concepts
//!
//! ## Catalog Data
//!
//! Static example content embedded in the binary and never stored:
//!
//! - [`RoadmapEntry`]: A time-boxed block of skills in a learning roadmap.
//! - [`CareerPhase`]: A stage of an illustrative career progression with a fixed completion.
//! - [`CourseRecommendation`]: One course in a recommended semester timeline.
//!
//! ## Persistent Entities
//!
//! - [`Course`]: A catalog course with credits, difficulty and prerequisites.
//! - [`Student`]: A student with a major and GPA.
//! - [`Enrollment`]: A student's planned, in-progress or completed course.
//!
//! ## Transient Input
//!
//! - [`FeedbackSubmission`]: Feedback form contents. Logged on submit, never stored.

mod catalog;
mod course;
mod enrollment;
mod feedback;
mod student;

pub use catalog::*;
pub use course::*;
pub use enrollment::*;
pub use feedback::*;
pub use student::*;
